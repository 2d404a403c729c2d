use std::fmt;
use std::path::Path;

use icalendar::{CalendarComponent, CalendarDateTime, Component, DatePerhapsTime};

use crate::error::{Error, Result};
use crate::ical::parse_calendar;

pub const REQUIRED_PROPERTIES: [&str; 2] = ["PRODID", "VERSION"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Outcome of re-reading a written calendar.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    pub missing_properties: Vec<String>,
    pub version: Option<String>,
    pub product_id: Option<String>,
    pub event_count: usize,
    pub valid_events: usize,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Required properties present and every event carries UID and DTSTART.
    /// An empty calendar is valid.
    pub fn is_valid(&self) -> bool {
        self.missing_properties.is_empty() && self.valid_events == self.event_count
    }

    /// One-line reason for an invalid calendar, `None` when valid. Missing
    /// calendar properties are named ahead of invalid events.
    pub fn failure_summary(&self) -> Option<String> {
        if !self.missing_properties.is_empty() {
            return Some(format!(
                "missing required properties: {}",
                self.missing_properties.join(", ")
            ));
        }
        let invalid = self.event_count - self.valid_events;
        (invalid > 0).then(|| format!("{} invalid events", invalid))
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    fn error(&mut self, message: String) {
        self.findings.push(Finding { severity: Severity::Error, message });
    }

    fn warn(&mut self, message: String) {
        self.findings.push(Finding { severity: Severity::Warning, message });
    }
}

fn is_zone_aware(start: &DatePerhapsTime) -> bool {
    matches!(
        start,
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(_)) | DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { .. })
    )
}

/// Parse ICS text and check its structure.
///
/// Unparseable text is an error; structural problems are reported as findings.
pub fn validate_ics(ics: &str) -> Result<ValidationReport> {
    let calendar = parse_calendar(ics)?;
    let mut report = ValidationReport::default();

    for key in REQUIRED_PROPERTIES {
        let value = calendar
            .properties
            .iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
            .map(|p| p.value().to_string());
        match key {
            "VERSION" => report.version = value.clone(),
            "PRODID" => report.product_id = value.clone(),
            _ => {}
        }
        if value.is_none() {
            report.missing_properties.push(key.to_string());
            report.error(format!("Missing required property: {}", key));
        }
    }

    for component in &calendar.components {
        let CalendarComponent::Event(event) = component else {
            continue;
        };
        report.event_count += 1;

        let Some(uid) = event.property_value("UID").map(str::to_string) else {
            report.error("Event missing UID".to_string());
            continue;
        };
        if event.property_value("DTSTART").is_none() {
            report.error(format!("Event missing DTSTART: {}", uid));
            continue;
        }
        match event.get_start() {
            Some(start) if is_zone_aware(&start) => {}
            Some(_) => report.warn(format!("Event has naive datetime (no timezone): {}", uid)),
            None => {
                report.error(format!("Invalid date format: {}", uid));
                continue;
            }
        }
        report.valid_events += 1;
    }

    if report.event_count == 0 {
        report.warn("Calendar contains no events".to_string());
    }
    Ok(report)
}

pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let ics = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    validate_ics(&ics)
}

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Accepted kickoff layouts, tried in order. The flag marks layouts whose
/// trailing `Z` pins the value to UTC.
const KICKOFF_FORMATS: [(&str, bool); 5] = [
    ("%Y-%m-%dT%H:%M:%S", false),
    ("%Y-%m-%dT%H:%M:%SZ", true),
    ("%Y-%m-%d %H:%M:%S", false),
    ("%Y-%m-%d %H:%M", false),
    ("%d/%m/%Y %H:%M", false),
];

/// Parse a kickoff string into a UTC instant.
///
/// Values without a zone marker are wall-clock times in `home_tz`. Returns
/// `None` for empty input or input matching none of the known layouts.
pub fn parse_kickoff(input: &str, home_tz: Tz) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    for (pat, is_utc) in KICKOFF_FORMATS.iter() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pat) {
            if *is_utc {
                return Some(Utc.from_utc_datetime(&naive));
            }
            return localize(naive, home_tz);
        }
    }
    None
}

fn localize(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        // Clocks going back: the same wall time happens twice, take the
        // standard-time (later) reading.
        LocalResult::Ambiguous(_, latest) => Some(latest.with_timezone(&Utc)),
        // Clocks going forward: the wall time never happens. Read it with the
        // offset in force before the jump.
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Join the feed's separate `date` and `time` fields into one kickoff string.
///
/// ISO dates become `YYYY-MM-DDTHH:MM:SS`; day-first dates are joined with a
/// space to match the `%d/%m/%Y %H:%M` layout. Returns an empty string when
/// either part is missing.
pub fn combine_date_time(date: Option<&str>, time: Option<&str>) -> String {
    let date = date.map(str::trim).unwrap_or("");
    let time = time.map(str::trim).unwrap_or("");
    if date.is_empty() || time.is_empty() {
        return String::new();
    }
    if date.contains('/') {
        return format!("{} {}", date, time);
    }
    if time.matches(':').count() == 1 {
        format!("{}T{}:00", date, time)
    } else {
        format!("{}T{}", date, time)
    }
}

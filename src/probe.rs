use std::fmt::Write;

use serde_json::Value;

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn branch(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

fn indent(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "    " } else { "│   " })
}

/// Render the shape of a JSON response as a tree. Lists show their length
/// and the shape of the first element; levels past `max_depth` become `...`.
pub fn render_structure(value: &Value, max_depth: usize) -> String {
    let mut out = String::new();
    walk(value, "", true, max_depth, 0, &mut out);
    out
}

fn walk(value: &Value, prefix: &str, is_last: bool, max_depth: usize, depth: usize, out: &mut String) {
    if depth > max_depth {
        let _ = writeln!(out, "{}{}...", prefix, branch(is_last));
        return;
    }
    match value {
        Value::Object(map) => {
            let len = map.len();
            for (i, (key, child)) in map.iter().enumerate() {
                let _ = writeln!(out, "{}{}{}: {}", prefix, branch(is_last), key, type_name(child));
                let non_empty = match child {
                    Value::Object(m) => !m.is_empty(),
                    Value::Array(a) => !a.is_empty(),
                    _ => false,
                };
                if non_empty {
                    walk(child, &indent(prefix, is_last), i + 1 == len, max_depth, depth + 1, out);
                }
            }
        }
        Value::Array(items) if !items.is_empty() => {
            let _ = writeln!(out, "{}{}list[{}]", prefix, branch(is_last), items.len());
            walk(&items[0], &indent(prefix, is_last), true, max_depth, depth + 1, out);
        }
        _ => {}
    }
}

/// First `n` match records of a `fixtures-results` response, if it has any.
pub fn sample_matches(value: &Value, n: usize) -> Option<&[Value]> {
    let matches = value.get("fixtures-results")?.get("matches")?.as_array()?;
    Some(&matches[..n.min(matches.len())])
}

//! Syntactic grammars for task names and cron schedules.
//!
//! Validation here is purely local: no filesystem, no scheduler state, no
//! side effects. Anything outside the grammar is rejected outright — there
//! is deliberately no escaping path, because the values cross into a
//! privileged execution context downstream.

/// Longest accepted task name, in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// Inclusive bounds for each of the five cron fields, in field order.
const CRON_FIELDS: [(&str, u32, u32); 5] = [
    ("minute", 0, 59),
    ("hour", 0, 23),
    ("day of month", 1, 31),
    ("month", 1, 12),
    ("day of week", 0, 7),
];

/// Checks a task name against the identifier grammar: 1 to
/// [`MAX_NAME_LEN`] bytes of ASCII letters, digits, `-`, or `_`, not
/// beginning with `-`.
///
/// # Errors
///
/// Returns the violated rule as a human-readable string. The string never
/// contains the rejected value.
pub fn check_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!("must be at most {MAX_NAME_LEN} bytes"));
    }
    if name.starts_with('-') {
        return Err("must not begin with '-'".to_string());
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err("may only contain ASCII letters, digits, '-', and '_'".to_string());
    }
    Ok(())
}

/// Checks a 5-field cron expression: minute, hour, day of month, month,
/// day of week. Each field is a comma list of `*`, a value, or a range
/// `a-b`, optionally followed by `/step`. Values are numeric only.
///
/// # Errors
///
/// Returns the violated rule, naming the offending field but not its value.
pub fn check_schedule(expr: &str) -> Result<(), String> {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    if fields.len() != CRON_FIELDS.len() {
        return Err(format!(
            "expected 5 whitespace-separated cron fields, found {}",
            fields.len()
        ));
    }
    for (field, (label, min, max)) in fields.iter().zip(CRON_FIELDS) {
        check_field(field, label, min, max)?;
    }
    Ok(())
}

/// Checks one cron field as a comma list of step-qualified elements.
fn check_field(field: &str, label: &str, min: u32, max: u32) -> Result<(), String> {
    for element in field.split(',') {
        if element.is_empty() {
            return Err(format!("{label} field has an empty list element"));
        }
        let (base, step) = match element.split_once('/') {
            Some((base, step)) => (base, Some(step)),
            None => (element, None),
        };
        if let Some(step) = step {
            let step = parse_value(step)
                .ok_or_else(|| format!("{label} field has a non-numeric step"))?;
            if step == 0 {
                return Err(format!("{label} field has a step of zero"));
            }
        }
        check_base(base, label, min, max)?;
    }
    Ok(())
}

/// Checks the `*` / value / `a-b` part of a field element.
fn check_base(base: &str, label: &str, min: u32, max: u32) -> Result<(), String> {
    if base == "*" {
        return Ok(());
    }
    if let Some((lo, hi)) = base.split_once('-') {
        let lo = parse_in_range(lo, label, min, max)?;
        let hi = parse_in_range(hi, label, min, max)?;
        if lo > hi {
            return Err(format!("{label} field has a descending range"));
        }
        return Ok(());
    }
    parse_in_range(base, label, min, max).map(|_| ())
}

fn parse_in_range(text: &str, label: &str, min: u32, max: u32) -> Result<u32, String> {
    let value = parse_value(text)
        .ok_or_else(|| format!("{label} field has a non-numeric value"))?;
    if value < min || value > max {
        return Err(format!("{label} field is outside {min}-{max}"));
    }
    Ok(value)
}

/// Parses an unsigned decimal value. Digits only: no sign, no whitespace,
/// no names.
fn parse_value(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

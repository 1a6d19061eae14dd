use chrono::{DateTime, Utc};

/// Short label for the date field, without the parens: `3w`, `5M`, `2m`.
///
/// An all-digit value is a `%at` timestamp and is measured against `now`;
/// anything else is a `%ar` phrase. A phrase that does not start with
/// `<number> <unit>` is returned trimmed but otherwise unchanged.
pub fn abbreviate_date(raw: &str, now: DateTime<Utc>) -> String {
    let raw = raw.trim();
    if !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && let Some(then) = raw.parse::<i64>().ok().and_then(|s| DateTime::from_timestamp(s, 0))
    {
        return elapsed_label(then, now);
    }
    abbreviate_relative(raw).unwrap_or_else(|| raw.to_string())
}

/// `"3 weeks ago"` → `"3w"`. Months use `M` so they don't read as minutes.
pub fn abbreviate_relative(phrase: &str) -> Option<String> {
    let mut tokens = phrase.split_whitespace();
    let number = tokens.next()?;
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let unit = tokens.next()?;
    let letter = if unit.starts_with("mo") {
        'M'
    } else {
        unit.chars().next()?
    };
    Some(format!("{}{}", number, letter))
}

/// Time between `then` and `now` in the largest unit below the next
/// boundary: seconds, minutes, hours, days, then weeks.
pub fn elapsed_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mut n = now.signed_duration_since(then).num_seconds().max(0);

    for (limit, unit) in [(60, 's'), (60, 'm'), (24, 'h'), (7, 'd')] {
        if n < limit {
            return format!("{}{}", n, unit);
        }
        n /= limit;
    }
    format!("{}w", n)
}

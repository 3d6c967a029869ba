//! Display formatting for currency amounts and backend timestamps.
//!
//! TRADE-OFFS
//! ==========
//! The backend sends ISO-8601 strings; anything that fails to parse is shown
//! verbatim rather than failing the row, so a malformed date degrades one
//! cell instead of the whole table.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an amount as storefront currency, e.g. `AED 1,234.56`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("AED {sign}{grouped}.{frac_part}")
}

/// Render a backend ISO-8601 timestamp as `Apr 04, 2025, 7:30 PM`.
///
/// Returns the input unchanged when it does not look like an ISO timestamp.
#[must_use]
pub fn format_date(raw: &str) -> String {
    match parse_iso_minute(raw) {
        Some((year, month, day, hour, minute)) => {
            let month_name = MONTHS[usize::from(month) - 1];
            let (hour12, meridiem) = to_twelve_hour(hour);
            format!("{month_name} {day:02}, {year}, {hour12}:{minute:02} {meridiem}")
        }
        None => raw.to_owned(),
    }
}

/// Parse `YYYY-MM-DDTHH:MM[...]` down to minute precision.
fn parse_iso_minute(raw: &str) -> Option<(u16, u8, u8, u8, u8)> {
    let (date, time) = raw.split_once('T')?;

    let mut date_parts = date.splitn(3, '-');
    let year: u16 = date_parts.next()?.parse().ok()?;
    let month: u8 = date_parts.next()?.parse().ok()?;
    let day: u8 = date_parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let mut time_parts = time.splitn(3, ':');
    let hour: u8 = time_parts.next()?.parse().ok()?;
    let minute: u8 = time_parts.next()?.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    Some((year, month, day, hour, minute))
}

fn to_twelve_hour(hour: u8) -> (u8, &'static str) {
    match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    }
}

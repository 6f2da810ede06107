//! Formatting utilities for display values.

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an ISO-ish date string as a long human date.
///
/// `"2024-03-09"` (optionally followed by a `T`/space time suffix) becomes
/// `"March 9, 2024"`. Anything that does not look like a date is returned
/// verbatim; dates are display-only strings here.
pub fn format_date_long(date: &str) -> String {
    parse_iso_date(date.trim()).map_or_else(
        || date.to_string(),
        |(year, month, day)| format!("{} {}, {}", MONTHS[month - 1], day, year),
    )
}

/// Parse the `YYYY-MM-DD` prefix of an ISO-ish date string.
fn parse_iso_date(date: &str) -> Option<(i32, usize, u32)> {
    // Only `T` or a space may follow the date part.
    match date.as_bytes().get(10) {
        None | Some(b'T') | Some(b' ') => {}
        Some(_) => return None,
    }

    let mut parts = date.get(..10)?.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;

    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }

    Some((year, month, day))
}

fn days_in_month(year: i32, month: usize) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

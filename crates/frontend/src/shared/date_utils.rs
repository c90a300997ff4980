//! Date helpers. The wire format is `YYYY-MM-DD`, always built from the
//! browser's *local* date components: formatting through UTC used to shift
//! dates across midnight for anyone west of Greenwich, so `js_sys::Date`
//! getters are the only source of "today".

use chrono::NaiveDate;

/// `YYYY-MM-DD` from explicit components (month is 1-based).
pub fn format_ymd(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Today's local calendar date.
pub fn today_local() -> String {
    let now = js_sys::Date::new_0();
    format_ymd(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

/// First day of the current local month; default start of report ranges.
pub fn first_of_month_local() -> String {
    let now = js_sys::Date::new_0();
    format_ymd(now.get_full_year() as i32, now.get_month() + 1, 1)
}

/// `2025-01-31` -> `31/01/2025`. Unrecognized input passes through.
pub fn format_display(date: &str) -> String {
    let date_part = date.split('T').next().unwrap_or(date);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ymd_is_zero_padded() {
        assert_eq!(format_ymd(2025, 1, 5), "2025-01-05");
        assert_eq!(format_ymd(2025, 12, 31), "2025-12-31");
    }

    #[test]
    fn display_format_is_day_first() {
        assert_eq!(format_display("2025-01-31"), "31/01/2025");
        assert_eq!(format_display("2025-01-31T10:00:00Z"), "31/01/2025");
    }

    #[test]
    fn unrecognized_dates_pass_through() {
        assert_eq!(format_display("kemarin"), "kemarin");
        assert_eq!(format_display(""), "");
    }
}

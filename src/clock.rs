use std::error::Error;

use time::{macros::offset, OffsetDateTime, UtcOffset};

static IST: UtcOffset = offset!(+5:30);

/// Formats `datetime` the way the dashboard clock shows it: Indian
/// Standard Time, long weekday and month, 12-hour clock.
pub fn format_ist(datetime: OffsetDateTime) -> Result<String, Box<dyn Error>> {
    let format = time::macros::format_description!(
        "[weekday], [day] [month repr:long] [year], [hour repr:12]:[minute]:[second] [period case:lower]"
    );
    Ok(format!("{} IST", datetime.to_offset(IST).format(&format)?))
}

/// The current wall-clock line.
pub fn now_ist() -> Result<String, Box<dyn Error>> {
    format_ist(OffsetDateTime::now_utc())
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_in_ist() {
        let line = format_ist(datetime!(2024-01-15 10:00:00 UTC)).unwrap();
        assert_eq!(line, "Monday, 15 January 2024, 03:30:00 pm IST");
    }

    #[test]
    fn crosses_midnight() {
        let line = format_ist(datetime!(2024-01-15 20:00:00 UTC)).unwrap();
        assert_eq!(line, "Tuesday, 16 January 2024, 01:30:00 am IST");
    }
}

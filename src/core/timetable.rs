use chrono::{DateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::prelude::*;

/// Next wall-clock occurrence of the daily check, strictly after `now`.
pub fn next_check_at(now: DateTime<Tz>, check_time: NaiveTime) -> Result<DateTime<Tz>> {
    let mut date = now.date_naive();
    if now.time() >= check_time {
        date = date.succ_opt().context("the next day is out of range")?;
    }
    now.timezone()
        .from_local_datetime(&date.and_time(check_time))
        .earliest()
        .with_context(|| format!("`{check_time}` does not exist on {date} in {}", now.timezone()))
}

#[cfg(test)]
mod tests {
    use chrono_tz::Europe::London;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_check_time_still_ahead_today() -> Result {
        let now = London.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        assert_eq!(
            next_check_at(now, at(17, 0))?,
            London.with_ymd_and_hms(2025, 6, 1, 17, 0, 0).unwrap(),
        );
        Ok(())
    }

    #[test]
    fn test_check_time_already_passed_today() -> Result {
        let now = London.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap();
        assert_eq!(
            next_check_at(now, at(17, 0))?,
            London.with_ymd_and_hms(2025, 6, 2, 17, 0, 0).unwrap(),
        );
        Ok(())
    }

    #[test]
    fn test_exactly_at_check_time_rolls_over() -> Result {
        let now = London.with_ymd_and_hms(2025, 6, 1, 17, 0, 0).unwrap();
        assert_eq!(
            next_check_at(now, at(17, 0))?,
            London.with_ymd_and_hms(2025, 6, 2, 17, 0, 0).unwrap(),
        );
        Ok(())
    }

    #[test]
    fn test_check_time_in_spring_forward_gap() {
        // London skips 01:00–02:00 on 2025-03-30:
        let now = London.with_ymd_and_hms(2025, 3, 29, 17, 0, 0).unwrap();
        assert!(next_check_at(now, at(1, 30)).is_err());
    }
}

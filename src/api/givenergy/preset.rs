use chrono::NaiveTime;
use serde::{Serialize, Serializer};

/// Timed-charge preset payload.
#[derive(Serialize)]
pub struct TimedCharge {
    #[serde(rename = "enabled")]
    pub is_enabled: bool,

    pub slots: Vec<ChargeSlot>,
}

impl TimedCharge {
    /// Enable charging for the given off-peak window, up to a full battery.
    pub fn enabled(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            is_enabled: true,
            slots: vec![ChargeSlot { start_time, end_time, percent_limit: 100 }],
        }
    }

    /// Disable charging. The API requires at least one slot even when disabled.
    pub fn disabled() -> Self {
        Self {
            is_enabled: false,
            slots: vec![ChargeSlot {
                start_time: NaiveTime::MIN,
                end_time: NaiveTime::MIN,
                percent_limit: 100,
            }],
        }
    }
}

#[derive(Serialize)]
pub struct ChargeSlot {
    #[serde(rename = "start_time", serialize_with = "serialize_time")]
    pub start_time: NaiveTime,

    #[serde(rename = "end_time", serialize_with = "serialize_time")]
    pub end_time: NaiveTime,

    /// Target state of charge at the end of the slot.
    #[serde(rename = "percent_limit")]
    pub percent_limit: u32,
}

/// The preset endpoint expects `HH:MM`, not a full time-of-day.
fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_serialize_enabled() -> Result {
        let preset = TimedCharge::enabled(
            NaiveTime::from_hms_opt(1, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(5, 30, 0).unwrap(),
        );
        assert_eq!(
            serde_json::to_value(&preset)?,
            json!({
                "enabled": true,
                "slots": [{"start_time": "01:30", "end_time": "05:30", "percent_limit": 100}],
            }),
        );
        Ok(())
    }

    #[test]
    fn test_serialize_disabled() -> Result {
        assert_eq!(
            serde_json::to_value(&TimedCharge::disabled())?,
            json!({
                "enabled": false,
                "slots": [{"start_time": "00:00", "end_time": "00:00", "percent_limit": 100}],
            }),
        );
        Ok(())
    }
}

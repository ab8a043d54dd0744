//! [OpenWeatherMap](https://openweathermap.org/forecast5) 5-day forecast client.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_with::serde_as;

use crate::{prelude::*, quantity::percent::Percent};

/// Number of 3-hour forecast slots covering the next 24 hours.
const N_SLOTS: usize = 8;

pub struct Api {
    client: Client,
    url: String,
}

/// Cloud cover for one 3-hour forecast slot.
pub struct CloudCoverSlot {
    pub start_time: DateTime<Utc>,
    pub cloud_cover: Percent,
    pub conditions: String,
}

impl Api {
    pub fn new(api_key: &str, latitude: f64, longitude: f64) -> Result<Self> {
        let url = format!(
            "https://api.openweathermap.org/data/2.5/forecast?lat={latitude}&lon={longitude}&appid={api_key}&units=metric"
        );
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self { client, url })
    }

    /// Fetch the cloud cover for the upcoming 24 hours.
    #[instrument(skip_all)]
    pub async fn get_forecast(&self) -> Result<Vec<CloudCoverSlot>> {
        info!("fetching…");
        let mut entries = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("failed to call the forecast endpoint")?
            .error_for_status()
            .context("the forecast request failed")?
            .json::<Forecast>()
            .await
            .context("failed to deserialize the forecast")?
            .entries;
        ensure!(!entries.is_empty(), "the forecast is empty");
        entries.sort_by_key(|entry| entry.start_time);
        entries.truncate(N_SLOTS);
        Ok(entries
            .into_iter()
            .map(CloudCoverSlot::from)
            .inspect(|slot| {
                debug!(
                    start_time = %slot.start_time,
                    cloud_cover = %slot.cloud_cover,
                    conditions = %slot.conditions,
                    "forecast slot",
                );
            })
            .collect())
    }
}

impl From<ForecastEntry> for CloudCoverSlot {
    fn from(entry: ForecastEntry) -> Self {
        Self {
            start_time: entry.start_time,
            cloud_cover: entry.clouds.cover,
            conditions: entry
                .conditions
                .into_iter()
                .next()
                .map(|condition| condition.description)
                .unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct Forecast {
    #[serde(rename = "list")]
    entries: Vec<ForecastEntry>,
}

#[serde_as]
#[derive(Deserialize)]
struct ForecastEntry {
    #[serde_as(as = "serde_with::TimestampSeconds<i64>")]
    #[serde(rename = "dt")]
    start_time: DateTime<Utc>,

    clouds: Clouds,

    #[serde(rename = "weather", default)]
    conditions: Vec<Condition>,
}

#[derive(Deserialize)]
struct Clouds {
    /// Cloud cover percentage.
    #[serde(rename = "all")]
    cover: Percent,
}

#[derive(Deserialize)]
struct Condition {
    description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_forecast() -> Result {
        let forecast: Forecast = serde_json::from_str(
            r#"{
                "cod": "200",
                "cnt": 2,
                "list": [
                    {
                        "dt": 1717243200,
                        "main": {"temp": 14.3},
                        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds"}],
                        "clouds": {"all": 40},
                        "dt_txt": "2024-06-01 12:00:00"
                    },
                    {
                        "dt": 1717254000,
                        "main": {"temp": 13.1},
                        "weather": [],
                        "clouds": {"all": 75},
                        "dt_txt": "2024-06-01 15:00:00"
                    }
                ]
            }"#,
        )?;
        let slot = CloudCoverSlot::from(forecast.entries.into_iter().next().unwrap());
        assert_eq!(slot.start_time.timestamp(), 1_717_243_200);
        assert_eq!(slot.cloud_cover, Percent(40.0));
        assert_eq!(slot.conditions, "scattered clouds");
        Ok(())
    }
}

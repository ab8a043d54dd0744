//! [GivEnergy Cloud](https://api.givenergy.cloud/) client.

mod models;
mod preset;
mod response;

use std::time::Duration;

use http::{
    HeaderMap,
    HeaderValue,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

pub use self::{
    models::{CommunicationDevice, SystemData},
    preset::{ChargeSlot, TimedCharge},
};
use self::response::Response;
use crate::prelude::*;

pub struct Api {
    client: Client,
}

impl Api {
    pub fn new(api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));
        headers.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
        authorization.set_sensitive(true);
        headers.append(AUTHORIZATION, authorization);
        let client = Client::builder()
            .user_agent("nightjar")
            .timeout(Duration::from_secs(15))
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }

    /// Resolve the inverter serial number from the communication device identifier.
    #[instrument(skip_all, fields(system_id = system_id))]
    pub async fn get_inverter_serial(&self, system_id: &str) -> Result<String> {
        info!("resolving…");
        let device: CommunicationDevice = self
            .get(&format!("communication-device/{system_id}"))
            .await
            .context("failed to get the communication device")?;
        Ok(device.inverter.serial)
    }

    /// Fetch the latest inverter system data.
    #[instrument(skip_all, fields(inverter_serial = inverter_serial))]
    pub async fn get_system_data(&self, inverter_serial: &str) -> Result<SystemData> {
        info!("fetching…");
        self.get(&format!("inverter/{inverter_serial}/system-data/latest"))
            .await
            .context("failed to get the latest system data")
    }

    /// Push a timed-charge preset, either enabling or disabling the overnight slot.
    #[instrument(skip_all, fields(inverter_serial = inverter_serial, is_enabled = preset.is_enabled))]
    pub async fn set_timed_charge(
        &self,
        inverter_serial: &str,
        preset: &TimedCharge,
    ) -> Result {
        info!("setting…");
        self.post(&format!("inverter/{inverter_serial}/presets/timed-charge"), preset)
            .await
            .context("failed to set the timed-charge preset")
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
    async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.client
            .get(format!("https://api.givenergy.cloud/v1/{path}"))
            .send()
            .await
            .with_context(|| format!("failed to call `{path}`"))?
            .error_for_status()
            .with_context(|| format!("`{path}` failed"))?
            .json::<Response<R>>()
            .await
            .with_context(|| format!("failed to deserialize `{path}` response JSON"))
            .map(|response| response.data)
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
    async fn post<B>(&self, path: &str, body: &B) -> Result
    where
        B: Serialize,
    {
        self.client
            .post(format!("https://api.givenergy.cloud/v1/{path}"))
            .json(body)
            .send()
            .await
            .with_context(|| format!("failed to call `{path}`"))?
            .error_for_status()
            .with_context(|| format!("`{path}` failed"))?;
        Ok(())
    }
}

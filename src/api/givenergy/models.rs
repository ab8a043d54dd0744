use serde::Deserialize;

use crate::quantity::{percent::Percent, power::Watts};

#[derive(Deserialize)]
pub struct CommunicationDevice {
    pub inverter: Inverter,
}

#[derive(Deserialize)]
pub struct Inverter {
    pub serial: String,
}

/// Latest system data, reduced to the readings the decision needs.
#[derive(Deserialize)]
pub struct SystemData {
    pub battery: Battery,
    pub solar: Solar,
}

#[derive(Deserialize)]
pub struct Battery {
    #[serde(rename = "percent")]
    pub state_of_charge: Percent,

    /// Instantaneous battery power flow, negative while charging.
    pub power: Watts,
}

#[derive(Deserialize)]
pub struct Solar {
    pub power: Watts,
}

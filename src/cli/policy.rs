use chrono::NaiveTime;
use clap::Parser;

use crate::quantity::{energy::KilowattHours, percent::Percent};

#[derive(Parser)]
pub struct PolicyArgs {
    /// Schedule overnight charging only when the battery is below this level.
    #[clap(long = "min-battery-level", env = "MIN_BATTERY_LEVEL", default_value = "20.0")]
    pub min_battery_level: Percent,

    /// Schedule overnight charging only when the estimated generation is below this amount.
    #[clap(long = "charge-threshold-kwh", env = "CHARGE_THRESHOLD", default_value = "3.0")]
    pub charge_threshold: KilowattHours,

    /// Start of the off-peak charge window.
    #[clap(long = "charge-window-start", env = "CHARGE_WINDOW_START", default_value = "01:30:00")]
    pub charge_window_start: NaiveTime,

    /// End of the off-peak charge window.
    #[clap(long = "charge-window-end", env = "CHARGE_WINDOW_END", default_value = "05:30:00")]
    pub charge_window_end: NaiveTime,

    #[clap(flatten)]
    pub estimator: EstimatorArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct EstimatorArgs {
    /// First hour of the day counted as daylight.
    #[clap(long = "daylight-start-hour", env = "DAYLIGHT_START_HOUR", default_value = "6")]
    pub daylight_start_hour: u32,

    /// First hour of the day no longer counted as daylight.
    #[clap(long = "daylight-end-hour", env = "DAYLIGHT_END_HOUR", default_value = "20")]
    pub daylight_end_hour: u32,

    /// Hour at which the daylight intensity peaks.
    #[clap(long = "peak-sun-hour", env = "PEAK_SUN_HOUR", default_value = "13")]
    pub peak_sun_hour: u32,

    /// Clear-sky generation of one 3-hour forecast slot.
    #[clap(long = "clear-sky-slot-kwh", env = "CLEAR_SKY_SLOT_KWH", default_value = "3.0")]
    pub clear_sky_slot_energy: KilowattHours,
}

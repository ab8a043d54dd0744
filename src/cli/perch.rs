use chrono::{NaiveTime, Timelike};
use clap::{Parser, Subcommand};

use crate::{
    api::{givenergy, openweathermap},
    cli::{EstimatorArgs, GivEnergyApiArgs, WeatherArgs},
    core::estimate,
    prelude::*,
    tables::build_forecast_table,
};

#[derive(Parser)]
pub struct PerchArgs {
    #[command(subcommand)]
    command: PerchCommand,
}

impl PerchArgs {
    pub async fn run(self) -> Result {
        match self.command {
            PerchCommand::GivEnergy(args) => args.run().await,
            PerchCommand::Forecast(args) => args.run().await,
        }
    }
}

#[derive(Subcommand)]
pub enum PerchCommand {
    /// Test GivEnergy Cloud connectivity.
    GivEnergy(PerchGivEnergyArgs),

    /// Fetch the weather forecast and print the generation estimate.
    Forecast(PerchForecastArgs),
}

#[derive(Parser)]
pub struct PerchGivEnergyArgs {
    #[clap(flatten)]
    api: GivEnergyApiArgs,

    #[command(subcommand)]
    command: PerchGivEnergyCommand,
}

#[derive(Subcommand)]
pub enum PerchGivEnergyCommand {
    /// Resolve the inverter serial number.
    Inverter,

    /// Get the latest battery and solar readings.
    SystemData,

    /// Enable the timed-charge preset for the given window.
    SetCharge(SetChargeArgs),

    /// Disable the timed-charge preset.
    ClearCharge,
}

#[derive(Parser)]
pub struct SetChargeArgs {
    #[clap(long = "charge-window-start", env = "CHARGE_WINDOW_START", default_value = "01:30:00")]
    start_time: NaiveTime,

    #[clap(long = "charge-window-end", env = "CHARGE_WINDOW_END", default_value = "05:30:00")]
    end_time: NaiveTime,
}

impl PerchGivEnergyArgs {
    async fn run(self) -> Result {
        let api = givenergy::Api::new(&self.api.api_key)?;
        let inverter_serial = api.get_inverter_serial(&self.api.system_id).await?;
        info!(%inverter_serial, "gotcha");

        match self.command {
            PerchGivEnergyCommand::Inverter => {}
            PerchGivEnergyCommand::SystemData => {
                let system_data = api.get_system_data(&inverter_serial).await?;
                info!(
                    state_of_charge = %system_data.battery.state_of_charge,
                    battery_power = %system_data.battery.power,
                    solar_power = %system_data.solar.power,
                    "gotcha",
                );
            }
            PerchGivEnergyCommand::SetCharge(args) => {
                let preset = givenergy::TimedCharge::enabled(args.start_time, args.end_time);
                api.set_timed_charge(&inverter_serial, &preset).await?;
            }
            PerchGivEnergyCommand::ClearCharge => {
                api.set_timed_charge(&inverter_serial, &givenergy::TimedCharge::disabled()).await?;
            }
        }

        Ok(())
    }
}

#[derive(Parser)]
pub struct PerchForecastArgs {
    #[clap(flatten)]
    weather: WeatherArgs,

    #[clap(flatten)]
    estimator: EstimatorArgs,
}

impl PerchForecastArgs {
    async fn run(self) -> Result {
        let api = openweathermap::Api::new(
            &self.weather.api_key,
            self.weather.latitude,
            self.weather.longitude,
        )?;
        let forecast = api.get_forecast().await?;
        let total = estimate::estimate_total(
            &self.estimator,
            forecast.iter().map(|slot| {
                (slot.start_time.with_timezone(&self.weather.timezone).hour(), slot.cloud_cover)
            }),
        );
        println!("{}", build_forecast_table(&forecast, &self.estimator, self.weather.timezone));
        info!(%total, "estimated the upcoming generation");
        Ok(())
    }
}

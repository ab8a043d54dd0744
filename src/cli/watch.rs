use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use clap::Parser;
use tokio::time::sleep;

use crate::{
    api::{givenergy, openweathermap},
    cli::{GivEnergyApiArgs, HeartbeatArgs, PolicyArgs, WeatherArgs},
    core::{decision::ChargeDecision, estimate, timetable},
    prelude::*,
};

/// How often the loop checks whether the next run is due.
const POLLING_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Parser)]
pub struct WatchArgs {
    /// Local time of the daily check.
    #[clap(long = "daily-check-time", env = "DAILY_CHECK_TIME", default_value = "17:00:00")]
    pub daily_check_time: NaiveTime,

    /// Evaluate the decision but do not push it to GivEnergy Cloud (dry run).
    #[clap(long)]
    pub scout: bool,

    #[clap(flatten)]
    pub give_energy_api: GivEnergyApiArgs,

    #[clap(flatten)]
    pub weather: WeatherArgs,

    #[clap(flatten)]
    pub policy: PolicyArgs,

    #[clap(flatten)]
    pub heartbeat: HeartbeatArgs,
}

impl WatchArgs {
    pub async fn run(self) -> Result {
        let give_energy = givenergy::Api::new(&self.give_energy_api.api_key)?;
        let weather = openweathermap::Api::new(
            &self.weather.api_key,
            self.weather.latitude,
            self.weather.longitude,
        )?;
        let inverter_serial = give_energy
            .get_inverter_serial(&self.give_energy_api.system_id)
            .await
            .context("failed to resolve the inverter serial number")?;
        info!(%inverter_serial, "resolved the inverter");

        let should_terminate = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&should_terminate))?;
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&should_terminate))?;

        // The first check runs right away, the following ones at the configured time:
        let mut next_check_at = Utc::now().with_timezone(&self.weather.timezone);

        while !should_terminate.load(Ordering::Relaxed) {
            let now = Utc::now().with_timezone(&self.weather.timezone);
            if now >= next_check_at {
                match self.check(&give_energy, &weather, &inverter_serial, now).await {
                    Ok(_decision) => {
                        self.heartbeat.send().await;
                    }
                    Err(error) => {
                        error!("the check failed, keeping the previous schedule: {error:#}");
                    }
                }
                next_check_at = timetable::next_check_at(now, self.daily_check_time)?;
                info!(next_check_at = %next_check_at, "scheduled the next check");
            }
            sleep(POLLING_INTERVAL).await;
        }

        info!("terminating…");
        Ok(())
    }

    /// One decision cycle: fetch the inputs, estimate, decide, apply.
    ///
    /// Any failure aborts the cycle without touching the previously applied schedule.
    #[instrument(skip_all)]
    async fn check(
        &self,
        give_energy: &givenergy::Api,
        weather: &openweathermap::Api,
        inverter_serial: &str,
        now: DateTime<Tz>,
    ) -> Result<ChargeDecision> {
        info!(now = %now, "checking…");
        let system_data = give_energy
            .get_system_data(inverter_serial)
            .await
            .context("failed to fetch the battery status")?;
        info!(
            state_of_charge = %system_data.battery.state_of_charge,
            battery_power = %system_data.battery.power,
            solar_power = %system_data.solar.power,
            "fetched the battery status",
        );

        let forecast = weather
            .get_forecast()
            .await
            .context("failed to fetch the weather forecast")?;
        let estimated_generation = estimate::estimate_total(
            &self.policy.estimator,
            forecast.iter().map(|slot| {
                (slot.start_time.with_timezone(&self.weather.timezone).hour(), slot.cloud_cover)
            }),
        );
        info!(%estimated_generation, "estimated the upcoming generation");

        let decision = ChargeDecision::new(
            system_data.battery.state_of_charge,
            estimated_generation,
            self.policy.min_battery_level,
            self.policy.charge_threshold,
        );
        match decision {
            ChargeDecision::Schedule => {
                info!("low generation and battery level expected, scheduling the overnight charge");
            }
            ChargeDecision::Cancel => {
                info!("sufficient generation or battery level, cancelling the overnight charge");
            }
        }

        if self.scout {
            info!("scouting, not pushing the preset");
            return Ok(decision);
        }
        let preset = match decision {
            ChargeDecision::Schedule => givenergy::TimedCharge::enabled(
                self.policy.charge_window_start,
                self.policy.charge_window_end,
            ),
            ChargeDecision::Cancel => givenergy::TimedCharge::disabled(),
        };
        give_energy
            .set_timed_charge(inverter_serial, &preset)
            .await
            .context("failed to update the timed-charge preset")?;
        Ok(decision)
    }
}

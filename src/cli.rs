mod givenergy;
mod heartbeat;
mod perch;
mod policy;
mod watch;
mod weather;

use clap::{Parser, Subcommand};

pub use self::{
    givenergy::GivEnergyApiArgs,
    heartbeat::HeartbeatArgs,
    perch::PerchArgs,
    policy::{EstimatorArgs, PolicyArgs},
    watch::WatchArgs,
    weather::WeatherArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: watch the battery and keep the overnight charge schedule up to date.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Development tools.
    #[clap(name = "perch")]
    Perch(Box<PerchArgs>),
}

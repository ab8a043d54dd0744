use clap::Parser;

#[derive(Parser)]
pub struct GivEnergyApiArgs {
    /// GivEnergy Cloud API key.
    #[clap(long = "givenergy-api-key", env = "GIVENERGY_API_KEY")]
    pub api_key: String,

    /// Communication device identifier, for example `WO2227G735`.
    #[clap(long = "givenergy-system-id", env = "GIVENERGY_SYSTEM_ID")]
    pub system_id: String,
}

use chrono_tz::Tz;
use clap::Parser;

#[derive(Parser)]
pub struct WeatherArgs {
    /// OpenWeatherMap API key.
    #[clap(long = "weather-api-key", env = "WEATHER_API_KEY")]
    pub api_key: String,

    /// Site latitude.
    #[clap(long, env = "LOCATION_LAT", allow_hyphen_values = true)]
    pub latitude: f64,

    /// Site longitude.
    #[clap(long, env = "LOCATION_LON", allow_hyphen_values = true)]
    pub longitude: f64,

    /// IANA timezone of the site.
    #[clap(long, env = "TIMEZONE", default_value = "Europe/London")]
    pub timezone: Tz,
}

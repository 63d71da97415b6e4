mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use clima_core::error::ClimaError;
use clima_core::source::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_LANG, DEFAULT_UNITS};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "clima",
    version,
    about = "Health and weather dashboard backed by OpenWeather"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ApiArgs {
    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API root URL
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Language for descriptions and alerts (e.g., pt_br, en)
    #[arg(long, default_value = DEFAULT_LANG)]
    lang: String,

    /// Units: metric, imperial or standard
    #[arg(long, default_value = DEFAULT_UNITS)]
    units: String,
}

impl ApiArgs {
    fn into_config(self) -> Result<ClientConfig, ClimaError> {
        let mut config = ClientConfig::new(self.api_key.unwrap_or_default())?;
        config.base_url = self.base_url;
        config.lang = self.lang;
        config.units = self.units;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Current conditions, air quality, UV, forecast and alerts for a city
    Dashboard {
        /// City name
        #[arg(long, default_value = "Rio de Janeiro")]
        city: String,

        /// Country code (e.g., br, us, ca)
        #[arg(long, default_value = "br")]
        country: String,

        /// Forecast date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        api: ApiArgs,
    },
    /// Temperature trend over the whole forecast window
    Forecast {
        /// City name
        #[arg(long, default_value = "Rio de Janeiro")]
        city: String,

        /// Country code (e.g., br, us, ca)
        #[arg(long, default_value = "br")]
        country: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        api: ApiArgs,
    },
    /// Fetch and evaluate air quality at a coordinate
    Air {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        api: ApiArgs,
    },
    /// Evaluate a saved components object or air-pollution response
    Evaluate {
        /// Path to JSON file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Print the recommended pollutant levels
    Levels,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clima_cli=info,clima_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dashboard {
            city,
            country,
            date,
            output,
            api,
        } => api
            .into_config()
            .and_then(|config| commands::dashboard::run(config, &city, &country, date, &output)),
        Commands::Forecast {
            city,
            country,
            output,
            api,
        } => api
            .into_config()
            .and_then(|config| commands::forecast::run(config, &city, &country, &output)),
        Commands::Air {
            lat,
            lon,
            output,
            api,
        } => api
            .into_config()
            .and_then(|config| commands::air::run(config, lat, lon, &output)),
        Commands::Evaluate { input_file, output } => commands::air::evaluate(input_file, &output),
        Commands::Levels => commands::levels::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

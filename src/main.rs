//! Home energy calculator entry point: CLI wiring and settings loading.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use home_energy_calc::config::Settings;
use home_energy_calc::household::{
    Age, ApplianceSelection, HomeConfiguration, HousingType, Submission,
};
use home_energy_calc::io::export::export_csv;
use home_energy_calc::logging::init_tracing;
use home_energy_calc::projection::EnergyRate;
use home_energy_calc::report::EstimateRecord;
use home_energy_calc::runner::calculate;

#[derive(Parser)]
#[command(name = "home-energy-calc")]
#[command(about = "Estimate daily household energy use and cost", long_about = None)]
struct Cli {
    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    /// Age in years
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=120))]
    age: u32,

    /// City
    #[arg(long, default_value = "")]
    city: String,

    /// Area name
    #[arg(long, default_value = "")]
    area: String,

    /// Housing type (flat, tenament)
    #[arg(long)]
    housing: Option<HousingType>,

    /// Home configuration (1bhk, 2bhk, 3bhk)
    #[arg(long)]
    configuration: Option<HomeConfiguration>,

    /// Air conditioning is used
    #[arg(long)]
    ac: bool,

    /// Refrigerator is used
    #[arg(long)]
    fridge: bool,

    /// Washing machine is used
    #[arg(long)]
    washing_machine: bool,

    /// Rate per kWh, overriding the configured default
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=10))]
    rate: Option<u32>,

    /// TOML settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the estimate as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Export the breakdown table to CSV
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Start the REST API server instead of calculating once
    #[cfg(feature = "api")]
    #[arg(long)]
    serve: bool,

    /// API bind address, overriding `server.bind`
    #[cfg(feature = "api")]
    #[arg(long, requires = "serve")]
    bind: Option<String>,

    /// Run the interactive terminal form
    #[cfg(feature = "tui")]
    #[arg(long)]
    tui: bool,
}

impl Cli {
    fn submission(&self) -> Submission {
        Submission {
            name: self.name.clone(),
            // Range is enforced by the value parser.
            age: Age::try_from(self.age).unwrap_or_default(),
            city: self.city.clone(),
            area: self.area.clone(),
            housing_type: self.housing,
            configuration: self.configuration,
            appliances: ApplianceSelection {
                air_conditioning: self.ac,
                refrigerator: self.fridge,
                washing_machine: self.washing_machine,
            },
        }
    }
}

/// Loads settings from `path` (or defaults) and exits on any error.
fn load_settings(path: Option<&Path>) -> Settings {
    let settings = match path {
        Some(p) => Settings::from_toml_file(p).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            process::exit(1);
        }),
        None => Settings::default(),
    };

    let errors = settings.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("error: {e}");
        }
        process::exit(1);
    }
    settings
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so log output would corrupt it.
    #[cfg(feature = "tui")]
    let tui = cli.tui;
    #[cfg(not(feature = "tui"))]
    let tui = false;
    if !tui {
        init_tracing();
    }

    let settings = load_settings(cli.settings.as_deref());
    let rate = cli
        .rate
        .and_then(|r| EnergyRate::try_from(r).ok())
        .unwrap_or(settings.tariff.rate_per_kwh);

    #[cfg(feature = "tui")]
    if cli.tui {
        let mut app = home_energy_calc::tui::runtime::App::new(rate, &settings.tariff.currency);
        app.submission = cli.submission();
        if let Err(e) = home_energy_calc::tui::run(app) {
            eprintln!("error: TUI crashed: {e}");
            process::exit(1);
        }
        return;
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::sync::Arc;

        let addr = match &cli.bind {
            Some(b) => b.parse().unwrap_or_else(|e| {
                eprintln!("error: --bind \"{b}\": {e}");
                process::exit(1);
            }),
            None => settings.bind_addr().unwrap_or_else(|e| {
                eprintln!("error: {e}");
                process::exit(1);
            }),
        };
        let state = Arc::new(home_energy_calc::api::AppState { settings });
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(home_energy_calc::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
        return;
    }

    let calc = calculate(cli.submission(), rate).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });
    let currency = &settings.tariff.currency;

    if cli.json {
        let record = EstimateRecord::new(&calc, currency);
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize estimate: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", calc.report(currency));
    }

    if let Some(path) = &cli.csv_out {
        if let Err(e) = export_csv(&calc.projection, path) {
            eprintln!("error: failed to write \"{}\": {e}", path.display());
            process::exit(1);
        }
        tracing::info!(path = %path.display(), "breakdown exported");
    }
}

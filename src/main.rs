// src/main.rs
mod collectors;
mod extractors;
mod storage;
mod tables;
mod utils;
mod validate;
mod volby;

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use url::Url;
use utils::AppError;
use volby::models::{self, ScrapeConfig};
use volby::VolbyClient;

/// Scrapes 2017 Czech parliamentary election results of one district into a CSV file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// District page URL (the "Výběr obce" link of the district)
    district_url: String,

    /// Output CSV file, e.g. vysledky_prostejov.csv
    output_file: String,

    /// Landing page listing all districts
    #[arg(long, env = "VOLBY_HOME_URL", default_value = models::DEFAULT_HOME_URL)]
    home_url: String,

    /// Base URL that district links resolve against
    #[arg(long, env = "VOLBY_BASE_URL", default_value = models::DEFAULT_BASE_URL)]
    base_url: String,

    /// Pause after every municipality request, in milliseconds
    #[arg(long, env = "VOLBY_REQUEST_DELAY_MS", default_value_t = models::DEFAULT_REQUEST_DELAY_MS)]
    request_delay_ms: u64,

    /// HTTP timeout in seconds
    #[arg(long, env = "VOLBY_TIMEOUT_SECS", default_value_t = models::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Args {
    fn scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig {
            home_url: self.home_url.clone(),
            base_url: self.base_url.clone(),
            request_delay: Duration::from_millis(self.request_delay_ms),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = cli_exit_code(&e);
            if code == ExitCode::FAILURE {
                eprintln!("Usage: volby_scraper <DISTRICT_URL> \"<OUTPUT_FILE.csv>\"");
            }
            return code;
        }
    };
    tracing::debug!("Starting with args: {:?}", args);

    let result = run(&args).await;
    match &result {
        Ok(path) => println!("File has been saved successfully as:\n {}", path.display()),
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            eprintln!("Error: {}", e);
        }
    }
    exit_code(&result)
}

/// `--help` and `--version` succeed; any other argument error is a usage error.
fn cli_exit_code(error: &clap::Error) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn exit_code(result: &Result<PathBuf, AppError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run(args: &Args) -> Result<PathBuf, AppError> {
    let config = args.scrape_config();
    let base_url = Url::parse(&config.base_url)
        .map_err(|e| AppError::Config(format!("invalid base URL '{}': {}", config.base_url, e)))?;
    let client = VolbyClient::new(&config)?;

    // 3. Load the list of all districts for validation
    let home = client.fetch_document(&config.home_url).await
        .ok_or_else(|| AppError::Unreachable(config.home_url.clone()))?;
    let districts = extractors::build_district_index(&home, &base_url);
    tracing::info!("Loaded {} districts", districts.len());

    validate::validate_user_input(&args.district_url, &args.output_file, &districts)?;
    validate::ensure_listed(&args.district_url, &districts)?;

    // 4. Load the municipalities of the district
    println!("Loading list of district units...Please wait, processing may take several seconds.");
    let district_url = Url::parse(&args.district_url)
        .map_err(|e| AppError::Config(format!("invalid district URL '{}': {}", args.district_url, e)))?;
    let district_page = client.fetch_document(district_url.as_str()).await
        .ok_or_else(|| AppError::Unreachable(args.district_url.clone()))?;
    let units = extractors::extract_units(&district_page, &district_url);
    if units.is_empty() {
        tracing::warn!("No district units found on {}", district_url);
    } else {
        tracing::info!("Found {} district units", units.len());
    }

    // 5. Collect both tables, then merge and save
    let turnout = collectors::collect_turnout(&client, &units).await;
    let parties = collectors::collect_party_results(&client, &units).await;
    tracing::info!(
        "Collected turnout for {} units, party results for {} units",
        turnout.rows.len(), parties.rows.len()
    );

    let merged = tables::merge_tables(&turnout, &parties)?;
    let path = storage::save_table_csv(&merged, &args.output_file)?;

    Ok(path)
}

//! valuator - House price prediction client.
//!
//! Usage:
//!   valuator history                    # browse the built-in sample history
//!   valuator history --remote           # browse history fetched from the service
//!   valuator history --plain -s condo   # print one page and exit
//!   valuator predict --sqft 2400 --property-type condo

use std::io;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use valuator::client::{
    ClientConfig, ClientError, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, PredictionClient,
};
use valuator::model::{HistoryField, PredictionInput, PropertyType, ValidationError};
use valuator::provider::{HistorySource, ProviderError, RemoteSource, SampleSource};
use valuator::report::{OutputFormat, render_history_page, render_prediction};
use valuator::table::{self, DEFAULT_PAGE_SIZE, SortDirection, ViewState};
use valuator::tui::App;

/// Interval between UI ticks.
const TICK_RATE: Duration = Duration::from_millis(250);

/// House price prediction client.
#[derive(Parser)]
#[command(name = "valuator", version, about = "House price prediction client")]
struct Cli {
    /// Base URL of the prediction service.
    #[arg(long, env = "VALUATOR_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse prediction history.
    History(HistoryArgs),
    /// Request a valuation for a property.
    Predict(PredictArgs),
}

#[derive(Args)]
struct HistoryArgs {
    /// Fetch history from the service instead of the built-in sample set.
    #[arg(long)]
    remote: bool,

    /// Print one page as text instead of opening the interactive view.
    #[arg(long)]
    plain: bool,

    /// Initial search term.
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,

    /// Sort field (date, property_type, sqft, bedrooms, bathrooms,
    /// predicted_price, actual_price, ...).
    #[arg(long, default_value = "date", value_name = "FIELD")]
    sort: HistoryField,

    /// Sort ascending.
    #[arg(long, conflicts_with = "desc")]
    asc: bool,

    /// Sort descending (default for date).
    #[arg(long)]
    desc: bool,

    /// Page to show (1-based; clamped to the available pages).
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

impl HistoryArgs {
    fn direction(&self) -> SortDirection {
        if self.asc {
            SortDirection::Ascending
        } else if self.desc || self.sort == HistoryField::Date {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    fn view(&self) -> ViewState<HistoryField> {
        let mut view = ViewState::new(self.sort, self.direction()).with_page_size(self.page_size);
        view.search_term = self.search.clone().unwrap_or_default();
        view.current_page = self.page;
        view
    }
}

#[derive(Args)]
struct PredictArgs {
    /// Living area in square feet (500-10000).
    #[arg(long, default_value_t = 2000)]
    sqft: u32,

    /// Bedrooms (1-10).
    #[arg(long, default_value_t = 3)]
    bedrooms: u32,

    /// Bathrooms in half steps (1-10).
    #[arg(long, default_value_t = 2.0)]
    bathrooms: f64,

    /// Location rating (1-10).
    #[arg(long, default_value_t = 7)]
    location_rating: u8,

    /// Property age in years (0-150).
    #[arg(long, default_value_t = 10)]
    property_age: u32,

    /// Property has a garage.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    garage: bool,

    /// Property has a pool.
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    pool: bool,

    /// School quality (1-10).
    #[arg(long, default_value_t = 8)]
    school_quality: u8,

    /// Crime rate (1-10).
    #[arg(long, default_value_t = 3)]
    crime_rate: u8,

    /// single_family, multi_family, condo, apartment or townhouse.
    #[arg(long, default_value = "single_family")]
    property_type: PropertyType,

    /// Output format: text or json.
    #[arg(long, default_value = "text")]
    format: String,
}

impl PredictArgs {
    fn input(&self) -> PredictionInput {
        PredictionInput {
            sqft: self.sqft,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            location_rating: self.location_rating,
            property_age: self.property_age,
            has_garage: self.garage,
            has_pool: self.pool,
            school_quality: self.school_quality,
            crime_rate: self.crime_rate,
            property_type: self.property_type,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown output format '{0}', expected text or json")]
    Format(String),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("valuator={}", level).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn history_source(
    remote: bool,
    config: ClientConfig,
) -> Result<Box<dyn HistorySource>, CliError> {
    if remote {
        Ok(Box::new(RemoteSource::new(PredictionClient::new(config)?)))
    } else {
        Ok(Box::new(SampleSource::new()))
    }
}

fn run_history(config: ClientConfig, args: HistoryArgs) -> Result<(), CliError> {
    let view = args.view();
    let mut source = history_source(args.remote, config)?;

    if args.plain {
        let records = source.load()?;
        info!(source = source.name(), count = records.len(), "history loaded");
        let derived = table::render(&records, &view);
        print!("{}", render_history_page(&derived, &view));
        return Ok(());
    }

    App::new(source, view).run(TICK_RATE)?;
    Ok(())
}

fn run_predict(config: ClientConfig, args: PredictArgs) -> Result<(), CliError> {
    let format =
        OutputFormat::parse(&args.format).ok_or_else(|| CliError::Format(args.format.clone()))?;
    let input = args.input();
    input.validate()?;

    let client = PredictionClient::new(config)?;
    let result = client.predict(&input)?;
    info!(
        predicted_price = result.predicted_price,
        confidence = result.confidence,
        "prediction received"
    );
    print!("{}", render_prediction(&result, format)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = ClientConfig::new(cli.api_url).with_timeout(Duration::from_secs(cli.timeout));

    let result = match cli.command {
        Command::History(args) => run_history(config, args),
        Command::Predict(args) => run_predict(config, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use farecast::config::{AdvisorConfig, Locale, WindowMode};
use farecast::error::AdviseError;
use farecast::input::RecommendInput;
use farecast::model::Recommendation;
use farecast::table;

#[derive(Parser)]
#[command(
    name = "farecast",
    about = "Turn flight and hotel price observations into travel recommendations",
    version,
    after_help = "\
Examples:
  farecast recommend --input prices.json
  farecast recommend --input prices.json --trip-days 4 --json --pretty
  farecast recommend --input prices.json --calendar-window --lang zh
  farecast sample --compact"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Build a recommendation from a JSON file of flights, hotels and prices",
        long_about = "Build a recommendation from a JSON file with \"flights\", \"hotels\", \
            \"price_series\" and optional \"trip_length_days\" keys.\n\
            Missing sections are allowed; the affected parts of the output are left empty."
    )]
    Recommend(RecommendArgs),
    #[command(about = "Run the engine on the built-in demo dataset")]
    Sample(SampleArgs),
    #[command(about = "Start MCP server for AI agents (stdio transport)")]
    Mcp,
}

#[derive(clap::Args)]
struct EngineArgs {
    #[arg(
        long,
        value_name = "N",
        help = "Trip length in days (inferred from hotel stays if omitted)"
    )]
    trip_days: Option<f64>,

    #[arg(long, value_name = "FILE", help = "JSON config file with engine thresholds")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "CODE", help = "Explanation language [en, zh]")]
    lang: Option<String>,

    #[arg(long, help = "Only consider travel windows of consecutive calendar days")]
    calendar_window: bool,

    #[arg(long, value_name = "N", help = "Number of comfort hotels to list")]
    top_hotels: Option<usize>,

    #[arg(long, value_name = "N", help = "Maximum layovers for the comfort plan")]
    max_layovers: Option<u32>,
}

#[derive(clap::Args)]
struct OutputArgs {
    #[arg(long, default_value = "CNY", value_name = "CODE", help = "Currency used for display")]
    currency: String,

    #[arg(long, help = "One-line-per-signal output (recommended for scripts and AI agents)")]
    compact: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,
}

#[derive(clap::Args)]
struct RecommendArgs {
    #[arg(short, long, value_name = "FILE", help = "Input JSON file")]
    input: PathBuf,

    #[command(flatten)]
    engine: EngineArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
struct SampleArgs {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn is_json(args: &OutputArgs) -> bool {
    args.json || args.pretty
}

fn die(err: &AdviseError, json_mode: bool) -> ! {
    tracing::warn!(kind = err.kind(), "aborting: {err}");
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": err.kind(),
                "message": err.to_string(),
            }
        });
        println!("{json}");
    } else {
        eprintln!("error: {err}");
    }
    process::exit(err.exit_code());
}

fn build_config(args: &EngineArgs) -> Result<AdvisorConfig, AdviseError> {
    let mut config = match &args.config {
        Some(path) => AdvisorConfig::from_path(path)?,
        None => AdvisorConfig::default(),
    };
    if let Some(lang) = args.lang.as_deref() {
        config.locale = Locale::from_str_loose(lang)?;
    }
    if args.calendar_window {
        config.window_mode = WindowMode::Calendar;
    }
    if let Some(n) = args.top_hotels {
        config.top_hotels = n;
    }
    if let Some(n) = args.max_layovers {
        config.comfort_max_layovers = n;
    }
    Ok(config)
}

fn print_result(rec: &Recommendation, args: &OutputArgs) -> Result<(), AdviseError> {
    if args.compact {
        println!("{}", table::render_compact(rec, &args.currency));
    } else if is_json(args) {
        let output = if args.pretty {
            serde_json::to_string_pretty(rec)?
        } else {
            serde_json::to_string(rec)?
        };
        println!("{output}");
    } else {
        print!("{}", table::render(rec, &args.currency));
    }
    Ok(())
}

fn run(mut input: RecommendInput, engine: &EngineArgs, output: &OutputArgs) {
    let json_mode = is_json(output);

    let config = match build_config(engine) {
        Ok(c) => c,
        Err(e) => die(&e, json_mode),
    };

    if let Some(days) = engine.trip_days {
        input.trip_length_days = Some(days);
    }

    tracing::debug!(
        flights = input.flights.len(),
        hotels = input.hotels.len(),
        points = input.price_series.len(),
        "building recommendation"
    );

    let rec = match farecast::recommend(&input, &config) {
        Ok(r) => r,
        Err(e) => die(&e, json_mode),
    };

    if let Err(e) = print_result(&rec, output) {
        die(&e, json_mode);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("farecast=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            if let Err(e) = farecast::mcp::run().await {
                eprintln!("error: MCP server failed ({e})");
                process::exit(1);
            }
        }
        Commands::Recommend(args) => {
            let input = match RecommendInput::from_path(&args.input) {
                Ok(i) => i,
                Err(e) => die(&e, is_json(&args.output)),
            };
            run(input, &args.engine, &args.output);
        }
        Commands::Sample(args) => {
            run(farecast::sample::sample_input(None), &args.engine, &args.output);
        }
    }
}

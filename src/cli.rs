use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use primecards::{PuzzleCache, PuzzleCatalog, PuzzleService, SearchConfig, validate_target};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How the catalog is printed
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One line per quadruple with its solution count and first solution
    Summary,
    /// The catalog as a JSON object
    Json,
}

/// Primecards - catalog four-digit puzzles that make a prime
#[derive(Parser, Debug)]
#[command(name = "primecards")]
#[command(
    about = "Find every digit quadruple that can be combined with + - * / and parentheses into a prime target"
)]
#[command(version)]
pub struct CliArgs {
    /// Prime target below 100
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Number of parallel search workers (default: available cores, at most 16)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Path of the persisted puzzle store
    #[arg(short, long, default_value = "saved-puzzles.json")]
    pub cache: PathBuf,

    /// Compute without reading or writing the puzzle store
    #[arg(long, conflicts_with = "refresh")]
    pub no_cache: bool,

    /// Recompute even if the target is already cached
    #[arg(long)]
    pub refresh: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub format: OutputFormat,

    /// Maximum number of quadruples shown in summary output
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub search: SearchConfig,
    pub cache: Option<PathBuf>,
    pub refresh: bool,
    pub format: OutputFormat,
    pub limit: usize,
    pub log_level: LogLevel,
}

impl CliConfig {
    fn from_args(args: CliArgs) -> Self {
        let search = match args.workers {
            Some(workers) => SearchConfig::with_workers(workers),
            None => SearchConfig::default(),
        };

        Self {
            target: args.target,
            search,
            cache: (!args.no_cache).then_some(args.cache),
            refresh: args.refresh,
            format: args.format,
            limit: args.limit,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_target(args.target).context("Invalid target")?;

    Ok(CliConfig::from_args(args))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Render the catalog for the chosen output format
pub fn render(catalog: &PuzzleCatalog, format: &OutputFormat, limit: usize) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")
        }
        OutputFormat::Summary => {
            let mut lines = vec![format!(
                "{} quadruples, {} solutions",
                catalog.len(),
                catalog.solution_count()
            )];
            lines.extend(catalog.iter().take(limit).map(|(key, solutions)| {
                let example = solutions
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                format!("{}: {} solution(s), e.g. {}", key, solutions.len(), example)
            }));
            if catalog.len() > limit {
                lines.push(format!("... {} more", catalog.len() - limit));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let service = PuzzleService::new(config.search.clone(), config.cache.map(PuzzleCache::new));

    info!(
        "Building catalog for target {} with {} workers",
        config.target, config.search.workers
    );

    let catalog = if config.refresh {
        service.refresh_catalog(config.target)
    } else {
        service.request_catalog(config.target)
    }
    .context("Search failed, try again")?;

    if catalog.is_empty() {
        warn!("No quadruple reaches {}", config.target);
    }

    println!("{}", render(&catalog, &config.format, config.limit)?);
    Ok(())
}

/*!
 * build-data CLI
 *
 * With no arguments: minify (when `npx` is on PATH) or copy
 * `web/index.html` and `web/style.css` into `data/index.html` and
 * `data/style.css.gz`.
 */

use build_data::{
    build,
    config::{BuildConfig, LogLevel},
    error::{Result, EXIT_SUCCESS},
    logging,
    output::OutputWriter,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "build-data")]
#[command(version, about = "Minify and pack web assets into the data directory", long_about = None)]
struct Cli {
    /// Load settings from a TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Copy sources unmodified even if a minifier is available
    #[arg(long)]
    no_minify: bool,

    /// Minifier program to look up on PATH instead of the configured one
    #[arg(long, value_name = "PROGRAM")]
    minifier: Option<String>,

    /// Log level
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Verbose logging (same as --log-level debug)
    #[arg(short, long)]
    verbose: bool,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Print artifact reports as JSON Lines
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = OutputWriter::new(cli.json);

    let code = match run(cli, &output) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            output.error(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli, output: &OutputWriter) -> Result<()> {
    let mut config = match cli.config {
        Some(ref path) => BuildConfig::from_file(path)?,
        None => BuildConfig::default(),
    };
    apply_overrides(&mut config, &cli);

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let report = build(&config)?;

    output.report(&report);
    Ok(())
}

fn apply_overrides(config: &mut BuildConfig, cli: &Cli) {
    if cli.no_minify {
        config.minifier.enabled = false;
    }
    if let Some(ref program) = cli.minifier {
        config.minifier.program = program.clone();
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if cli.verbose {
        config.verbose = true;
    }
    if cli.log.is_some() {
        config.log_file = cli.log.clone();
    }
}

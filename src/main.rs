//! Fuseki-Rust: random Go opening generator.
//!
//! Every setting can be given as a flag or through the environment variable
//! named in its help text.
//!
//! ## Usage
//!
//! - `fuseki-rust` - 10 random stones per colour on a 13x13 board
//! - `SZ=19 STONES=4 MIN=3 fuseki-rust` - 4 stones each, 3rd line and up
//! - `COORDS="B[dd];W[jj]" fuseki-rust` - replay a fixed opening

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fuseki_rust::config::Config;
use fuseki_rust::constants::{
    DEFAULT_BLACK_NAME, DEFAULT_BOARD_SIZE, DEFAULT_KOMI, DEFAULT_MAX_RETRIES, DEFAULT_MIN_LINE,
    DEFAULT_OUTPUT_DIR, DEFAULT_RULE, DEFAULT_STONES, DEFAULT_WHITE_NAME,
};
use fuseki_rust::position::Position;
use fuseki_rust::session::{random_opening, replay};
use fuseki_rust::sgf::{SgfRecord, parse_move_list, record_file_name, write_record};

/// Fuseki-Rust: generate random Go openings as SGF records
#[derive(Parser)]
#[command(name = "fuseki-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stones per colour in a random opening
    #[arg(long, env = "STONES", default_value_t = DEFAULT_STONES)]
    stones: usize,

    /// Board size (at most 19)
    #[arg(long, env = "SZ", default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Only place stones on this line or higher
    #[arg(long = "min-line", env = "MIN", default_value_t = DEFAULT_MIN_LINE)]
    min_line: usize,

    /// Fixed move list such as "B[aa];W[ab]" (replaces random sampling)
    #[arg(long, env = "COORDS")]
    coords: Option<String>,

    /// Komi written to the record
    #[arg(long, env = "KM", default_value_t = DEFAULT_KOMI, allow_negative_numbers = true)]
    komi: f64,

    /// Rule set written to the record (Japanese or Chinese)
    #[arg(long, env = "RU", default_value = DEFAULT_RULE)]
    rule: String,

    /// Black player name
    #[arg(long, env = "PB", default_value = DEFAULT_BLACK_NAME)]
    black: String,

    /// White player name
    #[arg(long, env = "PW", default_value = DEFAULT_WHITE_NAME)]
    white: String,

    /// Directory the record is written to
    #[arg(long = "output-dir", env = "SGF_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Seed for reproducible random openings
    #[arg(long, env = "SEED")]
    seed: Option<u64>,

    /// Rejected samples allowed per move before giving up
    #[arg(long = "max-retries", env = "MAX_RETRIES", default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: usize,

    /// Print the record without writing a file
    #[arg(long = "dry-run")]
    dry_run: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            stones: cli.stones,
            board_size: cli.size,
            min_line: cli.min_line,
            coords: cli.coords,
            komi: cli.komi,
            rule: cli.rule,
            black: cli.black,
            white: cli.white,
            output_dir: cli.output_dir,
            seed: cli.seed,
            max_retries: cli.max_retries,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dry_run = cli.dry_run;
    let config = Config::from(cli);
    run(&config, dry_run)
}

fn run(config: &Config, dry_run: bool) -> Result<()> {
    config.validate().context("invalid configuration")?;
    let mut pos = Position::new(config.board_size, config.min_line)?;

    let report = match &config.coords {
        Some(list) => {
            let moves = parse_move_list(list).context("invalid COORDS move list")?;
            replay(&mut pos, &moves)
        }
        None => {
            let mut rng = match config.seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            random_opening(&mut pos, config.stones, &mut rng, config.max_retries)
        }
    };
    tracing::info!(
        accepted = report.accepted,
        rejected = report.rejected,
        stop = ?report.stop,
        "session finished"
    );

    println!("{}", pos.render());
    let info = config.game_info();
    let record = SgfRecord::new(&info, pos.moves()).to_string();
    println!("{record}");

    if dry_run {
        return Ok(());
    }
    let name = record_file_name(
        config.board_size,
        config.stones,
        chrono::Local::now().naive_local(),
    );
    let path = write_record(&config.output_dir, &name, &record)
        .with_context(|| format!("Failed to output {}", config.output_dir.join(&name).display()))?;
    println!("Successfully output {}", path.display());
    Ok(())
}

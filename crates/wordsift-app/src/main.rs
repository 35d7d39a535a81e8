use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordsift_core::FrequencyTable;

pub mod profile;
pub mod render;
pub mod state;

use self::state::AppState;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Find the uncommon words of a passage, with example sentences
#[derive(Parser, Debug)]
#[command(name = "wordsift", version, about)]
struct Args {
    /// Passage to analyse; read from stdin when omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Look up the Chinese meaning of every listed word
    #[arg(long, short)]
    meaning: bool,

    /// JSON config profile
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Reference corpus file, overrides the config
    #[arg(long)]
    corpus: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = profile::load_config(args.config.as_deref())?;
    if let Some(corpus) = &args.corpus {
        config.corpus.path = Some(corpus.display().to_string());
    }
    let include_meaning = args.meaning || config.meaning.enabled;

    let text = read_passage(args.input.as_deref())?;
    let state = AppState::new(config);

    let table = run(&state, &text, include_meaning).await?;

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Table => render::write_table(&table, &mut stdout)?,
        OutputFormat::Json => {
            render::write_json(&table, &mut stdout)?;
            if table.is_empty() {
                eprintln!("{}", render::EMPTY_NOTICE);
            }
        }
    }

    Ok(())
}

/// Build the table, giving up on timeout or Ctrl+C
async fn run(state: &AppState, text: &str, include_meaning: bool) -> anyhow::Result<FrequencyTable> {
    let timeout = Duration::from_secs(state.config.build_timeout_seconds);
    let build = tokio::time::timeout(timeout, state.builder.build(text, include_meaning));

    tokio::select! {
        result = build => {
            match result {
                Ok(table) => Ok(table.context("Failed to build frequency table")?),
                Err(_) => bail!("Building the frequency table timed out after {:?}", timeout),
            }
        }
        _ = signal::ctrl_c() => {
            bail!("Interrupted");
        }
    }
}

fn read_passage(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read passage from stdin")?;
            Ok(text)
        }
    }
}

/// Logs go to stderr so the table on stdout stays clean
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

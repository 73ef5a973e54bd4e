use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use retreat_notes::config::Config;
use retreat_notes::corpus::{load_notes, Corpus};
use retreat_notes::output::{terminal, to_json, OutputFormat};
use retreat_notes::scan::{scan_report, ScanSettings};
use retreat_notes::search::SearchSession;

/// Retreat notes: lexicon emotion scoring and TF-IDF search, no language model.
///
/// Reads a notes file (notes.md by default). Without flags, opens an
/// interactive search prompt over the note lines.
#[derive(Parser)]
#[command(name = "retreat-notes", version, about)]
struct Cli {
    /// Scan the whole text and print a full report
    #[arg(long)]
    all: bool,

    /// Print JSON instead of human readable output
    #[arg(long)]
    json: bool,

    /// Path to the notes file (default: notes.md, or RETREAT_NOTES_FILE)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Run a single search and exit instead of prompting
    #[arg(long, conflicts_with = "all")]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("retreat_notes=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    let path = cli.file.unwrap_or(config.notes_path);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    info!(path = %path.display(), "Loading notes");
    let notes = load_notes(&path)?;
    let corpus = Corpus::from_notes(&notes)?;
    let space = corpus.fit()?;

    if cli.all {
        let settings = ScanSettings {
            keyword_count: config.keyword_count,
            ..ScanSettings::default()
        };
        let report = scan_report(&notes, &corpus, &space, &settings);
        match format {
            OutputFormat::Json => println!("{}", to_json(&report)?),
            OutputFormat::Human => print!("{}", terminal::render_scan_report(&report)),
        }
        return Ok(());
    }

    let session = SearchSession::new(corpus.lines(), &space, config.search_top_k, format);

    if let Some(query) = cli.query {
        print!("{}", session.render_query(query.trim())?);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let answered = session.run(stdin.lock(), &mut stdout)?;
    info!(queries = answered, "Search session ended");

    Ok(())
}

//! SEO Analyzer CLI
//!
//! Analyzes raw text or a web page and prints word statistics.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use seo_analyzer::config::parse_timeout;
use seo_analyzer::{
    AnalysisOptions, AnalysisReport, Analyzer, AnalyzerConfig, FrequencyTable, StopWordSource,
};

/// SEO Analyzer
#[derive(Parser, Debug)]
#[command(name = "seo-analyze")]
#[command(author = "ReasonKit Team <team@reasonkit.sh>")]
#[command(version)]
#[command(about = "Word, stop-word, meta-tag and external-link statistics for text or a URL")]
struct Args {
    /// Input text or URL
    input: String,

    /// Calculate stop-words
    #[arg(long)]
    stop_words: bool,

    /// Calculate words
    #[arg(long)]
    words: bool,

    /// Calculate words in meta tags
    #[arg(long)]
    meta_words: bool,

    /// Calculate external links
    #[arg(long)]
    external_links: bool,

    /// Calculate everything (default when no selector is given)
    #[arg(short, long)]
    all: bool,

    /// Newline-delimited stop-word file (overrides SEO_ANALYZER_STOP_WORDS)
    #[arg(long)]
    stop_words_file: Option<PathBuf>,

    /// Fetch timeout in seconds (overrides SEO_ANALYZER_TIMEOUT_SECS)
    #[arg(long, value_parser = parse_timeout_arg)]
    timeout: Option<Duration>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Only print the N most frequent entries per table
    #[arg(long)]
    top: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> AnalysisOptions {
        let options = AnalysisOptions {
            stop_words: self.stop_words,
            words: self.words,
            words_in_tags: self.meta_words,
            external_links: self.external_links,
        };
        if self.all || options.is_empty() {
            AnalysisOptions::all()
        } else {
            options
        }
    }

    fn config(&self) -> Result<AnalyzerConfig> {
        let mut config = AnalyzerConfig::from_env().context("Failed to read configuration")?;
        if let Some(path) = &self.stop_words_file {
            config = config.with_stop_words(StopWordSource::File(path.clone()));
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }
}

fn parse_timeout_arg(raw: &str) -> std::result::Result<Duration, String> {
    parse_timeout(raw).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the analysis succeeded
fn run(args: &Args) -> Result<bool> {
    let analyzer = Analyzer::new(args.config()?).context("Failed to create analyzer")?;
    let report = analyzer.analyze(&args.input, &args.options());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).context("Failed to write JSON report")?;
        writeln!(out)?;
    } else {
        render(&mut out, &report, args.top).context("Failed to write report")?;
    }

    Ok(!report.is_error())
}

fn render(out: &mut impl Write, report: &AnalysisReport, top: Option<usize>) -> io::Result<()> {
    if let Some(error) = &report.error {
        return writeln!(out, "Error: {}", error);
    }

    render_table(out, "Stop-words", report.stop_words.as_ref(), top)?;
    render_table(out, "Words", report.words.as_ref(), top)?;
    render_table(out, "Words in meta tags", report.words_in_tags.as_ref(), top)?;

    if let Some(links) = &report.external_links {
        writeln!(out, "External links ({})", links.len())?;
        for link in links {
            writeln!(out, "  {}", link)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn render_table(
    out: &mut impl Write,
    title: &str,
    table: Option<&FrequencyTable>,
    top: Option<usize>,
) -> io::Result<()> {
    let Some(table) = table else {
        return Ok(());
    };

    writeln!(out, "{} ({} distinct, {} total)", title, table.len(), table.total())?;
    let entries = match top {
        Some(n) => table.top(n),
        None => table.top(table.len()),
    };
    let width = entries.iter().map(|e| e.word.len()).max().unwrap_or(0);
    for entry in entries {
        writeln!(out, "  {:<width$}  {}", entry.word, entry.count, width = width)?;
    }
    writeln!(out)
}

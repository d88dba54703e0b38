use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use promql_series::{
    DEFAULT_MAX_DEPTH, ParseOptions, extract_series, extract_series_fallback, parse_with_options,
};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEMO_QUERIES: &[&str] = &[
    "cpu_usage_percent",
    r#"http_requests_total{method="GET", status="200"}"#,
    "rate(http_requests_total[5m])",
    "sum(rate(http_requests_total[5m])) by (instance)",
    "cpu_usage_percent > 80",
    "rate(http_requests_total[5m]) / rate(http_requests_duration_seconds_count[5m])",
    "max_over_time(cpu_usage_percent[1h:5m])",
    r#"up * on(instance) group_left(job) up{job="prometheus"}"#,
    "histogram_quantile(0.95, sum(rate(http_request_duration_seconds_bucket[5m])) by (le))",
    "sum(rate(cpu_seconds_total[5m])",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FallbackMode {
    /// Only report what the parser finds
    Never,
    /// Scan the raw text when the parser finds nothing
    Auto,
    /// Always scan the raw text as well
    Always,
}

/// Find the metric series a PromQL query reads
#[derive(Parser)]
#[command(name = "promql-series", version, about)]
struct Cli {
    /// Queries to analyze; starts an interactive prompt when empty
    #[arg(value_name = "QUERY")]
    queries: Vec<String>,

    /// Analyze the built-in example queries
    #[arg(long)]
    demo: bool,

    /// When to run the lexical fallback extractor
    #[arg(long, value_enum, default_value_t = FallbackMode::Auto)]
    fallback: FallbackMode,

    /// Print one JSON object per query
    #[arg(long)]
    json: bool,

    /// Maximum expression nesting depth
    #[arg(long, env = "PROMQL_SERIES_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

struct Report<'a> {
    query: &'a str,
    series: Vec<String>,
    error: Option<String>,
    fallback: Option<Vec<String>>,
}

impl Cli {
    fn options(&self) -> ParseOptions {
        ParseOptions::default().with_max_depth(self.max_depth)
    }

    fn analyze<'a>(&self, query: &'a str) -> Report<'a> {
        let (series, error) = match parse_with_options(query, self.options()) {
            Ok(expr) => (extract_series(&expr), None),
            Err(err) => {
                debug!(%err, query, "parse failed");
                (Vec::new(), Some(err.to_string()))
            }
        };

        let fallback = match self.fallback {
            FallbackMode::Never => None,
            FallbackMode::Auto if !series.is_empty() => None,
            FallbackMode::Auto | FallbackMode::Always => Some(extract_series_fallback(query)),
        };

        Report {
            query,
            series,
            error,
            fallback,
        }
    }

    fn print(&self, report: &Report<'_>, out: &mut impl Write) -> Result<()> {
        if self.json {
            let value = json!({
                "query": report.query,
                "series": report.series,
                "error": report.error,
                "fallback": report.fallback,
            });
            writeln!(out, "{}", value)?;
            return Ok(());
        }

        writeln!(out, "Query: {}", report.query)?;
        match &report.error {
            Some(err) => writeln!(out, "  parse error: {}", err)?,
            None if report.series.is_empty() => writeln!(out, "  no series")?,
            None => writeln!(out, "  series: {}", report.series.join(", "))?,
        }
        if let Some(fallback) = &report.fallback {
            if fallback.is_empty() {
                writeln!(out, "  fallback: no series")?;
            } else {
                writeln!(out, "  fallback: {}", fallback.join(", "))?;
            }
        }
        Ok(())
    }

    fn run_batch<'q>(&self, queries: impl IntoIterator<Item = &'q str>) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for query in queries {
            let report = self.analyze(query);
            self.print(&report, &mut out)?;
        }
        Ok(())
    }

    fn run_interactive(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut input = stdin.lock();
        let mut line = String::new();

        println!("Enter PromQL queries to extract series names.");
        println!("Type 'demo' to see examples, 'quit' to exit.");
        loop {
            {
                let mut out = stdout.lock();
                write!(out, "> ")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line).context("failed to read query")? == 0 {
                break;
            }

            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            match query.to_ascii_lowercase().as_str() {
                "quit" | "exit" | "q" => break,
                "demo" => self.run_batch(DEMO_QUERIES.iter().copied())?,
                _ => self.run_batch([query])?,
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(max_depth = cli.max_depth, fallback = ?cli.fallback, "starting");

    if cli.demo {
        cli.run_batch(DEMO_QUERIES.iter().copied())?;
    }
    if !cli.queries.is_empty() {
        cli.run_batch(cli.queries.iter().map(String::as_str))?;
    } else if !cli.demo {
        cli.run_interactive()?;
    }
    Ok(())
}

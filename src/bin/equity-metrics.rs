use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use equity_metrics::config::{ALPHAVANTAGE_API_KEY_ENV, FINNHUB_API_KEY_ENV};
use equity_metrics::{ErrorKind, ExchangeHint, Lookup, LookupConfig, MetricsClient, MetricsError};
use tracing_subscriber::EnvFilter;

/// Fetch P/E, P/B, dividend yield and ROE for a company, with an optional
/// peer-based sector P/E.
#[derive(Debug, Parser)]
#[command(name = "equity-metrics", version, about)]
struct Cli {
    /// Company name to search for.
    #[arg(default_value = "Bajaj Finance")]
    query: String,

    /// Alpha Vantage API key.
    #[arg(long, env = ALPHAVANTAGE_API_KEY_ENV, hide_env_values = true, default_value = "")]
    av_key: String,

    /// Finnhub token, needed only for the sector P/E.
    #[arg(long, env = FINNHUB_API_KEY_ENV, hide_env_values = true, default_value = "")]
    finnhub_key: String,

    /// Compute the sector P/E approximation from peers (slow: one call per peer every few seconds).
    #[arg(long, default_value_t = false)]
    sector_pe: bool,

    /// Exchange hint: auto, india, us, other.
    #[arg(long, default_value = "auto")]
    exchange: ExchangeHint,

    /// Which search match to use (1 = best).
    #[arg(long, default_value_t = 1)]
    pick: usize,

    /// Peers averaged for the sector P/E.
    #[arg(long, default_value_t = equity_metrics::config::DEFAULT_MAX_PEERS)]
    max_peers: usize,

    /// Seconds to wait before each peer call.
    #[arg(long, default_value_t = 12)]
    peer_delay_secs: u64,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,

    /// Print the audit trace (raw keys, peers used).
    #[arg(long, default_value_t = false)]
    trace: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_warning() => {
            eprintln!("warning: {e}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(match e.kind() {
                ErrorKind::MissingCredential => 2,
                _ => 3,
            })
        }
    }
}

async fn run(cli: Cli) -> Result<(), MetricsError> {
    let client = MetricsClient::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;

    let config = LookupConfig::new(cli.av_key)
        .finnhub_key(cli.finnhub_key)
        .compute_sector_pe(cli.sector_pe)
        .exchange_hint(cli.exchange)
        .max_peers(cli.max_peers)
        .peer_delay(Duration::from_secs(cli.peer_delay_secs));
    let lookup = Lookup::new(&client, config);

    let candidates = lookup.candidates(&cli.query).await?;
    println!("Top symbol matches (Alpha Vantage):");
    for (i, c) in candidates.iter().enumerate() {
        println!("  {}. {c}", i + 1);
    }

    let idx = cli.pick.clamp(1, candidates.len()) - 1;
    let chosen = &candidates[idx];
    println!(
        "Using symbol: {} | Provider: Alpha Vantage | Exchange: {}\n",
        chosen.symbol,
        lookup.config().hint()
    );

    let report = lookup.report(&chosen.symbol).await?;
    println!("{report}");
    if cli.trace {
        println!("\n{}", report.trace());
    }
    println!("\nCross-verify numbers with filings before making decisions.");
    Ok(())
}

//! link-rank CLI - PageRank of a directory of HTML pages.

use anyhow::{bail, Context, Result};
use clap::Parser;
use link_rank::{
    crawl,
    page_rank::{iterated, sampled, IteratedPageRank, PageRank, PageRankResult, SampledPageRank},
    Corpus,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "link-rank")]
#[command(version)]
#[command(about = "Estimate PageRank of linked HTML pages by sampling and by iteration")]
struct Cli {
    /// Directory holding the corpus's .html files
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(short, long, default_value_t = 0.85)]
    damping: f64,

    /// Number of pages the random surfer visits
    #[arg(short = 'n', long, default_value_t = 10_000)]
    samples: usize,

    /// Largest per-page change at which iteration stops
    #[arg(long, default_value_t = 0.001)]
    threshold: f64,

    /// Upper bound on iteration rounds
    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,

    /// Seed for the sampler; random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// `-v` forces debug; otherwise `RUST_LOG` decides, falling back to warn.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn setup_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load(dir: &Path) -> Result<Corpus> {
    let corpus = crawl(dir).with_context(|| format!("Failed to load corpus from {dir:?}"))?;
    if corpus.is_empty() {
        bail!("No .html pages found in {dir:?}");
    }
    Ok(corpus)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let corpus = load(&cli.corpus)?;

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let cfg = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let sampled = SampledPageRank::new(&corpus, &cfg, rng)
        .context("Invalid sampling parameters")?
        .calc();
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print!("{}", sampled.display(&corpus));

    let cfg = iterated::Config {
        damping: cli.damping,
        threshold: cli.threshold,
        max_iterations: cli.max_iterations,
    };
    let iterated = IteratedPageRank::new(&corpus, &cfg)
        .context("Invalid iteration parameters")?
        .calc();
    println!("PageRank Results from Iteration");
    print!("{}", iterated.display(&corpus));

    Ok(())
}

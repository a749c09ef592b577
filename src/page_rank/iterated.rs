use super::*;
use crate::{error::check_damping, *};
use algograph::graph::VertexId;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Solves the PageRank recurrence by synchronous relaxation.
///
/// Each step computes `(1 - d) / N + d * sum(PR(q) / L(q))` for every page
/// from the previous step's ranks, then rescales the new ranks to sum to
/// one. Pages without links feed nothing into the sums; the rescaling makes
/// up for the mass they drop. Iteration stops once no page moves by more
/// than `threshold`.
pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    threshold: f64,
    max_iterations: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub threshold: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            threshold: 0.001,
            max_iterations: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub delta: Ranks,
    pub iterations: usize,
    pub converged: bool,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> crate::Result<Self> {
        let damping = check_damping(config.damping)?;
        let threshold = config.threshold;
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(Error::InvalidThreshold(threshold));
        }
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        Ok(Self {
            corpus,
            damping,
            threshold,
            max_iterations: config.max_iterations,
        })
    }

    /// One relaxation step. `prev` is left untouched.
    pub fn step(&self, reverse: &ReverseIndex, prev: &Ranks) -> Ranks {
        let n = self.corpus.len() as f64;
        let base = (1.0 - self.damping) / n;
        // Summed in page order so that repeated runs agree bit for bit.
        let next: Vec<(VertexId, f64)> = self
            .corpus
            .vertices()
            .iter()
            .map(|p| {
                let inbound: f64 = reverse
                    .linking_to(p)
                    .iter()
                    .map(|q| prev.get(q).unwrap() / (self.corpus.out_degree(q) as f64))
                    .sum();
                (*p, base + self.damping * inbound)
            })
            .collect();
        let sum: f64 = next.iter().map(|(_, x)| x).sum();
        next.into_iter().map(|(v, x)| (v, x / sum)).collect()
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&self) -> Self::Result {
        let reverse = ReverseIndex::new(self.corpus);
        let mut p = uniform(self.corpus.vertices().iter().copied(), self.corpus.len());
        let mut iterations = 0;
        loop {
            let r = self.step(&reverse, &p);
            iterations += 1;

            let delta: Ranks = r
                .iter()
                .map(|(v, x)| (*v, x - p.get(v).unwrap()))
                .collect();
            let max_change = norm_inf(&delta);
            debug!(iterations, max_change, "relaxation step");

            if max_change <= self.threshold {
                info!(iterations, "iteration converged");
                return Self::Result {
                    page_rank: r,
                    delta,
                    iterations,
                    converged: true,
                };
            }
            if iterations >= self.max_iterations {
                warn!(iterations, max_change, "iteration stopped before converging");
                return Self::Result {
                    page_rank: r,
                    delta,
                    iterations,
                    converged: false,
                };
            }
            p = r;
        }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }
}

/// Iterates to the PageRank fixed point of `corpus` and returns ranks by page name.
pub fn iterate_rank(corpus: &Corpus, damping: f64) -> crate::Result<BTreeMap<String, f64>> {
    let cfg = Config {
        damping,
        ..Config::default()
    };
    let ipr = IteratedPageRank::new(corpus, &cfg)?;
    Ok(corpus.named(&ipr.calc().page_rank))
}

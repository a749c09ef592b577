use super::*;
use crate::*;
use algograph::graph::VertexId;
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};
use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
};
use tracing::info;

/// Estimates PageRank as the visit frequency of a random surfer.
///
/// The surfer starts on a uniformly chosen page and takes `samples - 1`
/// steps of the [`TransitionModel`]. Randomness comes from the injected
/// generator, so a seeded one makes the estimate reproducible.
pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    corpus: &'a Corpus,
    samples: usize,
    transitions: Vec<WeightedIndex<f64>>,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(corpus: &'a Corpus, config: &Config, rng: R) -> crate::Result<Self> {
        if config.samples == 0 {
            return Err(Error::InvalidSampleCount(config.samples));
        }
        let model = TransitionModel::new(corpus, config.damping)?;
        // Rows are positive everywhere since damping < 1.
        let transitions = corpus
            .vertices()
            .iter()
            .map(|v| WeightedIndex::new(model.row(v)).expect("transition rows are positive"))
            .collect();
        Ok(Self {
            corpus,
            samples: config.samples,
            transitions,
            rng: RefCell::new(rng),
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&self) -> Self::Result {
        let mut rng = self.rng.borrow_mut();
        let vertices = self.corpus.vertices();
        let mut counts = vec![0usize; vertices.len()];

        let mut cur = rng.random_range(0..vertices.len());
        counts[cur] += 1;
        for _ in 1..self.samples {
            cur = self.transitions[cur].sample(&mut *rng);
            counts[cur] += 1;
        }

        let n = self.samples as f64;
        let page_rank = vertices
            .iter()
            .zip(counts.iter())
            .map(|(v, c)| (*v, (*c as f64) / n))
            .collect();
        let visits = vertices.iter().copied().zip(counts).collect();
        info!(samples = self.samples, pages = vertices.len(), "sampling finished");
        Self::Result { page_rank, visits }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }
}

/// Samples `n` surfer steps over `corpus` and returns visit frequencies by page name.
pub fn sample_rank<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    rng: R,
) -> crate::Result<BTreeMap<String, f64>> {
    let cfg = Config {
        damping,
        samples: n,
    };
    let spr = SampledPageRank::new(corpus, &cfg, rng)?;
    Ok(corpus.named(&spr.calc().page_rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_rank::tests::RandomCorpus;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::SmallRng, SeedableRng};

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(3407)
    }

    #[test]
    fn single_dangling_page() {
        let c = Corpus::from_links([("only", Vec::<&str>::new())]);
        let ranks = sample_rank(&c, 0.85, 100, rng()).unwrap();
        assert_eq!(ranks["only"], 1.0);
    }

    #[test]
    fn one_sample_is_the_start_page() {
        let c = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
        let ranks = sample_rank(&c, 0.85, 1, rng()).unwrap();
        let mut scores: Vec<_> = ranks.values().copied().collect();
        scores.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(scores, vec![0.0, 1.0]);
    }

    #[test]
    fn cycle_is_even() {
        let c = Corpus::from_links([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]);
        let ranks = sample_rank(&c, 0.85, 10_000, rng()).unwrap();
        for (page, p) in ranks.iter() {
            assert!((p - 1.0 / 3.0).abs() < 0.03, "{page}: {p}");
        }
    }

    #[test]
    fn same_seed_same_estimate() {
        let c = Corpus::from_links([("a", vec!["b", "c"]), ("b", vec!["c"]), ("c", vec!["a"])]);
        let r0 = sample_rank(&c, 0.85, 1000, rng()).unwrap();
        let r1 = sample_rank(&c, 0.85, 1000, rng()).unwrap();
        assert_eq!(r0, r1);
    }

    #[test]
    fn visits_count_every_sample() {
        let c = Corpus::from_links([("a", vec!["b"]), ("b", vec![]), ("c", vec!["a", "b"])]);
        let cfg = Config {
            samples: 500,
            ..Config::default()
        };
        let res = SampledPageRank::new(&c, &cfg, rng()).unwrap().calc();
        assert_eq!(res.visits.values().sum::<usize>(), 500);
        assert_eq!(res.page_rank.len(), 3);
    }

    #[test]
    fn rejects_bad_input() {
        let c = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
        assert!(matches!(
            sample_rank(&c, 0.85, 0, rng()),
            Err(Error::InvalidSampleCount(0))
        ));
        assert!(matches!(
            sample_rank(&c, 0.0, 10, rng()),
            Err(Error::InvalidDamping(_))
        ));
        let empty = Corpus::from_links(Vec::<(&str, Vec<&str>)>::new());
        assert!(matches!(
            sample_rank(&empty, 0.85, 10, rng()),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn extreme_damping() {
        let c = Corpus::from_links([("a", vec!["b"]), ("b", vec![]), ("c", vec!["a", "b"])]);
        for damping in [1e-12, 0.5, 1.0 - 1e-12] {
            let ranks = sample_rank(&c, damping, 300, rng()).unwrap();
            assert_eq!(ranks.len(), 3);
            let sum: f64 = ranks.values().sum();
            assert!((sum - 1.0).abs() < 1e-9, "damping={damping} sum={sum}");
        }
    }

    #[quickcheck]
    fn sums_to_one(c: RandomCorpus, n: u16) {
        let n = (n as usize % 2000) + 1;
        let corpus = c.corpus();
        let ranks = sample_rank(&corpus, c.damping(), n, rng()).unwrap();
        assert_eq!(ranks.len(), corpus.len());
        let sum: f64 = ranks.values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum={sum}");
    }
}

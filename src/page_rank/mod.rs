//! Two estimators of PageRank over a [`Corpus`](crate::Corpus).
//!
//! [`sampled`] walks a random surfer along the [`transition`] model and
//! counts visits; [`iterated`] relaxes the PageRank recurrence to its fixed
//! point. The two treat pages without links differently, so their results
//! agree closely only on corpora where every page links somewhere.

pub mod iterated;
pub mod sampled;
mod traits;
pub mod transition;

pub use self::iterated::{iterate_rank, IteratedPageRank};
pub use self::sampled::{sample_rank, SampledPageRank};
pub use self::traits::*;
pub use self::transition::{transition, TransitionModel};

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::*;
    use quickcheck::{Arbitrary, Gen};
    use rand::{rngs::SmallRng, SeedableRng};

    /// A small corpus with arbitrary links and an arbitrary damping factor.
    #[derive(Debug, Clone)]
    pub struct RandomCorpus {
        links: Vec<(String, Vec<String>)>,
        damping: f64,
    }

    impl RandomCorpus {
        pub fn corpus(&self) -> Corpus {
            Corpus::from_links(self.links.iter().cloned())
        }

        pub fn damping(&self) -> f64 {
            self.damping
        }
    }

    impl Arbitrary for RandomCorpus {
        fn arbitrary(g: &mut Gen) -> Self {
            const N: usize = 10;
            const DAMPINGS: &[f64] = &[0.5, 0.7, 0.85, 0.9, 0.95];

            let n: usize = usize::arbitrary(g) % N + 1;
            let names: Vec<_> = (0..n).map(|i| format!("{i}.html")).collect();
            let links = names
                .iter()
                .map(|page| {
                    let k = usize::arbitrary(g) % (n + 1);
                    let targets = (0..k)
                        .map(|_| names[usize::arbitrary(g) % n].clone())
                        .collect();
                    (page.clone(), targets)
                })
                .collect();
            let damping = *g.choose(DAMPINGS).unwrap();
            Self { links, damping }
        }
    }

    fn corpus1() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn sampling_approaches_iteration() {
        let c = corpus1();
        let rng = SmallRng::seed_from_u64(3407);
        let sampled = {
            let cfg = sampled::Config::default();
            SampledPageRank::new(&c, &cfg, rng).unwrap().calc()
        };
        let iterated = {
            let cfg = iterated::Config::default();
            IteratedPageRank::new(&c, &cfg).unwrap().calc()
        };
        let diff: Ranks = c
            .vertices()
            .iter()
            .map(|v| (*v, sampled.page_rank()[v] - iterated.page_rank()[v]))
            .collect();
        let mean = norm_1(&diff) / (c.len() as f64);
        assert!(mean < 0.02, "mean absolute difference {mean}");
    }

    #[test]
    fn both_agree_on_a_cycle() {
        let c = Corpus::from_links([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]);
        let rng = SmallRng::seed_from_u64(7);
        let sampled = sample_rank(&c, 0.85, 10_000, rng).unwrap();
        let iterated = iterate_rank(&c, 0.85).unwrap();
        for page in c.pages() {
            assert!((sampled[page] - iterated[page]).abs() < 0.03, "{page}");
        }
    }

    #[test]
    fn display_four_decimals() {
        let c = Corpus::from_links([("b.html", vec!["a.html"]), ("a.html", vec!["b.html"])]);
        let res = IteratedPageRank::new(&c, &iterated::Config::default())
            .unwrap()
            .calc();
        let shown = res.display(&c).to_string();
        assert_eq!(shown, "  a.html: 0.5000\n  b.html: 0.5000\n");
    }
}

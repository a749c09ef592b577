use crate::{error::check_damping, Corpus, Error, Ranks, Result};
use algograph::graph::VertexId;
use std::collections::{BTreeMap, HashMap};

/// Where the random surfer goes next from a given page.
///
/// With probability `damping` it follows one of the current page's links,
/// chosen uniformly; a page without links is treated as linking to every
/// page. Otherwise it jumps to a page chosen uniformly from the corpus.
pub struct TransitionModel<'a> {
    corpus: &'a Corpus,
    damping: f64,
}

impl<'a> TransitionModel<'a> {
    pub fn new(corpus: &'a Corpus, damping: f64) -> Result<Self> {
        let damping = check_damping(damping)?;
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        Ok(Self { corpus, damping })
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Probability of moving from `page` to every page of the corpus.
    pub fn distribution(&self, page: &VertexId) -> Ranks {
        let vertices = self.corpus.vertices();
        let mut dist: Ranks = {
            let mut dist = HashMap::with_capacity_and_hasher(vertices.len(), Default::default());
            for v in vertices.iter() {
                dist.insert(*v, 0.0);
            }
            dist
        };

        let n = dist.len() as f64;
        let out_degree = self.corpus.out_degree(page);
        if out_degree > 0 {
            let unit = self.damping / (out_degree as f64);
            for v in self.corpus.out_neighbors(page) {
                *dist.get_mut(&v).unwrap() += unit;
            }
        } else {
            let unit = self.damping / n;
            dist.values_mut().for_each(|p| *p += unit);
        }

        let jump = (1.0 - self.damping) / n;
        dist.values_mut().for_each(|p| *p += jump);
        dist
    }

    /// Transition probabilities aligned with [`Corpus::vertices`].
    pub fn row(&self, page: &VertexId) -> Vec<f64> {
        let dist = self.distribution(page);
        self.corpus
            .vertices()
            .iter()
            .map(|v| *dist.get(v).unwrap())
            .collect()
    }
}

/// The next-page distribution from the page named `page`, keyed by page name.
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<BTreeMap<String, f64>> {
    let model = TransitionModel::new(corpus, damping)?;
    let v = corpus
        .page_id(page)
        .ok_or_else(|| Error::UnknownPage(page.to_string()))?;
    Ok(corpus.named(&model.distribution(&v)))
}

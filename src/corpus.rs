use crate::Ranks;
use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// A self-contained set of pages and the links between them.
///
/// Every link target is itself a page of the corpus and no page links to
/// itself. Pages are iterated in name order.
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    order: Vec<VertexId>,
    ids: HashMap<String, VertexId, ahash::RandomState>,
    names: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from `(page, links)` pairs.
    ///
    /// Self-links are dropped, repeated links collapse into one, and links
    /// to pages that are not keys of the input are ignored.
    pub fn from_links<I, P, L, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let links: BTreeMap<String, BTreeSet<String>> = {
            let mut links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for (page, targets) in pages {
                links
                    .entry(page.into())
                    .or_default()
                    .extend(targets.into_iter().map(Into::into));
            }
            links
        };

        let mut graph = directed::TreeBackedGraph::new();
        let mut order = Vec::with_capacity(links.len());
        let mut ids = HashMap::with_hasher(ahash::RandomState::new());
        let mut names = HashMap::with_hasher(ahash::RandomState::new());
        for page in links.keys() {
            let v = graph.add_vertex();
            order.push(v);
            ids.insert(page.clone(), v);
            names.insert(v, page.clone());
        }

        for (page, targets) in links.iter() {
            let u = *ids.get(page).unwrap();
            for target in targets.iter() {
                if target == page {
                    continue;
                }
                match ids.get(target) {
                    Some(v) => {
                        graph.add_edge(u, *v);
                    }
                    None => debug!(page = %page, target = %target, "ignoring link outside corpus"),
                }
            }
        }

        Self {
            graph,
            order,
            ids,
            names,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    /// Page vertices in name order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.order
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|v| self.page_name(v))
    }

    pub fn page_id(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    pub fn page_name(&self, v: &VertexId) -> &str {
        self.names.get(v).map(String::as_str).unwrap_or_default()
    }

    pub fn out_neighbors(&self, v: &VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(v).map(|e| e.sink)
    }

    pub fn out_degree(&self, v: &VertexId) -> usize {
        self.graph.out_edges(v).count()
    }

    pub fn is_dangling(&self, v: &VertexId) -> bool {
        self.graph.out_edges(v).next().is_none()
    }

    /// Re-keys vertex scores by page name.
    pub fn named(&self, ranks: &Ranks) -> BTreeMap<String, f64> {
        self.order
            .iter()
            .map(|v| {
                let score = ranks.get(v).copied().unwrap_or(0.0);
                (self.page_name(v).to_string(), score)
            })
            .collect()
    }
}

/// Maps every page to the pages linking to it.
pub struct ReverseIndex {
    inbound: HashMap<VertexId, Vec<VertexId>, ahash::RandomState>,
}

impl ReverseIndex {
    pub fn new(corpus: &Corpus) -> Self {
        let mut inbound: HashMap<_, Vec<_>, ahash::RandomState> =
            corpus.vertices().iter().map(|v| (*v, vec![])).collect();
        for u in corpus.vertices().iter() {
            for v in corpus.out_neighbors(u) {
                if let Some(sources) = inbound.get_mut(&v) {
                    sources.push(*u);
                }
            }
        }
        Self { inbound }
    }

    pub fn linking_to(&self, v: &VertexId) -> &[VertexId] {
        self.inbound.get(v).map(Vec::as_slice).unwrap_or_default()
    }
}

use algograph::graph::*;
use std::{collections::HashMap, hash::Hash};

/// Scores keyed by page vertex.
pub type Ranks = HashMap<VertexId, f64, ahash::RandomState>;

pub fn norm_1<K: Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn norm_inf<K: Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).fold(0.0, f64::max)
}

pub fn total(v: &Ranks) -> f64 {
    v.values().sum()
}

pub fn uniform<I: Iterator<Item = VertexId>>(vertices: I, n: usize) -> Ranks {
    let w = 1.0 / (n as f64);
    vertices.map(|v| (v, w)).collect()
}

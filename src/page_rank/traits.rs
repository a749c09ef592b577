use crate::{Corpus, Ranks};
use std::fmt;

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> Self::Result;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Ranks;

    /// Lists pages in name order with their score to four decimals.
    fn display<'a>(&'a self, corpus: &'a Corpus) -> ResultDisplay<'a> {
        ResultDisplay {
            corpus,
            page_rank: self.page_rank(),
        }
    }
}

pub struct ResultDisplay<'a> {
    corpus: &'a Corpus,
    page_rank: &'a Ranks,
}

impl fmt::Display for ResultDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.corpus.vertices() {
            let p = self.page_rank.get(v).copied().unwrap_or(0.0);
            writeln!(f, "  {}: {p:.4}", self.corpus.page_name(v))?;
        }
        Ok(())
    }
}

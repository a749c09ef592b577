mod common;
pub use self::common::*;
pub mod corpus;
pub use self::corpus::{Corpus, ReverseIndex};
mod error;
pub use self::error::{Error, Result};
pub mod loader;
pub use self::loader::crawl;

pub mod page_rank;

use crate::{Corpus, Error, Result};
use regex::Regex;
use std::{
    collections::BTreeSet,
    fs,
    path::Path,
    sync::LazyLock,
};
use tracing::{debug, info};
use walkdir::WalkDir;

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap());

/// Targets of every `<a href="...">` in `html`.
pub fn extract_links(html: &str) -> BTreeSet<String> {
    HREF.captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reads the `.html` files directly inside `dir` into a corpus.
///
/// Pages are named by file name. Links to the page itself or to files
/// outside the directory are dropped.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let mut pages = vec![];
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path()).map_err(|source| Error::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        let links = extract_links(&contents);
        debug!(page = %name, links = links.len(), "parsed page");
        pages.push((name, links));
    }

    let corpus = Corpus::from_links(pages);
    info!(
        dir = %dir.display(),
        pages = corpus.len(),
        links = corpus.link_count(),
        "loaded corpus"
    );
    Ok(corpus)
}

// src/sitemap/traverse.rs
// =============================================================================
// Breadth-first traversal over crawl levels.
//
// Level 0 is the seed set. Each level filters its frontier against the
// visited set, crawls the remainder as one batch, accumulates everything the
// batch discovered, and uses those links as the next frontier. Levels are
// strictly sequential; level N+1 never starts before level N fully completes.
// =============================================================================

use anyhow::{Context, Result};
use std::collections::HashSet;

use crate::crawler::Crawler;

// Crawls from `seeds` down to `max_depth` levels and returns the set of all
// distinct URLs discovered as link targets (whether or not they were
// themselves crawled).
//
// No URL is ever fetched twice: the visited set spans all prior levels, and
// duplicates within one frontier are collapsed before submission. A frontier
// with nothing new left ends the traversal early. Any batch error aborts the
// whole traversal.
pub(crate) async fn discover(
    crawler: &Crawler,
    seeds: Vec<String>,
    max_depth: usize,
) -> Result<HashSet<String>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut discovered: HashSet<String> = HashSet::new();
    let mut frontier = seeds;

    for level in 0..=max_depth {
        let mut queued: HashSet<String> = HashSet::new();
        let mut batch: Vec<String> = Vec::new();
        for url in &frontier {
            if visited.contains(url) || !queued.insert(url.clone()) {
                tracing::debug!("skipping already crawled URL {}", url);
                continue;
            }
            batch.push(url.clone());
        }
        if batch.is_empty() {
            break;
        }

        let links = crawler
            .crawl(&batch)
            .await
            .with_context(|| format!("crawl failed at level {level}"))?;

        // The whole pre-filter frontier counts as visited, not just the batch
        visited.extend(frontier.drain(..));

        tracing::info!("[level {}] {} links found", level, links.len());
        discovered.extend(links.iter().cloned());
        frontier = links;
    }

    Ok(discovered)
}

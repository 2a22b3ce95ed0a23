// src/sitemap/mod.rs
// =============================================================================
// Sitemap generation: run the breadth-first traversal from the seed URL, turn
// the discovered set into dated entries and write the XML document.
//
// Submodules:
// - traverse: BFS driver over crawl levels (visited set + accumulator)
// - xml: sitemap entry type, rendering and file writing
// =============================================================================

mod traverse;
mod xml;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use url::Url;

use crate::crawler::{Crawler, CrawlerConfig};
use xml::SitemapEntry;

const DEFAULT_SITEMAP_FILE: &str = "sitemap.xml";
const LASTMOD_FORMAT: &str = "%Y-%m-%d";

// Crawls the site at `seed_url` and writes the sitemap.
//
// The file is only written when the whole traversal succeeds; any fetch error
// aborts without output. An empty result set is an error too.
pub async fn generate(
    seed_url: &str,
    output_file: Option<&Path>,
    config: CrawlerConfig,
    max_depth: usize,
) -> Result<()> {
    if seed_url.is_empty() {
        bail!("no seed URL provided");
    }
    let path = output_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(seed_url));

    let crawler = Crawler::new(config).context("failed to start crawler")?;
    let discovered = traverse::discover(&crawler, vec![seed_url.to_string()], max_depth)
        .await
        .context("sitemap traversal failed")?;
    if discovered.is_empty() {
        bail!("no links found on {seed_url}");
    }

    let lastmod = Utc::now().format(LASTMOD_FORMAT).to_string();
    let mut entries: Vec<SitemapEntry> = discovered
        .into_iter()
        .map(|loc| SitemapEntry {
            loc,
            lastmod: lastmod.clone(),
        })
        .collect();
    // The discovered set has no meaningful order; sort for stable output
    entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    tracing::info!("writing {} URLs to {}", entries.len(), path.display());
    xml::write_file(&path, &entries)
}

// Default output path: `<host>_sitemap.xml`, or plain `sitemap.xml` when the
// seed URL has no parseable host.
fn default_output_path(seed_url: &str) -> PathBuf {
    match Url::parse(seed_url) {
        Ok(url) => match url.host_str() {
            Some(host) => PathBuf::from(format!("{host}_sitemap.xml")),
            None => PathBuf::from(DEFAULT_SITEMAP_FILE),
        },
        Err(e) => {
            tracing::warn!("cannot derive sitemap file name from {}: {}", seed_url, e);
            PathBuf::from(DEFAULT_SITEMAP_FILE)
        }
    }
}

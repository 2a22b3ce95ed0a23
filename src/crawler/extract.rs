// src/crawler/extract.rs
// =============================================================================
// Pure link extraction: raw HTML in, link strings out. No state, no I/O.
//
// Extraction is intentionally isolated here so the rest of the crawler only
// ever sees resolved URL strings, never HTML.
// =============================================================================

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Extracts every `href` inside an anchor tag, in first-seen order, with
// exact-string duplicates removed. Malformed HTML yields partial or empty
// results, never an error.
pub(crate) fn anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse returns Result; unwrapping is fine for a constant
    // selector known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if seen.insert(href.to_string()) {
                links.push(href.to_string());
            }
        }
    }
    links
}

// Returns the `href` of the first <base> tag, if any.
pub(crate) fn base_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("base[href]").unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(str::to_string)
}

// Converts raw extracted links into normalized, same-host, absolute URLs.
//
// Rules, applied in order to each link:
//   - empty links, fragment-only links (`#...`) and `.xsd` links are dropped
//   - links that already carry a scheme are kept as-is, but only when they
//     contain the fetch URL's host (same-host crawl boundary)
//   - links starting with `/` are prefixed with `scheme://authority`
//   - other relative links are prefixed with the <base> href when one was
//     found, else with `scheme://authority/`
//
// Fails only if `page_url` itself cannot be parsed.
pub(crate) fn resolve_links(
    page_url: &str,
    base: Option<&str>,
    links: Vec<String>,
) -> Result<Vec<String>> {
    let url = Url::parse(page_url).with_context(|| format!("invalid page URL '{page_url}'"))?;
    let host = url.host_str().unwrap_or_default().to_string();
    let scheme_and_host = format!("{}://{}", url.scheme(), url.authority());
    let base = base.filter(|b| !b.is_empty());

    let mut resolved = Vec::with_capacity(links.len());
    for link in links {
        if link.is_empty() || link.starts_with('#') || link.ends_with(".xsd") {
            continue;
        }
        if link.starts_with("http") {
            // Already absolute: keep only same-host links
            if !host.is_empty() && link.contains(&host) {
                resolved.push(link);
            }
            continue;
        }
        if link.starts_with('/') {
            resolved.push(format!("{scheme_and_host}{link}"));
        } else if let Some(base) = base {
            resolved.push(format!("{base}{link}"));
        } else {
            resolved.push(format!("{scheme_and_host}/{link}"));
        }
    }
    Ok(resolved)
}

// src/sitemap/xml.rs
// =============================================================================
// Rendering and writing the sitemap document: a <urlset> root with one <url>
// entry per discovered location, each carrying a <loc> and a <lastmod> stamp.
// =============================================================================

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// One sitemap entry, derived once from the discovered set and immutable
// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SitemapEntry {
    pub(crate) loc: String,
    /// Generation date in YYYY-MM-DD, not the page's real modification time.
    pub(crate) lastmod: String,
}

// Renders the entries as an indented XML document.
pub(crate) fn render(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .context("writing XML declaration")?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_XMLNS));
    writer
        .write_event(Event::Start(urlset))
        .context("writing urlset start tag")?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .context("writing url start tag")?;

        writer
            .write_event(Event::Start(BytesStart::new("loc")))
            .context("writing loc start tag")?;
        writer
            .write_event(Event::Text(BytesText::new(&entry.loc)))
            .context("writing loc text")?;
        writer
            .write_event(Event::End(BytesEnd::new("loc")))
            .context("writing loc end tag")?;

        writer
            .write_event(Event::Start(BytesStart::new("lastmod")))
            .context("writing lastmod start tag")?;
        writer
            .write_event(Event::Text(BytesText::new(&entry.lastmod)))
            .context("writing lastmod text")?;
        writer
            .write_event(Event::End(BytesEnd::new("lastmod")))
            .context("writing lastmod end tag")?;

        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .context("writing url end tag")?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .context("writing urlset end tag")?;

    String::from_utf8(writer.into_inner()).context("sitemap XML is not valid UTF-8")
}

// Renders the entries and writes them to `path`, creating the parent
// directory if it is absent.
pub(crate) fn write_file(path: &Path, entries: &[SitemapEntry]) -> Result<()> {
    let xml = render(entries)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    fs::write(path, xml).with_context(|| format!("writing sitemap to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(loc: &str) -> SitemapEntry {
        SitemapEntry {
            loc: loc.to_string(),
            lastmod: "2026-08-23".to_string(),
        }
    }

    #[test]
    fn render_produces_a_urlset_document() {
        let entries = vec![
            entry("https://example.com/"),
            entry("https://example.com/about"),
        ];
        let xml = render(&entries).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert_eq!(xml.matches("<lastmod>2026-08-23</lastmod>").count(), 2);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn render_escapes_query_urls() {
        let xml = render(&[entry("https://example.com/?a=1&b=2")]).unwrap();
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn write_file_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("sitemapper-test-{}", std::process::id()));
        let path = dir.join("nested").join("sitemap.xml");

        write_file(&path, &[entry("https://example.com/")]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<loc>https://example.com/</loc>"));
        fs::remove_dir_all(&dir).unwrap();
    }
}

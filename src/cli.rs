// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitemapper",
    version,
    about = "Crawls a website and generates an XML sitemap",
    long_about = "sitemapper discovers every reachable page of a website by crawling it \
                  breadth-first with a pool of parallel workers, then writes an XML sitemap \
                  of all distinct URLs it found."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    pub url: String,

    /// Number of parallel workers fetching pages
    #[arg(long, default_value_t = 3)]
    pub parallel: usize,

    /// Output file path (default: <host>_sitemap.xml)
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Maximum depth of the breadth-first crawl; 0 crawls only the seed page
    #[arg(long, default_value_t = 2)]
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let cli = Cli::try_parse_from(["sitemapper", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.parallel, 3);
        assert_eq!(cli.max_depth, 2);
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn all_flags_are_recognized() {
        let cli = Cli::try_parse_from([
            "sitemapper",
            "https://example.com",
            "--parallel",
            "8",
            "--max-depth",
            "0",
            "--output-file",
            "out/map.xml",
        ])
        .unwrap();
        assert_eq!(cli.parallel, 8);
        assert_eq!(cli.max_depth, 0);
        assert_eq!(cli.output_file, Some(PathBuf::from("out/map.xml")));
    }

    #[test]
    fn the_seed_url_is_required() {
        assert!(Cli::try_parse_from(["sitemapper"]).is_err());
    }
}

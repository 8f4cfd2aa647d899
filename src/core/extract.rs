// HeadlineScope - core/extract.rs
//
// Headline extraction from front-page markup.
//
// The target site has served two layouts over time and both can appear in a
// single page, so extraction runs two passes:
//   1. Current layout: `<span class="titleline"><a>Headline</a>...</span>`
//   2. Legacy layout:  `<td class="title"><a>Headline</a></td>`, which also
//      holds the "More" pagination link.
//
// A link whose text is exactly "More" is never a headline, whichever pass
// finds it. Headlines are collected in page order, pass 1 first, into a
// `HeadlineSet` that keeps the first-seen order. Markup the parser
// cannot make sense of simply yields zero matches; that is not an error.

use crate::core::model::{Headline, HeadlineSet};
use scraper::{ElementRef, Html, Selector};

/// Link text of the pagination link.
pub const MORE_LINK_TEXT: &str = "More";

/// Per-pass counters, used to explain an empty result in the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Title-line containers that held a link with non-empty text.
    pub title_line_links: usize,

    /// Legacy title cells that contributed a new headline.
    pub legacy_links: usize,

    /// "More" pagination links skipped.
    pub more_links_skipped: usize,

    /// Candidates dropped because the exact text was already collected.
    pub duplicates_skipped: usize,
}

/// Result of one extraction run.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub headlines: HeadlineSet,
    pub report: ExtractionReport,
}

struct Selectors {
    title_line: Selector,
    legacy_title: Selector,
    link: Selector,
}

impl Selectors {
    fn new() -> Self {
        // Compile-time constant selectors; parsing cannot fail.
        Self {
            title_line: Selector::parse("span.titleline").expect("static selector"),
            legacy_title: Selector::parse("td.title").expect("static selector"),
            link: Selector::parse("a").expect("static selector"),
        }
    }
}

/// Extract the unique headlines from `markup`.
pub fn extract(markup: &str) -> HeadlineSet {
    extract_with_report(markup).headlines
}

/// Extract the unique headlines from `markup`, with per-pass counters.
pub fn extract_with_report(markup: &str) -> Extraction {
    let document = Html::parse_document(markup);
    let selectors = Selectors::new();
    let mut report = ExtractionReport::default();
    let mut headlines = HeadlineSet::new();

    // Pass 1: current layout.
    for container in document.select(&selectors.title_line) {
        let Some(text) = first_link_text(container, &selectors.link) else {
            continue;
        };
        if text == MORE_LINK_TEXT {
            report.more_links_skipped += 1;
            continue;
        }
        let Some(headline) = Headline::new(&text) else {
            continue;
        };
        report.title_line_links += 1;
        if !headlines.insert(headline) {
            report.duplicates_skipped += 1;
        }
    }

    // Pass 2: legacy layout. Pass-1 headlines take priority.
    for cell in document.select(&selectors.legacy_title) {
        let Some(text) = first_link_text(cell, &selectors.link) else {
            continue;
        };
        if text == MORE_LINK_TEXT {
            report.more_links_skipped += 1;
            continue;
        }
        let Some(headline) = Headline::new(&text) else {
            continue;
        };
        if headlines.insert(headline) {
            report.legacy_links += 1;
        } else {
            report.duplicates_skipped += 1;
        }
    }

    tracing::debug!(
        markup_bytes = markup.len(),
        title_line_links = report.title_line_links,
        legacy_links = report.legacy_links,
        more_skipped = report.more_links_skipped,
        duplicates = report.duplicates_skipped,
        unique = headlines.len(),
        "Headline extraction complete"
    );

    Extraction { headlines, report }
}

/// Text of the first `<a>` descendant of `container`, if any.
///
/// The link's text nodes are concatenated as they appear and the result is
/// trimmed once, so inner whitespace survives:
/// `<a>Ask HN: <em>why</em> Rust?</a>` gives `"Ask HN: why Rust?"`, not
/// `"Ask HN:whyRust?"` as per-node stripping would.
fn first_link_text(container: ElementRef<'_>, link: &Selector) -> Option<String> {
    container
        .select(link)
        .next()
        .map(|a| a.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<html><head><title>t</title></head><body><table>{body}</table></body></html>")
    }

    fn title_line(text: &str) -> String {
        format!(
            "<tr class=\"athing\"><td class=\"title\"><span class=\"titleline\">\
             <a href=\"https://example.com\">{text}</a> \
             <span class=\"sitebit comhead\">(<a href=\"from?site=example.com\">\
             <span class=\"sitestr\">example.com</span></a>)</span></span></td></tr>"
        )
    }

    fn texts(set: &HeadlineSet) -> Vec<&str> {
        set.iter().map(Headline::as_str).collect()
    }

    #[test]
    fn test_current_layout_headlines_in_page_order() {
        let html = page(&format!(
            "{}{}{}",
            title_line("First story"),
            title_line("Second story"),
            title_line("Third story")
        ));
        let extraction = extract_with_report(&html);
        assert_eq!(
            texts(&extraction.headlines),
            vec!["First story", "Second story", "Third story"]
        );
        assert_eq!(extraction.report.title_line_links, 3);
        // Each title line sits inside a legacy title cell with the same link.
        assert_eq!(extraction.report.legacy_links, 0);
        assert_eq!(extraction.report.duplicates_skipped, 3);
    }

    #[test]
    fn test_link_text_is_trimmed() {
        let html = page(
            "<tr><td><span class=\"titleline\"><a href=\"#\">\n   Padded headline \t</a></span></td></tr>",
        );
        assert_eq!(texts(&extract(&html)), vec!["Padded headline"]);
    }

    #[test]
    fn test_exact_duplicates_collapse_to_one() {
        let html = page(&format!(
            "{}{}",
            title_line("Rust is great for systems"),
            title_line("Rust is great for systems")
        ));
        assert_eq!(texts(&extract(&html)), vec!["Rust is great for systems"]);
    }

    #[test]
    fn test_more_link_is_never_a_headline() {
        let html = page("<tr><td class=\"title\"><a href=\"?p=2\" class=\"morelink\">More</a></td></tr>");
        let extraction = extract_with_report(&html);
        assert!(extraction.headlines.is_empty());
        assert_eq!(extraction.report.more_links_skipped, 1);
    }

    #[test]
    fn test_more_link_in_title_line_is_skipped() {
        let html = page(&format!(
            "{}<tr><td><span class=\"titleline\"><a href=\"?p=2\">More</a></span></td></tr>",
            title_line("Real headline")
        ));
        let extraction = extract_with_report(&html);
        assert_eq!(texts(&extraction.headlines), vec!["Real headline"]);
        assert!(!extraction.headlines.contains(MORE_LINK_TEXT));
        assert_eq!(extraction.report.title_line_links, 1);
        assert_eq!(extraction.report.more_links_skipped, 1);

        let bare = "<table><tr><td><span class=\"titleline\"><a>More</a></span></td></tr></table>";
        assert!(extract(bare).is_empty());
    }

    #[test]
    fn test_more_is_matched_exactly() {
        let html = page(&format!("{}{}", title_line("More"), title_line("More to come")));
        let extraction = extract_with_report(&html);
        assert_eq!(texts(&extraction.headlines), vec!["More to come"]);
        assert!(extract(&page(&title_line("more"))).contains("more"));
    }

    #[test]
    fn test_legacy_layout_contributes_new_headlines() {
        let html = page(
            "<tr><td class=\"title\"><a href=\"a\">Legacy one</a></td></tr>\
             <tr><td class=\"title\"><a href=\"b\">Legacy two</a></td></tr>\
             <tr><td class=\"title\"><a href=\"b\">Legacy two</a></td></tr>",
        );
        let extraction = extract_with_report(&html);
        assert_eq!(texts(&extraction.headlines), vec!["Legacy one", "Legacy two"]);
        assert_eq!(extraction.report.legacy_links, 2);
        assert_eq!(extraction.report.duplicates_skipped, 1);
    }

    #[test]
    fn test_title_line_wins_over_legacy_order() {
        // The legacy cell appears earlier in the page, but pass 1 runs first.
        let html = page(&format!(
            "<tr><td class=\"title\"><a href=\"x\">Legacy only</a></td></tr>{}",
            title_line("Modern")
        ));
        assert_eq!(texts(&extract(&html)), vec!["Modern", "Legacy only"]);
    }

    #[test]
    fn test_rank_cells_and_empty_links_are_ignored() {
        let html = page(
            "<tr><td class=\"title\"><span class=\"rank\">1.</span></td>\
             <td class=\"title\"><a href=\"x\">   </a></td>\
             <td><span class=\"titleline\"></span></td></tr>",
        );
        assert!(extract(&html).is_empty());
    }

    #[test]
    fn test_garbage_markup_yields_empty_set() {
        assert!(extract("").is_empty());
        assert!(extract("<<<>>> not html at all <td class=").is_empty());
        assert!(extract("{\"json\": true}").is_empty());
    }

    #[test]
    fn test_nested_markup_inside_link_is_flattened() {
        let html = page(
            "<tr><td><span class=\"titleline\"><a href=\"#\">Ask HN: <em>why</em> Rust?</a></span></td></tr>",
        );
        assert_eq!(texts(&extract(&html)), vec!["Ask HN: why Rust?"]);
    }
}

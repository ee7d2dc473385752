//! Readable-text extraction from fetched HTML
//!
//! This module strips non-content markup (scripts, styles, navigation,
//! chrome, form controls, hidden elements) and produces one cleaned text
//! block per page, tagged with its source URL so the combined output
//! stays attributable.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;

/// Minimum character count before a candidate container is trusted over
/// the full body text
const MIN_SUBSTANCE_CHARS: usize = 100;

/// Tag names whose subtrees never contribute readable text
const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "frame", "object", "embed", "nav", "header",
    "footer", "form", "input", "select", "textarea", "button", "label", "link", "meta", "svg",
];

/// Tag names that end a line of text when their subtree closes
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "table", "tr", "h1", "h2", "h3", "h4", "h5", "h6",
    "blockquote", "pre", "section", "article", "aside",
];

/// Containers tried in order before falling back to the full body
const CANDIDATE_SELECTORS: &[&str] = &["article", "main", "#content", ".content"];

/// Errors raised while extracting content from a page
///
/// These never abort a crawl; the coordinator converts them into a visible
/// error block at the page's position in the output.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid content selector `{0}`")]
    Selector(String),

    #[error("document has no body element")]
    NoBody,
}

/// One page's cleaned, attributed text fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// The URL the text was extracted from
    pub source: String,

    /// The cleaned text
    pub text: String,
}

impl ContentBlock {
    /// Creates a block describing an extraction failure
    ///
    /// The rendered block keeps the page's position in the combined output
    /// and names both the source URL and the failure reason.
    pub fn failure(source: &str, reason: &str) -> Self {
        Self {
            source: source.to_string(),
            text: format!("[Content extraction failed for {}: {}]", source, reason),
        }
    }

    /// Renders the block with its source-URL header line
    pub fn render(&self) -> String {
        format!("===== {} =====\n\n{}", self.source, self.text)
    }
}

/// Extracts the readable text of a page into a [`ContentBlock`]
///
/// # Selection
///
/// The first non-empty candidate among `article`, `main`, `#content`,
/// `.content`, and the body wins. If the winning candidate's text is
/// shorter than 100 characters the full body text is used instead, so a
/// near-empty `article` shell cannot hide a page's real content.
///
/// # Cleaning
///
/// Scripts, styles, embedded frames, navigation, headers/footers, form
/// controls, stylesheet links, metadata tags, and hidden or ARIA-hidden
/// elements are all removed before text is collected. Whitespace is then
/// normalized: space/tab runs collapse to one space, blank-line runs to a
/// single newline, and the ends are trimmed.
///
/// Extraction is a pure function of its inputs: identical HTML and source
/// URL always produce identical output.
///
/// # Arguments
///
/// * `html` - The raw HTML to extract from
/// * `source_url` - The URL the HTML was fetched from
///
/// # Returns
///
/// * `Ok(ContentBlock)` - The cleaned, attributed text
/// * `Err(ExtractError)` - Extraction failed internally
pub fn extract_content(html: &str, source_url: &str) -> Result<ContentBlock, ExtractError> {
    let document = Html::parse_document(html);

    let body_text = body_text(&document)?;

    let mut text = None;
    for selector_str in CANDIDATE_SELECTORS {
        let selector = Selector::parse(selector_str)
            .map_err(|_| ExtractError::Selector(selector_str.to_string()))?;

        if let Some(candidate) = document.select(&selector).next() {
            let candidate_text = normalize_whitespace(&collect_text(candidate));
            if !candidate_text.is_empty() {
                text = Some(candidate_text);
                break;
            }
        }
    }

    let text = match text {
        Some(t) if t.chars().count() >= MIN_SUBSTANCE_CHARS => t,
        _ => body_text,
    };

    Ok(ContentBlock {
        source: source_url.to_string(),
        text,
    })
}

/// Collects the cleaned text of the full body
fn body_text(document: &Html) -> Result<String, ExtractError> {
    let selector =
        Selector::parse("body").map_err(|_| ExtractError::Selector("body".to_string()))?;

    let body = document
        .select(&selector)
        .next()
        .ok_or(ExtractError::NoBody)?;

    Ok(normalize_whitespace(&collect_text(body)))
}

/// Walks an element's subtree collecting text, skipping excluded and
/// hidden elements
fn collect_text(root: ElementRef) -> String {
    let mut out = String::new();
    append_text(*root, &mut out);
    out
}

fn append_text(node: ego_tree::NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            if is_excluded(element) {
                return;
            }
            if element.name() == "br" {
                out.push('\n');
                return;
            }
            for child in node.children() {
                append_text(child, out);
            }
            if BLOCK_TAGS.contains(&element.name()) {
                out.push('\n');
            }
        }
        _ => {
            for child in node.children() {
                append_text(child, out);
            }
        }
    }
}

/// Returns whether an element's subtree is excluded from extraction
fn is_excluded(element: &Element) -> bool {
    if EXCLUDED_TAGS.contains(&element.name()) {
        return true;
    }

    if element.attr("hidden").is_some() {
        return true;
    }

    matches!(element.attr("aria-hidden"), Some(v) if v.eq_ignore_ascii_case("true"))
}

/// Collapses space/tab runs to one space and blank-line runs to a single
/// newline, trimming the ends
fn normalize_whitespace(raw: &str) -> String {
    let mut lines = Vec::new();
    for line in raw.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if !collapsed.is_empty() {
            lines.push(collapsed);
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "https://example.com/page";

    fn long_text() -> String {
        "word ".repeat(40)
    }

    #[test]
    fn test_scripts_and_styles_removed() {
        let html = format!(
            r#"<html><body>
            <script>var x = "ignore me";</script>
            <style>body {{ color: red; }}</style>
            <p>{}</p>
            </body></html>"#,
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(!block.text.contains("ignore me"));
        assert!(!block.text.contains("color: red"));
        assert!(block.text.contains("word"));
    }

    #[test]
    fn test_navigation_and_chrome_removed() {
        let html = format!(
            r#"<html><body>
            <nav><a href="/">Home</a></nav>
            <header>Site Title</header>
            <p>{}</p>
            <footer>Copyright</footer>
            </body></html>"#,
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(!block.text.contains("Home"));
        assert!(!block.text.contains("Site Title"));
        assert!(!block.text.contains("Copyright"));
    }

    #[test]
    fn test_form_controls_removed() {
        let html = format!(
            r#"<html><body>
            <form><input value="x"><button>Submit</button><textarea>notes</textarea></form>
            <p>{}</p>
            </body></html>"#,
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(!block.text.contains("Submit"));
        assert!(!block.text.contains("notes"));
    }

    #[test]
    fn test_hidden_elements_removed() {
        let html = format!(
            r#"<html><body>
            <div hidden>invisible one</div>
            <div aria-hidden="true">invisible two</div>
            <p>{}</p>
            </body></html>"#,
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(!block.text.contains("invisible one"));
        assert!(!block.text.contains("invisible two"));
    }

    #[test]
    fn test_article_preferred_over_body() {
        let inner = long_text();
        let html = format!(
            r#"<html><body>
            <div>sidebar chatter</div>
            <article><p>{}</p></article>
            </body></html>"#,
            inner
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(block.text.contains("word"));
        assert!(!block.text.contains("sidebar chatter"));
    }

    #[test]
    fn test_short_article_falls_back_to_body() {
        let html = format!(
            r#"<html><body>
            <article>tiny</article>
            <p>{}</p>
            </body></html>"#,
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        // Body text includes both the stub article and the real content
        assert!(block.text.contains("word"));
    }

    #[test]
    fn test_main_used_when_no_article() {
        let html = format!(
            r#"<html><body>
            <div>navigation junk</div>
            <main><p>{}</p></main>
            </body></html>"#,
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(block.text.contains("word"));
        assert!(!block.text.contains("navigation junk"));
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = r#"<html><body><main><p>a    b		c</p>


            <p>d</p></main></body></html>"#;
        let block = extract_content(html, SOURCE).unwrap();
        assert!(block.text.starts_with("a b c"));
        assert!(!block.text.contains("\n\n"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = format!("<html><body><p>{}</p></body></html>", long_text());
        let first = extract_content(&html, SOURCE).unwrap();
        let second = extract_content(&html, SOURCE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_includes_source_header() {
        let html = format!("<html><body><p>{}</p></body></html>", long_text());
        let block = extract_content(&html, SOURCE).unwrap();
        let rendered = block.render();
        assert!(rendered.starts_with(&format!("===== {} =====", SOURCE)));
    }

    #[test]
    fn test_failure_block_names_url_and_reason() {
        let block = ContentBlock::failure(SOURCE, "boom");
        assert!(block.text.contains(SOURCE));
        assert!(block.text.contains("boom"));
        assert!(block.render().contains(SOURCE));
    }

    #[test]
    fn test_empty_page_yields_empty_text() {
        let block = extract_content("<html><body></body></html>", SOURCE).unwrap();
        assert!(block.text.is_empty());
    }

    #[test]
    fn test_deeply_nested_text_collected() {
        let html = format!(
            r#"<html><body>
            <div><section><div><span>inner <em>emphasis</em></span>
            <p>{}</p></div></section></div>
            </body></html>"#,
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(block.text.contains("inner emphasis"));
        assert!(block.text.contains("word"));
    }

    #[test]
    fn test_paragraphs_separated_by_newline() {
        let html = format!(
            "<html><body><main><p>first paragraph {}</p><p>second paragraph</p></main></body></html>",
            long_text()
        );
        let block = extract_content(&html, SOURCE).unwrap();
        assert!(block.text.contains('\n'));
        assert!(block.text.contains("second paragraph"));
    }
}

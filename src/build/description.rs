//! Description HTML to portable plain text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use scraper::{Html, Node};

use crate::error_handling::TransformError;

/// Turns an advert's HTML description into portable plain text.
///
/// The decoder treats implementations as black boxes: any error is recorded
/// as a soft failure of the plain-text field and decoding continues.
pub trait DescriptionTransform: Send + Sync {
    /// Renders HTML to plain text.
    fn to_plain_text(&self, html: &str) -> Result<String, TransformError>;

    /// Encodes rendered text for transport. Standard base64 by default.
    fn encode(&self, text: &str) -> Result<String, TransformError> {
        Ok(STANDARD.encode(text.as_bytes()))
    }

    /// Full pipeline: render, then encode.
    fn render(&self, html: &str) -> Result<String, TransformError> {
        let text = self.to_plain_text(html)?;
        self.encode(&text)
    }
}

/// Default transform: renders with `scraper`, encodes with base64.
///
/// Raw line breaks in the source are treated as `<br />`, block elements
/// start a new line, and runs of whitespace collapse to a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlToPlainText;

const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "tr", "table", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote",
    "pre", "section", "article",
];

impl DescriptionTransform for HtmlToPlainText {
    fn to_plain_text(&self, html: &str) -> Result<String, TransformError> {
        let normalized = html.replace("\r\n", "<br />").replace('\n', "<br />");
        let fragment = Html::parse_fragment(&normalized);

        let mut raw = String::new();
        for node in fragment.root_element().descendants() {
            match node.value() {
                Node::Text(text) => {
                    let hidden = node
                        .parent()
                        .and_then(|p| p.value().as_element())
                        .is_some_and(|e| matches!(e.name(), "script" | "style"));
                    if !hidden {
                        raw.push_str(text);
                    }
                }
                Node::Element(element) if element.name() == "br" => raw.push('\n'),
                Node::Element(element) if BLOCK_ELEMENTS.contains(&element.name()) => {
                    raw.push('\n')
                }
                _ => {}
            }
        }

        let text = collapse_whitespace(&raw);
        if text.is_empty() && !html.trim().is_empty() {
            return Err(TransformError::EmptyRendering);
        }
        Ok(text)
    }
}

/// Collapses whitespace within lines and drops empty lines.
fn collapse_whitespace(raw: &str) -> String {
    raw.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

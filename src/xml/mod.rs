//! Owned XML element tree.
//!
//! Raw response text is parsed once with `quick-xml` into a tree of
//! [`Element`]s that keep the namespace prefix exactly as written. Namespaces
//! are not resolved: the API contract identifies elements by prefix
//! (`ad:ad`, `cat:categories`), so undeclared prefixes are accepted.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::config::MAX_DEPTH;
use crate::error_handling::{DecodeError, QualifiedName};


/// A parsed element: prefix, local name, attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    prefix: Option<String>,
    name: String,
    attributes: Vec<Attribute>,
    text: String,
    children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attribute {
    name: String,
    value: String,
}

impl Element {
    /// Namespace prefix as written in the document.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Local tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Concatenated character data of this element's direct text children.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// Value of the first attribute with this local name, whatever its prefix.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Exact (prefix, tag) comparison.
    pub fn is(&self, prefix: &str, name: &str) -> bool {
        self.prefix() == Some(prefix) && self.name == name
    }

    /// Whether this element matches a path step: same local name, and the
    /// same prefix when the step names one.
    pub fn matches(&self, prefix: Option<&str>, name: &str) -> bool {
        self.name == name && prefix.map_or(true, |p| self.prefix() == Some(p))
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName {
            namespace: self.prefix.clone(),
            tag: self.name.clone(),
        }
    }

    /// Depth-first pre-order walk over this element and all its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// A parsed document. Always has exactly one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn malformed(reason: impl ToString) -> DecodeError {
    DecodeError::MalformedDocument {
        reason: reason.to_string(),
    }
}

fn split_name(raw: &[u8]) -> Result<(Option<String>, String), DecodeError> {
    let raw = std::str::from_utf8(raw).map_err(malformed)?;
    Ok(match raw.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
        None => (None, raw.to_string()),
    })
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, DecodeError> {
    let (prefix, name) = split_name(start.name().as_ref())?;
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(malformed)?;
        let (attr_prefix, attr_name) = split_name(attr.key.as_ref())?;
        // namespace declarations are not data
        if attr_prefix.as_deref() == Some("xmlns") || (attr_prefix.is_none() && attr_name == "xmlns")
        {
            continue;
        }
        let value = attr.unescape_value().map_err(malformed)?.into_owned();
        attributes.push(Attribute {
            name: attr_name,
            value,
        });
    }
    Ok(Element {
        prefix,
        name,
        attributes,
        ..Element::default()
    })
}

/// Rejects an element that would open below `MAX_DEPTH` levels. Builders
/// and the tree's drop recurse once per level.
fn check_depth(open_ancestors: usize) -> Result<(), DecodeError> {
    if open_ancestors >= MAX_DEPTH {
        return Err(malformed(format!("nesting too deep (over {MAX_DEPTH} levels)")));
    }
    Ok(())
}

/// Parses raw response text into a [`Document`].
///
/// Fails with [`DecodeError::EmptyDocument`] for a blank body and
/// [`DecodeError::MalformedDocument`] for anything that is not a single
/// well-formed element tree, including trees nested deeper than
/// [`MAX_DEPTH`]. This is a pure function of its input.
pub fn parse_document(raw: &str) -> Result<Document, DecodeError> {
    if raw.trim().is_empty() {
        return Err(DecodeError::EmptyDocument);
    }

    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(malformed("multiple root elements"));
                }
                check_depth(stack.len())?;
                stack.push(open_element(&start)?);
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(malformed("multiple root elements"));
                }
                check_depth(stack.len())?;
                let element = open_element(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end names
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("closing tag without opening tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(malformed("text outside of the root element")),
                }
            }
            Event::CData(data) => {
                let data = std::str::from_utf8(&data).map_err(malformed)?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(data),
                    None => return Err(malformed("CDATA outside of the root element")),
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("unclosed element <{}>", open.qualified_name())));
    }
    root.map(|root| Document { root })
        .ok_or_else(|| malformed("no root element"))
}

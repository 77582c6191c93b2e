//! Path descriptors.
//!
//! A path is a `/`-separated list of steps relative to a node. Each step is an
//! element name with an optional namespace prefix and an optional attribute
//! predicate: `ad:price/types:currency-iso-code/types:value` or
//! `pic:link[@rel='thumbnail']`. A leading `./` is accepted. A step without a
//! prefix matches the name in any namespace.

use crate::xml::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step<'p> {
    prefix: Option<&'p str>,
    name: &'p str,
    predicate: Option<Predicate<'p>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate<'p> {
    AttributeEquals { name: &'p str, value: &'p str },
    /// A predicate we could not read; matches nothing.
    Invalid,
}

impl<'p> Step<'p> {
    fn parse(raw: &'p str) -> Self {
        let (head, predicate) = match raw.split_once('[') {
            Some((head, rest)) => (head, Some(parse_predicate(rest))),
            None => (raw, None),
        };
        let (prefix, name) = match head.split_once(':') {
            Some((prefix, name)) => (Some(prefix), name),
            None => (None, head),
        };
        Step {
            prefix,
            name,
            predicate,
        }
    }

    pub(crate) fn matches(&self, element: &Element) -> bool {
        if !element.matches(self.prefix, self.name) {
            return false;
        }
        match &self.predicate {
            None => true,
            Some(Predicate::AttributeEquals { name, value }) => {
                element.attribute(name) == Some(*value)
            }
            Some(Predicate::Invalid) => false,
        }
    }
}

fn parse_predicate(rest: &str) -> Predicate<'_> {
    let parsed = rest
        .strip_suffix(']')
        .and_then(|body| body.strip_prefix('@'))
        .and_then(|body| body.split_once('='))
        .and_then(|(name, quoted)| {
            let value = quoted
                .strip_prefix('\'')
                .and_then(|v| v.strip_suffix('\''))
                .or_else(|| quoted.strip_prefix('"').and_then(|v| v.strip_suffix('"')))?;
            Some(Predicate::AttributeEquals { name, value })
        });
    parsed.unwrap_or(Predicate::Invalid)
}

/// Splits a path descriptor into its steps. An empty path (or `.`) has no
/// steps and designates the node itself.
pub(crate) fn steps(path: &str) -> Vec<Step<'_>> {
    path.trim_start_matches("./")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(Step::parse)
        .collect()
}

/// First element reached by `steps`, in document order.
pub(crate) fn find_first<'a>(node: &'a Element, steps: &[Step<'_>]) -> Option<&'a Element> {
    let Some((step, rest)) = steps.split_first() else {
        return Some(node);
    };
    node.children()
        .filter(|child| step.matches(child))
        .find_map(|child| find_first(child, rest))
}

/// Every element reached by `steps`, in document order.
pub(crate) fn find_every<'a>(node: &'a Element, steps: &[Step<'_>], out: &mut Vec<&'a Element>) {
    let Some((step, rest)) = steps.split_first() else {
        out.push(node);
        return;
    };
    for child in node.children().filter(|child| step.matches(child)) {
        find_every(child, rest, out);
    }
}

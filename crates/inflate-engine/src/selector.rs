//! Selector parsing and matching for the element-selection surface.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), reduced to the
//! compound simple selector the entry points need: an optional type name
//! plus any number of `#id` / `.class` parts, or `*`. No combinators,
//! attribute selectors, or pseudo-classes — targets and containers are
//! addressed directly, not through stylesheet rules.

use inflate_dom::{ElementData, NodeId};

use crate::error::InflateError;

/// A single condition on an element.
///
/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `section`, `aside`
    Type(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#sidebar`
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.panel`, `.content-pane`
    Class(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    ///
    /// `*` — matches every element.
    Universal,
}

impl SimpleSelector {
    fn matches(&self, element: &ElementData) -> bool {
        match self {
            SimpleSelector::Type(name) => element.tag_name.eq_ignore_ascii_case(name),
            SimpleSelector::Id(id) => element.id() == Some(id.as_str()),
            SimpleSelector::Class(class) => element.classes().contains(class.as_str()),
            SimpleSelector::Universal => true,
        }
    }
}

/// A compound selector: every part must match the same element.
///
/// [§ 4.1 Structure](https://www.w3.org/TR/selectors-4/#structure)
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<SimpleSelector>,
}

impl Selector {
    /// Parse a compound simple selector.
    ///
    /// # Errors
    ///
    /// Returns [`InflateError::InvalidSelector`] for empty input, a
    /// dangling `#`/`.`, or any syntax outside the supported subset
    /// (combinators, attribute selectors, pseudo-classes).
    pub fn parse(input: &str) -> Result<Selector, InflateError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(InflateError::InvalidSelector(input.to_string()));
        }

        let mut parts = Vec::new();
        let mut chars = source.chars().peekable();
        while let Some(&c) = chars.peek() {
            match c {
                '*' => {
                    let _ = chars.next();
                    parts.push(SimpleSelector::Universal);
                }
                '#' => {
                    let _ = chars.next();
                    let name = take_identifier(&mut chars);
                    if name.is_empty() {
                        return Err(InflateError::InvalidSelector(input.to_string()));
                    }
                    parts.push(SimpleSelector::Id(name));
                }
                '.' => {
                    let _ = chars.next();
                    let name = take_identifier(&mut chars);
                    if name.is_empty() {
                        return Err(InflateError::InvalidSelector(input.to_string()));
                    }
                    parts.push(SimpleSelector::Class(name));
                }
                c if is_identifier_char(c) => {
                    let name = take_identifier(&mut chars);
                    parts.push(SimpleSelector::Type(name));
                }
                _ => return Err(InflateError::InvalidSelector(input.to_string())),
            }
        }

        Ok(Selector { parts })
    }

    /// Whether every part of this selector matches `element`.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        self.parts.iter().all(|part| part.matches(element))
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_identifier(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if is_identifier_char(c) {
            name.push(c);
            let _ = chars.next();
        } else {
            break;
        }
    }
    name
}

/// An ordered set of matched elements, the unit the entry points operate
/// on and hand back for chaining.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: Vec<NodeId>,
}

impl Selection {
    /// Wrap an ordered list of element ids.
    #[must_use]
    pub fn new(ids: Vec<NodeId>) -> Self {
        Selection { ids }
    }

    /// The matched element ids, in tree order.
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Iterate over the matched element ids.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.ids.iter()
    }

    /// The number of matched elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing matched. Entry points treat this as a no-op, never
    /// an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'sel> IntoIterator for &'sel Selection {
    type Item = &'sel NodeId;
    type IntoIter = std::slice::Iter<'sel, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

//! Style keywords and edge sizes consumed by the resizing algorithms.
//!
//! Only the properties that decide flow participation and box-model
//! overhead are modeled: `position`, `display`, `float`, and the three
//! vertical edge bands (padding, border, margin).

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Position {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties." The box is
    /// removed from the normal flow entirely.
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout Module Level 3 § 3.2](https://www.w3.org/TR/css-position-3/#sticky-position)
    ///
    /// Positioned like a relative box, offset against the nearest
    /// scrolling ancestor. In flow.
    Sticky,
}

impl Position {
    /// Whether a box with this position is laid out by the absolute model
    /// and therefore takes no space in normal flow.
    ///
    /// `fixed` is included with `absolute`: "the box's position is
    /// calculated according to the 'absolute' model".
    #[must_use]
    pub fn is_absolutely_positioned(self) -> bool {
        matches!(self, Position::Absolute | Position::Fixed)
    }
}

/// [CSS Display Module Level 3 § 2](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// The subset of display values a height-resizing pass distinguishes:
/// `none` removes the box from layout entirely; everything else occupies
/// flow space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Display {
    /// "The element generates a block-level box."
    #[default]
    Block,
    /// "The element generates one or more inline-level boxes."
    Inline,
    /// An inline-level block container.
    InlineBlock,
    /// "The element and its descendants generate no boxes or text runs."
    None,
}

/// [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats)
///
/// "A float is a box that is shifted to the left or right on the current
/// line." A non-floated box is represented as `Option::<FloatSide>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FloatSide {
    /// "The element generates a block box that is floated to the left."
    Left,
    /// "The element generates a block box that is floated to the right."
    Right,
}

/// Edge sizes for padding, border, or margin.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSizes {
    /// Top edge size.
    #[serde(default)]
    pub top: f64,
    /// Right edge size.
    #[serde(default)]
    pub right: f64,
    /// Bottom edge size.
    #[serde(default)]
    pub bottom: f64,
    /// Left edge size.
    #[serde(default)]
    pub left: f64,
}

impl EdgeSizes {
    /// The vertical extent contributed by this band (top + bottom).
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

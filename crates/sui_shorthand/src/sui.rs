//! Declared value lists from the CSS framework's naming convention.

use sui_contract::PropValue;

use crate::numeral;

/// Named colors.
pub const COLORS: &[&str] = &[
    "red", "orange", "yellow", "olive", "green", "teal", "blue", "violet", "purple", "pink",
    "brown", "grey", "black",
];

/// Float directions.
pub const FLOATS: &[&str] = &["left", "right"];

/// Size scale.
pub const SIZES: &[&str] = &[
    "mini", "tiny", "small", "medium", "large", "big", "huge", "massive",
];

/// Horizontal text alignments.
pub const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justified"];

/// Vertical alignments.
pub const VERTICAL_ALIGNMENTS: &[&str] = &["bottom", "middle", "top"];

/// Width spellings (numbers, numeric strings and words).
pub fn widths() -> Vec<PropValue> {
    numeral::widths()
}

//! Line metadata.

use super::LineId;

/// Route metadata, fetched with every journey.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,
    /// Public line number, e.g. "C".
    pub number: String,
    pub background_color: String,
    pub text_color: String,
    /// Transport mode pictogram markup.
    pub picto_svg: Option<String>,
    /// Line number glyph markup.
    pub number_shape_svg: Option<String>,
    /// Provider ranking; higher lines are more prominent.
    pub importance: i32,
}

use compact_str::CompactString;

use super::style::Style;

/// One character cell of the grid: a single grapheme cluster plus its
/// style. A wide glyph's cell is followed by styled blanks covering its
/// extra columns; the canvas maintains that pairing when drawing text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tixel {
    pub symbol: CompactString,
    pub style: Style,
}

impl Tixel {
    pub fn new(ch: char, style: Style) -> Self {
        let mut symbol = CompactString::default();
        symbol.push(ch);
        Self { symbol, style }
    }

    /// A space carrying `style`, used to fill regions and to pad the
    /// continuation columns of wide glyphs.
    pub fn blank(style: Style) -> Self {
        Self::new(' ', style)
    }
}

impl Default for Tixel {
    fn default() -> Self {
        Self::blank(Style::default())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tixel.rs"]
mod tests;

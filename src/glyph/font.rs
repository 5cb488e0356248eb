//! Built-in 5x7 block font.
//!
//! Each glyph is 7 rows of exactly 5 columns. `'#'` marks a set pixel and a space marks an
//! empty one. Lookups fold ASCII lowercase to uppercase. Characters without an entry render
//! as blank space.

/// Glyph width in cells.
pub const GLYPH_WIDTH: usize = 5;
/// Glyph height in cells.
pub const GLYPH_HEIGHT: usize = 7;

/// One character bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    /// Whether the pixel at `(row, col)` is set; out-of-range coordinates are unset.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.as_bytes().get(col))
            .is_some_and(|&b| b == b'#')
    }

    /// `(row, col)` of every set pixel, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            (0..GLYPH_WIDTH)
                .filter(move |&col| self.is_set(row, col))
                .map(move |col| (row, col))
        })
    }
}

/// Width/height of a glyph cell plus the blank columns between glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GlyphMetrics {
    /// Glyph width in cells.
    pub width: usize,
    /// Glyph height in cells.
    pub height: usize,
    /// Blank columns between adjacent glyphs.
    pub spacing: usize,
}

impl GlyphMetrics {
    /// Metrics of the built-in 5x7 font.
    pub fn builtin(spacing: usize) -> Self {
        Self {
            width: GLYPH_WIDTH,
            height: GLYPH_HEIGHT,
            spacing,
        }
    }

    /// Rendered width of `count` glyphs laid out left to right.
    pub fn run_width(self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        count * self.width + (count - 1) * self.spacing
    }

    /// Cursor step from one glyph to the next.
    pub fn advance(self) -> usize {
        self.width + self.spacing
    }
}

/// Return the bitmap for `ch`, or `None` if the font has no such character.
pub fn glyph(ch: char) -> Option<Glyph> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [" ### ", "#   #", "#   #", "#####", "#   #", "#   #", "#   #"],
        'B' => ["#### ", "#   #", "#   #", "#### ", "#   #", "#   #", "#### "],
        'C' => [" ### ", "#   #", "#    ", "#    ", "#    ", "#   #", " ### "],
        'D' => ["###  ", "#  # ", "#   #", "#   #", "#   #", "#  # ", "###  "],
        'E' => ["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#    "],
        'G' => [" ### ", "#   #", "#    ", "# ###", "#   #", "#   #", " ### "],
        'H' => ["#   #", "#   #", "#   #", "#####", "#   #", "#   #", "#   #"],
        'I' => [" ### ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", " ### "],
        'J' => ["  ###", "   # ", "   # ", "   # ", "   # ", "#  # ", " ##  "],
        'K' => ["#   #", "#  # ", "# #  ", "##   ", "# #  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "# # #", "#   #", "#   #", "#   #"],
        'N' => ["#   #", "#   #", "##  #", "# # #", "#  ##", "#   #", "#   #"],
        'O' => [" ### ", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "],
        'P' => ["#### ", "#   #", "#   #", "#### ", "#    ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "#   #", "#   #", "# # #", "#  # ", " ## #"],
        'R' => ["#### ", "#   #", "#   #", "#### ", "# #  ", "#  # ", "#   #"],
        'S' => [" ####", "#    ", "#    ", " ### ", "    #", "    #", "#### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "#   #", "# # #", "# # #", "# # #", " # # "],
        'X' => ["#   #", "#   #", " # # ", "  #  ", " # # ", "#   #", "#   #"],
        'Y' => ["#   #", "#   #", " # # ", "  #  ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "    #", "   # ", "  #  ", " #   ", "#    ", "#####"],

        '0' => [" ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### "],
        '1' => ["  #  ", " ##  ", "  #  ", "  #  ", "  #  ", "  #  ", " ### "],
        '2' => [" ### ", "#   #", "    #", "   # ", "  #  ", " #   ", "#####"],
        '3' => ["#####", "   # ", "  #  ", "   # ", "    #", "#   #", " ### "],
        '4' => ["   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # "],
        '5' => ["#####", "#    ", "#### ", "    #", "    #", "#   #", " ### "],
        '6' => ["  ## ", " #   ", "#    ", "#### ", "#   #", "#   #", " ### "],
        '7' => ["#####", "    #", "   # ", "  #  ", " #   ", " #   ", " #   "],
        '8' => [" ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### "],
        '9' => [" ### ", "#   #", "#   #", " ####", "    #", "   # ", " ##  "],

        ' ' => ["     ", "     ", "     ", "     ", "     ", "     ", "     "],
        '-' => ["     ", "     ", "     ", "#####", "     ", "     ", "     "],
        '.' => ["     ", "     ", "     ", "     ", "     ", " ##  ", " ##  "],
        '!' => ["  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "     ", "  #  "],
        _ => return None,
    };
    Some(Glyph { rows })
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/font.rs"]
mod tests;

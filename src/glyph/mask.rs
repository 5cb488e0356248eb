use crate::foundation::core::{CellGrid, GridSize};
use crate::foundation::math::floor_div;
use crate::glyph::font::{GlyphMetrics, glyph};

/// `true` where a glyph pixel of the message is rendered.
pub type TextMask = CellGrid<bool>;

/// Stamp `message` onto a `size` grid, centered horizontally and vertically.
///
/// Centering uses floor division, so an odd remainder leaves the extra column/row on the
/// right/bottom. Pixels that fall outside the grid are dropped, and characters without a
/// glyph leave a blank slot.
pub fn build_text_mask(message: &str, size: GridSize, metrics: GlyphMetrics) -> TextMask {
    let mut mask = CellGrid::filled(size, false);

    let count = message.chars().count();
    let total_w = metrics.run_width(count) as i64;
    let start_x = floor_div(size.cols as i64 - total_w, 2);
    let start_y = floor_div(size.rows as i64 - metrics.height as i64, 2);

    let mut x = start_x;
    for ch in message.chars() {
        if let Some(g) = glyph(ch) {
            for (r, c) in g.pixels() {
                if r >= metrics.height || c >= metrics.width {
                    continue;
                }
                if let Some(cell) = size.cell_at(start_y + r as i64, x + c as i64) {
                    mask.set(cell, true);
                }
            }
        }
        x += metrics.advance() as i64;
    }

    mask
}

impl TextMask {
    /// Number of cells covered by the message.
    pub fn text_cell_count(&self) -> usize {
        self.iter().filter(|(_, set)| **set).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/mask.rs"]
mod tests;

use crate::config::Palette;
use crate::foundation::color::Color;
use crate::foundation::core::{Cell, CellGrid};
use crate::glyph::mask::TextMask;

const COL_MIX: usize = 131;
const ROW_MIX: usize = 29;

/// Index into the dot palette for a non-text cell. `palette_len` must be non-zero.
pub fn dot_index(cell: Cell, palette_len: usize) -> usize {
    (cell.col * COL_MIX + cell.row * ROW_MIX) % palette_len
}

/// Display color of `cell` before it is eaten.
///
/// Pure in its inputs: the timeline refers to these exact values when it builds transitions.
pub fn cell_color(cell: Cell, mask: &TextMask, palette: &Palette) -> Color {
    if *mask.get(cell) {
        return palette.text;
    }
    palette.dots[dot_index(cell, palette.dots.len())]
}

/// Base color of every cell, computed once per run.
pub fn build_color_map(mask: &TextMask, palette: &Palette) -> CellGrid<Color> {
    CellGrid::from_fn(mask.size(), |cell| cell_color(cell, mask, palette))
}

#[cfg(test)]
#[path = "../../tests/unit/grid/color.rs"]
mod tests;

use crate::foundation::core::{Cell, CellGrid, GridSize};
use crate::glyph::mask::TextMask;

/// How cells inside each partition are sequenced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Ascending `row + col`, ties in scan order.
    #[default]
    Diagonal,
    /// Row by row; even rows left to right, odd rows right to left.
    Serpentine,
}

impl OrderPolicy {
    /// Every cell of `size`, sequenced by this policy.
    fn sequence(self, size: GridSize) -> Vec<Cell> {
        match self {
            Self::Diagonal => {
                let mut cells: Vec<Cell> = size.cells().collect();
                // `sort_by_key` is stable, so equal ranks keep scan order.
                cells.sort_by_key(|c| c.diagonal());
                cells
            }
            Self::Serpentine => (0..size.rows)
                .flat_map(|row| {
                    (0..size.cols).map(move |i| {
                        let col = if row % 2 == 0 { i } else { size.cols - 1 - i };
                        Cell::new(row, col)
                    })
                })
                .collect(),
        }
    }
}

/// Order in which cells are eaten: every background cell, then every text cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalOrder {
    cells: Vec<Cell>,
    background_len: usize,
}

impl TraversalOrder {
    /// Every cell, in eating order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the order.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` when the order visits no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Background cells, eaten first.
    pub fn background(&self) -> &[Cell] {
        &self.cells[..self.background_len]
    }

    /// Message cells, eaten last.
    pub fn text(&self) -> &[Cell] {
        &self.cells[self.background_len..]
    }

    /// Position of each cell in the order; `None` for cells the order never visits.
    pub fn ranks(&self, size: GridSize) -> CellGrid<Option<usize>> {
        let mut ranks = CellGrid::filled(size, None);
        for (i, &cell) in self.cells.iter().enumerate() {
            if size.contains(cell) {
                ranks.set(cell, Some(i));
            }
        }
        ranks
    }
}

/// Build the eat order for `mask`.
///
/// Both partitions inherit the policy's sequence, so each is internally ordered by it. An
/// empty mask degenerates to one full-grid pass.
pub fn build_traversal_order(mask: &TextMask, policy: OrderPolicy) -> TraversalOrder {
    let (background, text): (Vec<Cell>, Vec<Cell>) = policy
        .sequence(mask.size())
        .into_iter()
        .partition(|&cell| !*mask.get(cell));

    let background_len = background.len();
    let mut cells = background;
    cells.extend(text);

    tracing::debug!(
        ?policy,
        background = background_len,
        text = cells.len() - background_len,
        "built traversal order"
    );

    TraversalOrder {
        cells,
        background_len,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/order.rs"]
mod tests;

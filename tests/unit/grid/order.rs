use std::collections::HashSet;

use super::*;
use crate::glyph::font::GlyphMetrics;
use crate::glyph::mask::build_text_mask;

fn grid(cols: usize, rows: usize) -> GridSize {
    GridSize::new(cols, rows).unwrap()
}

fn assert_partitioned_permutation(order: &TraversalOrder, mask: &TextMask) {
    let size = mask.size();
    assert_eq!(order.len(), size.len());
    let unique: HashSet<Cell> = order.cells().iter().copied().collect();
    assert_eq!(unique.len(), size.len());
    assert!(unique.iter().all(|&c| size.contains(c)));

    let first_text = order
        .cells()
        .iter()
        .position(|&c| *mask.get(c))
        .unwrap_or(order.len());
    assert!(order.cells()[first_text..].iter().all(|&c| *mask.get(c)));
    assert_eq!(first_text, order.background().len());
}

#[test]
fn both_policies_yield_background_first_permutations() {
    let mask = build_text_mask("BYDOLOR", grid(52, 12), GlyphMetrics::builtin(2));
    for policy in [OrderPolicy::Diagonal, OrderPolicy::Serpentine] {
        let order = build_traversal_order(&mask, policy);
        assert_partitioned_permutation(&order, &mask);
        assert_eq!(order.text().len(), 107);
        assert_eq!(order.background().len(), 624 - 107);
    }
}

#[test]
fn diagonal_is_stable_by_rank() {
    let mask = CellGrid::filled(grid(3, 2), false);
    let order = build_traversal_order(&mask, OrderPolicy::Diagonal);
    let got: Vec<_> = order.cells().iter().map(|c| (c.row, c.col)).collect();
    assert_eq!(got, vec![(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (1, 2)]);
}

#[test]
fn serpentine_alternates_direction() {
    let mask = CellGrid::filled(grid(3, 3), false);
    let order = build_traversal_order(&mask, OrderPolicy::Serpentine);
    let got: Vec<_> = order.cells().iter().map(|c| (c.row, c.col)).collect();
    assert_eq!(
        got,
        vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2)
        ]
    );
}

#[test]
fn text_partition_keeps_policy_order() {
    let size = grid(4, 2);
    let mut mask = CellGrid::filled(size, false);
    mask.set(Cell::new(0, 3), true);
    mask.set(Cell::new(1, 0), true);
    mask.set(Cell::new(1, 3), true);

    let diag = build_traversal_order(&mask, OrderPolicy::Diagonal);
    assert_partitioned_permutation(&diag, &mask);
    assert_eq!(
        diag.text(),
        &[Cell::new(1, 0), Cell::new(0, 3), Cell::new(1, 3)]
    );

    let snake = build_traversal_order(&mask, OrderPolicy::Serpentine);
    assert_partitioned_permutation(&snake, &mask);
    assert_eq!(
        snake.text(),
        &[Cell::new(0, 3), Cell::new(1, 3), Cell::new(1, 0)]
    );
}

#[test]
fn empty_mask_is_single_pass() {
    let mask = build_text_mask("~~", grid(6, 4), GlyphMetrics::builtin(2));
    let order = build_traversal_order(&mask, OrderPolicy::Diagonal);
    assert!(order.text().is_empty());
    assert_eq!(order.background().len(), 24);
}

#[test]
fn ranks_invert_the_order() {
    let size = grid(5, 3);
    let mask = CellGrid::filled(size, false);
    let order = build_traversal_order(&mask, OrderPolicy::Serpentine);
    let ranks = order.ranks(size);
    for (i, &cell) in order.cells().iter().enumerate() {
        assert_eq!(*ranks.get(cell), Some(i));
    }
}

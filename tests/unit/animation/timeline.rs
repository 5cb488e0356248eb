use serde_json::json;

use super::*;
use crate::config::{LoopMode, PatrolConfig, Variant};
use crate::foundation::core::GridSize;
use crate::glyph::mask::build_text_mask;
use crate::grid::color::build_color_map;
use crate::grid::order::{OrderPolicy, build_traversal_order};

fn encode(cfg: &SnakeConfig) -> (Timeline, TraversalOrder, TextMask) {
    let mask = build_text_mask(&cfg.text.message, cfg.grid, cfg.text.metrics());
    let colors = build_color_map(&mask, &cfg.palette);
    let order = build_traversal_order(&mask, cfg.order);
    let timeline = encode_timeline(cfg, &order, &colors, &mask);
    (timeline, order, mask)
}

fn begin_offset(t: &ColorTransition) -> u64 {
    match t.begin.triggers() {
        [Trigger::AfterBegin { offset_ms, .. }] => *offset_ms,
        other => panic!("unexpected begin {other:?}"),
    }
}

#[test]
fn reference_grid_total_duration() {
    let cfg = Variant::Diagonal.config();
    let (timeline, _, _) = encode(&cfg);
    assert_eq!(timeline.cells.len(), 624);
    assert_eq!(timeline.total_ms, 69390);
    assert_eq!(timeline.anchor(AnchorId::Eat).unwrap().dur_ms, 69390);
    assert_eq!(timeline.progress.as_ref().unwrap().dur_ms, 69390);
}

#[test]
fn cell_offsets_follow_traversal_rank() {
    let cfg = Variant::Diagonal.config();
    let (timeline, order, _) = encode(&cfg);

    for track in &timeline.cells {
        let rank = track.rank.unwrap();
        assert_eq!(order.cells()[rank], track.cell);
        assert_eq!(track.transitions.len(), 3);

        let eat = &track.transitions[1];
        assert_eq!(eat.from, Some(track.base));
        assert_eq!(eat.to, cfg.palette.snake);
        assert_eq!(begin_offset(eat), rank as u64 * 110);
        assert_eq!(eat.dur_ms, 550);
        assert!(eat.freeze);

        let settle = &track.transitions[2];
        assert_eq!(settle.from, Some(cfg.palette.snake));
        assert_eq!(settle.to, cfg.palette.empty);
        assert_eq!(begin_offset(settle), rank as u64 * 110 + 550);
        assert_eq!(settle.dur_ms, 110);
    }
}

#[test]
fn text_cells_are_eaten_last() {
    let cfg = Variant::Serpentine.config();
    let (timeline, _, mask) = encode(&cfg);
    let last_background = timeline
        .cells
        .iter()
        .filter(|t| !*mask.get(t.cell))
        .map(|t| t.rank.unwrap())
        .max()
        .unwrap();
    let first_text = timeline
        .cells
        .iter()
        .filter(|t| *mask.get(t.cell))
        .map(|t| t.rank.unwrap())
        .min()
        .unwrap();
    assert!(last_background < first_text);
}

#[test]
fn loop_modes_shape_the_eat_anchor() {
    let (once, _, _) = encode(&Variant::TwoPhase.config());
    assert_eq!(
        once.anchor(AnchorId::Eat).unwrap().begin,
        Begin::at(0),
    );

    let (restart, _, _) = encode(&Variant::Diagonal.config());
    assert_eq!(
        restart.anchor(AnchorId::Eat).unwrap().begin.triggers(),
        &[
            Trigger::At { ms: 0 },
            Trigger::AtEnd {
                anchor: AnchorId::Eat
            }
        ]
    );
    assert!(restart.anchor(AnchorId::Patrol).is_none());
    assert!(restart.patrol.is_none());
}

#[test]
fn restart_puts_base_colors_back_when_eating_begins() {
    let cfg = Variant::Serpentine.config();
    let (timeline, _, _) = encode(&cfg);

    for track in &timeline.cells {
        let reset = &track.transitions[0];
        assert_eq!(reset.from, None);
        assert_eq!(reset.to, track.base);
        assert_eq!(reset.begin, Begin::after(AnchorId::Eat, 0));
        assert_eq!(reset.dur_ms, 1);
        assert!(reset.freeze);
    }

    // A single pass needs no reset: the first transition is the eat itself.
    let (once, _, _) = encode(&Variant::TwoPhase.config());
    assert!(once.cells.iter().all(|t| t.transitions[0].from == Some(t.base)));
    assert!(once.patrol.unwrap().hide.is_none());
}

#[test]
fn restart_with_patrol_waits_for_one_round_trip() {
    let mut cfg = Variant::TwoPhase.config();
    cfg.looping = LoopMode::Restart;
    let (timeline, _, _) = encode(&cfg);

    assert_eq!(
        timeline.anchor(AnchorId::Eat).unwrap().begin.triggers(),
        &[
            Trigger::At { ms: 0 },
            Trigger::AtEnd {
                anchor: AnchorId::Patrol
            }
        ]
    );
    assert_eq!(
        timeline.anchor(AnchorId::Patrol).unwrap().begin,
        Begin::at_end(AnchorId::Eat)
    );
    let track = timeline.patrol.unwrap();
    assert_eq!(track.hide, Some(Begin::after(AnchorId::Eat, 0)));
}

#[test]
fn patrol_adds_anchor_reset_and_track() {
    let cfg = Variant::TwoPhase.config();
    let (timeline, _, mask) = encode(&cfg);

    let patrol_anchor = timeline.anchor(AnchorId::Patrol).unwrap();
    assert_eq!(patrol_anchor.dur_ms, 6000);
    assert_eq!(
        patrol_anchor.begin.triggers(),
        &[
            Trigger::AtEnd {
                anchor: AnchorId::Eat
            },
            Trigger::AtEnd {
                anchor: AnchorId::Patrol
            }
        ]
    );

    for track in &timeline.cells {
        let reset = &track.transitions[2];
        assert_eq!(reset.from, None);
        assert_eq!(reset.dur_ms, 1);
        let want = if *mask.get(track.cell) {
            cfg.palette.text
        } else {
            cfg.palette.empty
        };
        assert_eq!(reset.to, want);
    }

    let track = timeline.patrol.unwrap();
    assert_eq!(track.row, 11);
    assert_eq!((track.from_col, track.to_col), (0, 47));
    assert_eq!(track.reveal, Begin::at_end(AnchorId::Eat));
    assert_eq!(track.begin, Begin::after(AnchorId::Patrol, 0));
    assert_eq!(track.key_times, [0.0, 0.5, 1.0]);
}

#[test]
fn zero_step_still_settles_over_one_ms() {
    let mut cfg = Variant::Diagonal.config();
    cfg.timing.step_ms = 0;
    cfg.progress_bar = false;
    let (timeline, _, _) = encode(&cfg);
    assert!(timeline.progress.is_none());
    assert_eq!(timeline.total_ms, 200);
    assert!(timeline.cells.iter().all(|t| t.transitions[2].dur_ms == 1));
}

#[test]
fn tiny_timeline_snapshot() {
    let mut cfg = Variant::TwoPhase.config();
    cfg.grid = GridSize::new(2, 1).unwrap();
    cfg.text.message = String::new();
    cfg.order = OrderPolicy::Serpentine;
    cfg.patrol = Some(PatrolConfig {
        length: 1,
        period_ms: 400,
    });
    let (timeline, _, _) = encode(&cfg);

    let v = serde_json::to_value(&timeline.cells[1]).unwrap();
    assert_eq!(
        v,
        json!({
            "cell": { "row": 0, "col": 1 },
            "base": "#39d353",
            "rank": 1,
            "transitions": [
                {
                    "from": "#39d353",
                    "to": "#7e22ce",
                    "begin": [{ "after_begin": { "anchor": "eat", "offset_ms": 50 } }],
                    "dur_ms": 250,
                    "freeze": true
                },
                {
                    "from": "#7e22ce",
                    "to": "#0b1220",
                    "begin": [{ "after_begin": { "anchor": "eat", "offset_ms": 300 } }],
                    "dur_ms": 50,
                    "freeze": true
                },
                {
                    "from": null,
                    "to": "#0b1220",
                    "begin": [{ "after_begin": { "anchor": "patrol", "offset_ms": 0 } }],
                    "dur_ms": 1,
                    "freeze": true
                }
            ]
        })
    );
    assert_eq!(timeline.total_ms, 2 * 50 + 250 + 200);
}

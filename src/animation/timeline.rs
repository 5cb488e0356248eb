//! Declarative animation schedule.
//!
//! A [`Timeline`] is plain data derived from a traversal order and the timing constants. It
//! knows nothing about SVG; `render::svg` turns it into SMIL elements.

use crate::config::{LoopMode, SnakeConfig};
use crate::foundation::color::Color;
use crate::foundation::core::{Cell, CellGrid};
use crate::glyph::mask::TextMask;
use crate::grid::order::TraversalOrder;

/// Named timing anchors other animations synchronize to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorId {
    /// The eating pass.
    Eat,
    /// The looping patrol phase that follows it.
    Patrol,
}

impl AnchorId {
    /// Element id used in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eat => "eat",
            Self::Patrol => "patrol",
        }
    }
}

/// One begin condition. Several triggers on one animation mean "whichever fires".
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Absolute document time.
    At {
        /// Milliseconds from document start.
        ms: u64,
    },
    /// `offset_ms` after the anchor begins.
    AfterBegin {
        /// Anchor to follow.
        anchor: AnchorId,
        /// Delay after the anchor's begin event.
        offset_ms: u64,
    },
    /// When the anchor ends.
    AtEnd {
        /// Anchor to follow.
        anchor: AnchorId,
    },
}

/// Begin list of one animation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Begin(pub Vec<Trigger>);

impl Begin {
    /// Fire at an absolute time.
    pub fn at(ms: u64) -> Self {
        Self(vec![Trigger::At { ms }])
    }

    /// Fire `offset_ms` after `anchor` begins.
    pub fn after(anchor: AnchorId, offset_ms: u64) -> Self {
        Self(vec![Trigger::AfterBegin { anchor, offset_ms }])
    }

    /// Fire when `anchor` ends.
    pub fn at_end(anchor: AnchorId) -> Self {
        Self(vec![Trigger::AtEnd { anchor }])
    }

    /// Add an alternative trigger.
    pub fn or(mut self, other: Trigger) -> Self {
        self.0.push(other);
        self
    }

    /// Triggers in document order.
    pub fn triggers(&self) -> &[Trigger] {
        &self.0
    }
}

/// Invisible clock whose begin/end events drive everything else.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AnchorTrack {
    /// Anchor name.
    pub id: AnchorId,
    /// Start condition.
    pub begin: Begin,
    /// Clock length; its end event fires after this long.
    pub dur_ms: u64,
}

/// Animated fill change. `from == None` animates from the current value.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColorTransition {
    /// Start color, or `None` for the current value.
    pub from: Option<Color>,
    /// End color.
    pub to: Color,
    /// Start condition.
    pub begin: Begin,
    /// Transition length.
    pub dur_ms: u64,
    /// Hold the final value after the transition ends.
    pub freeze: bool,
}

/// Fill schedule of one grid cell.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CellTrack {
    /// Cell address.
    pub cell: Cell,
    /// Color before the cell is eaten.
    pub base: Color,
    /// Position in the traversal order.
    pub rank: Option<usize>,
    /// Fill changes, in document order.
    pub transitions: Vec<ColorTransition>,
}

/// Progress indicator; extent runs from 0 to 1 of the track width.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProgressTrack {
    /// When the fill starts growing.
    pub begin: Begin,
    /// Time to reach full width.
    pub dur_ms: u64,
}

/// Block train that ping-pongs along one row.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PatrolTrack {
    /// Grid row the train runs on.
    pub row: usize,
    /// Train length in cells.
    pub length: usize,
    /// Leftmost column of the train at rest.
    pub from_col: usize,
    /// Leftmost column at the far end of the trip.
    pub to_col: usize,
    /// When the train becomes visible.
    pub reveal: Begin,
    /// When the train hides again, for passes that restart.
    pub hide: Option<Begin>,
    /// Start of each round trip.
    pub begin: Begin,
    /// One round trip.
    pub period_ms: u64,
    /// Keyframe fractions, mapped to `from_col`, `to_col`, `from_col`.
    pub key_times: [f64; 3],
}

/// Everything the document animates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    /// Timing anchors, eat first.
    pub anchors: Vec<AnchorTrack>,
    /// One track per cell, in scan order.
    pub cells: Vec<CellTrack>,
    /// Progress bar, when enabled.
    pub progress: Option<ProgressTrack>,
    /// Patrol train, when configured.
    pub patrol: Option<PatrolTrack>,
    /// Length of the eating pass.
    pub total_ms: u64,
}

impl Timeline {
    /// Look up an anchor by id.
    pub fn anchor(&self, id: AnchorId) -> Option<&AnchorTrack> {
        self.anchors.iter().find(|a| a.id == id)
    }
}

/// Encode the full schedule for one run.
#[tracing::instrument(skip_all, fields(cells = order.len()))]
pub fn encode_timeline(
    cfg: &SnakeConfig,
    order: &TraversalOrder,
    colors: &CellGrid<Color>,
    mask: &TextMask,
) -> Timeline {
    let timing = cfg.timing;
    let highlight_ms = timing.highlight_ms();
    let total_ms = timing.total_ms(order.len());
    let ranks = order.ranks(mask.size());

    // A restarting pass with a patrol waits for one round trip before eating again.
    let restart_after = if cfg.patrol.is_some() {
        AnchorId::Patrol
    } else {
        AnchorId::Eat
    };
    let mut anchors = vec![AnchorTrack {
        id: AnchorId::Eat,
        begin: match cfg.looping {
            LoopMode::Once => Begin::at(0),
            LoopMode::Restart => Begin::at(0).or(Trigger::AtEnd {
                anchor: restart_after,
            }),
        },
        dur_ms: total_ms,
    }];
    if let Some(patrol) = cfg.patrol {
        anchors.push(AnchorTrack {
            id: AnchorId::Patrol,
            begin: match cfg.looping {
                LoopMode::Once => Begin::at_end(AnchorId::Eat).or(Trigger::AtEnd {
                    anchor: AnchorId::Patrol,
                }),
                LoopMode::Restart => Begin::at_end(AnchorId::Eat),
            },
            dur_ms: patrol.period_ms,
        });
    }

    let cells = colors
        .iter()
        .map(|(cell, &base)| {
            let rank = *ranks.get(cell);
            let mut transitions = Vec::with_capacity(4);

            // A restarted pass starts again from the base colors.
            if cfg.looping == LoopMode::Restart {
                transitions.push(ColorTransition {
                    from: None,
                    to: base,
                    begin: Begin::after(AnchorId::Eat, 0),
                    dur_ms: 1,
                    freeze: true,
                });
            }
            // Unvisited cells keep their base color.
            if let Some(rank) = rank {
                let begin_ms = rank as u64 * timing.step_ms;
                transitions.push(ColorTransition {
                    from: Some(base),
                    to: cfg.palette.snake,
                    begin: Begin::after(AnchorId::Eat, begin_ms),
                    dur_ms: highlight_ms,
                    freeze: true,
                });
                transitions.push(ColorTransition {
                    from: Some(cfg.palette.snake),
                    to: cfg.palette.empty,
                    begin: Begin::after(AnchorId::Eat, begin_ms + highlight_ms),
                    dur_ms: timing.settle_ms(),
                    freeze: true,
                });
            }
            if cfg.patrol.is_some() {
                let settled = if *mask.get(cell) {
                    cfg.palette.text
                } else {
                    cfg.palette.empty
                };
                transitions.push(ColorTransition {
                    from: None,
                    to: settled,
                    begin: Begin::after(AnchorId::Patrol, 0),
                    dur_ms: 1,
                    freeze: true,
                });
            }

            CellTrack {
                cell,
                base,
                rank,
                transitions,
            }
        })
        .collect();

    let progress = cfg.progress_bar.then(|| ProgressTrack {
        begin: Begin::after(AnchorId::Eat, 0),
        dur_ms: total_ms,
    });

    let patrol = cfg.patrol.map(|p| PatrolTrack {
        row: cfg.grid.rows.saturating_sub(1),
        length: p.length,
        from_col: 0,
        to_col: cfg.grid.cols.saturating_sub(p.length),
        reveal: Begin::at_end(AnchorId::Eat),
        hide: (cfg.looping == LoopMode::Restart).then(|| Begin::after(AnchorId::Eat, 0)),
        begin: Begin::after(AnchorId::Patrol, 0),
        period_ms: p.period_ms,
        key_times: [0.0, 0.5, 1.0],
    });

    tracing::debug!(total_ms, highlight_ms, "encoded timeline");

    Timeline {
        anchors,
        cells,
        progress,
        patrol,
        total_ms,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;

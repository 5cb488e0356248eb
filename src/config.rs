//! Generator configuration and the built-in presets.
//!
//! Every knob of a run lives in one immutable [`SnakeConfig`]. The presets in [`Variant`] are
//! the only configurations the binary can select, so all parameters stay compile-time
//! constants.

use crate::foundation::color::Color;
use crate::foundation::core::GridSize;
use crate::foundation::error::{SnakeError, SnakeResult};
use crate::glyph::font::GlyphMetrics;
use crate::grid::order::OrderPolicy;

/// Milliseconds appended after the last highlight before the run is considered finished.
pub const TRAILING_MS: u64 = 200;

/// All parameters of one generation run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnakeConfig {
    /// Grid dimensions in cells.
    pub grid: GridSize,
    /// Pixel geometry.
    pub geometry: CellGeometry,
    /// Embedded message.
    pub text: TextConfig,
    /// Step and highlight timing.
    pub timing: TimingConfig,
    /// Colors.
    pub palette: Palette,
    /// Eating order inside each partition.
    pub order: OrderPolicy,
    /// Whether the pass restarts.
    pub looping: LoopMode,
    /// Draw the progress bar in the footer.
    pub progress_bar: bool,
    /// Block train shown after the pass.
    pub patrol: Option<PatrolConfig>,
}

/// Pixel geometry of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellGeometry {
    /// Cell edge length.
    pub cell: u32,
    /// Space between neighbouring cells.
    pub gap: u32,
    /// Canvas padding around the grid.
    pub margin: u32,
    /// Corner radius of each cell.
    pub corner_radius: u32,
    /// Extra space under the grid that holds the progress bar.
    pub footer: u32,
    /// Progress bar thickness.
    pub bar_height: u32,
}

/// Message stamped onto the grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextConfig {
    /// Text to render; characters without a glyph leave a gap.
    pub message: String,
    /// Blank columns between glyphs.
    pub spacing: usize,
}

impl TextConfig {
    /// Glyph metrics for this spacing.
    pub fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics::builtin(self.spacing)
    }
}

/// Timing constants of the eating pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimingConfig {
    /// Delay between consecutive cells.
    pub step_ms: u64,
    /// Snake length in cells; a cell stays highlighted for `segment_len` steps.
    pub segment_len: u64,
    /// Pause after the last cell settles.
    pub trailing_ms: u64,
}

impl TimingConfig {
    /// How long a cell shows the snake color.
    pub fn highlight_ms(self) -> u64 {
        self.step_ms * self.segment_len
    }

    /// Duration of the settle transition, never shorter than 1 ms.
    pub fn settle_ms(self) -> u64 {
        self.step_ms.max(1)
    }

    /// `steps * step + highlight + trailing`.
    pub fn total_ms(self, steps: usize) -> u64 {
        steps as u64 * self.step_ms + self.highlight_ms() + self.trailing_ms
    }
}

/// Document colors.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Canvas background.
    pub background: Color,
    /// Color a cell settles to once eaten.
    pub empty: Color,
    /// Background dot colors, picked per cell by a coordinate hash.
    pub dots: Vec<Color>,
    /// Message cells.
    pub text: Color,
    /// Snake body and patrol train.
    pub snake: Color,
    /// Progress bar background.
    pub bar_track: Color,
    /// Progress bar fill.
    pub bar_fill: Color,
}

/// Whether the eating pass restarts once it finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Eat once and keep the result.
    #[default]
    Once,
    /// Start over when the pass (and patrol, if any) ends.
    Restart,
}

/// Block train that patrols the bottom row after the eating pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PatrolConfig {
    /// Train length in cells.
    pub length: usize,
    /// One left-right-left round trip.
    pub period_ms: u64,
}

impl SnakeConfig {
    /// Reject configurations the generator cannot render.
    pub fn validate(&self) -> SnakeResult<()> {
        GridSize::new(self.grid.cols, self.grid.rows)?;
        if self.palette.dots.is_empty() {
            return Err(SnakeError::validation("palette needs at least one dot color"));
        }
        if self.geometry.cell == 0 {
            return Err(SnakeError::validation("cell size must be > 0"));
        }
        if self.progress_bar && self.geometry.footer < self.geometry.bar_height {
            return Err(SnakeError::validation(format!(
                "footer ({}) is too short for a {}px progress bar",
                self.geometry.footer, self.geometry.bar_height
            )));
        }
        if let Some(patrol) = self.patrol {
            if patrol.length == 0 || patrol.length > self.grid.cols {
                return Err(SnakeError::validation(format!(
                    "patrol length must be in 1..={}, got {}",
                    self.grid.cols, patrol.length
                )));
            }
            if patrol.period_ms == 0 {
                return Err(SnakeError::validation("patrol period must be > 0"));
            }
        }
        Ok(())
    }
}

/// Built-in presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Fast diagonal eat, then the message stays while a block train patrols the bottom row.
    #[default]
    TwoPhase,
    /// Slow diagonal eat that restarts forever.
    Diagonal,
    /// Slow boustrophedon eat that restarts forever.
    Serpentine,
    /// Warm palette, serpentine eat, then a patrol.
    Ember,
}

impl Variant {
    /// Every preset, default first.
    pub const ALL: [Variant; 4] = [
        Variant::TwoPhase,
        Variant::Diagonal,
        Variant::Serpentine,
        Variant::Ember,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TwoPhase => "two-phase",
            Self::Diagonal => "diagonal",
            Self::Serpentine => "serpentine",
            Self::Ember => "ember",
        }
    }

    /// Configuration of this preset.
    pub fn config(self) -> SnakeConfig {
        match self {
            Self::TwoPhase => SnakeConfig {
                timing: TimingConfig {
                    step_ms: 50,
                    ..base_timing()
                },
                patrol: Some(PatrolConfig {
                    length: 5,
                    period_ms: 6000,
                }),
                ..base_config()
            },
            Self::Diagonal => SnakeConfig {
                looping: LoopMode::Restart,
                ..base_config()
            },
            Self::Serpentine => SnakeConfig {
                order: OrderPolicy::Serpentine,
                looping: LoopMode::Restart,
                palette: Palette {
                    snake: Color::hex(0xf59e0b),
                    ..green_palette()
                },
                ..base_config()
            },
            Self::Ember => SnakeConfig {
                timing: TimingConfig {
                    step_ms: 80,
                    ..base_timing()
                },
                order: OrderPolicy::Serpentine,
                palette: ember_palette(),
                patrol: Some(PatrolConfig {
                    length: 5,
                    period_ms: 7000,
                }),
                ..base_config()
            },
        }
    }
}

fn base_timing() -> TimingConfig {
    TimingConfig {
        step_ms: 110,
        segment_len: 5,
        trailing_ms: TRAILING_MS,
    }
}

fn base_config() -> SnakeConfig {
    SnakeConfig {
        grid: GridSize { cols: 52, rows: 12 },
        geometry: CellGeometry {
            cell: 12,
            gap: 2,
            margin: 16,
            corner_radius: 3,
            footer: 40,
            bar_height: 12,
        },
        text: TextConfig {
            message: "BYDOLOR".to_owned(),
            spacing: 2,
        },
        timing: base_timing(),
        palette: green_palette(),
        order: OrderPolicy::Diagonal,
        looping: LoopMode::Once,
        progress_bar: true,
        patrol: None,
    }
}

fn green_palette() -> Palette {
    Palette {
        background: Color::hex(0x0f172a),
        empty: Color::hex(0x0b1220),
        dots: vec![
            Color::hex(0x0e4429),
            Color::hex(0x006d32),
            Color::hex(0x26a641),
            Color::hex(0x39d353),
        ],
        text: Color::hex(0x003d1f),
        snake: Color::hex(0x7e22ce),
        bar_track: Color::hex(0x134e4a),
        bar_fill: Color::hex(0x10b981),
    }
}

fn ember_palette() -> Palette {
    Palette {
        background: Color::hex(0x1c1917),
        empty: Color::hex(0x0c0a09),
        dots: vec![
            Color::hex(0x7c2d12),
            Color::hex(0xc2410c),
            Color::hex(0xf97316),
            Color::hex(0xfdba74),
        ],
        text: Color::hex(0x431407),
        snake: Color::hex(0x38bdf8),
        bar_track: Color::hex(0x44403c),
        bar_fill: Color::hex(0xfb923c),
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

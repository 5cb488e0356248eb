//! snakegrid renders one animated SVG: a snake eats a dotted grid cell by cell and leaves a
//! pixel-font message behind.
//!
//! # Pipeline overview
//!
//! 1. **Mask**: `message -> TextMask` (which cells belong to the glyphs)
//! 2. **Colors**: `TextMask -> CellGrid<Color>` (pure coordinate hash over a dot palette)
//! 3. **Order**: `TextMask -> TraversalOrder` (background first, message last)
//! 4. **Timeline**: `TraversalOrder -> Timeline` (declarative per-cell transitions and anchors)
//! 5. **Document**: `Timeline -> SvgDocument` (SVG + SMIL, checked with `usvg`)
//!
//! Every run is deterministic: the same [`SnakeConfig`] always yields byte-identical output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod glyph;
mod grid;
mod render;

/// Generator configuration and built-in presets.
pub mod config;
/// End-to-end generation entry points.
pub mod pipeline;

pub use animation::timeline::{
    AnchorId, AnchorTrack, Begin, CellTrack, ColorTransition, PatrolTrack, ProgressTrack,
    Timeline, Trigger, encode_timeline,
};
pub use config::{
    CellGeometry, LoopMode, Palette, PatrolConfig, SnakeConfig, TRAILING_MS, TextConfig,
    TimingConfig, Variant,
};
pub use foundation::color::Color;
pub use foundation::core::{Cell, CellGrid, GridSize};
pub use foundation::error::{SnakeError, SnakeResult};
pub use glyph::font::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, GlyphMetrics, glyph};
pub use glyph::mask::{TextMask, build_text_mask};
pub use grid::color::{build_color_map, cell_color, dot_index};
pub use grid::order::{OrderPolicy, TraversalOrder, build_traversal_order};
pub use pipeline::{Generated, generate, generate_to};
pub use render::layout::GridLayout;
pub use render::sink::{DocumentSink, FileSink, InMemorySink, ensure_parent_dir};
pub use render::svg::{SvgDocument, render_svg, verify_svg};

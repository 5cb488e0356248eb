use crate::{
    animation::timeline::{Timeline, encode_timeline},
    config::SnakeConfig,
    foundation::error::SnakeResult,
    glyph::mask::{TextMask, build_text_mask},
    grid::color::build_color_map,
    grid::order::{TraversalOrder, build_traversal_order},
    render::layout::GridLayout,
    render::sink::DocumentSink,
    render::svg::{SvgDocument, render_svg, verify_svg},
};

/// Everything one run produced, kept for inspection.
#[derive(Clone, Debug)]
pub struct Generated {
    /// Cells covered by the message.
    pub mask: TextMask,
    /// Eating order.
    pub order: TraversalOrder,
    /// Animation schedule.
    pub timeline: Timeline,
    /// Pixel layout.
    pub layout: GridLayout,
    /// Verified SVG output.
    pub document: SvgDocument,
}

/// Run the full pipeline: mask -> colors -> order -> timeline -> document.
#[tracing::instrument(skip(cfg), fields(grid = %format!("{}x{}", cfg.grid.cols, cfg.grid.rows), order = ?cfg.order))]
pub fn generate(cfg: &SnakeConfig) -> SnakeResult<Generated> {
    cfg.validate()?;

    let mask = build_text_mask(&cfg.text.message, cfg.grid, cfg.text.metrics());
    tracing::debug!(text_cells = mask.text_cell_count(), "built text mask");

    let colors = build_color_map(&mask, &cfg.palette);
    let order = build_traversal_order(&mask, cfg.order);
    let timeline = encode_timeline(cfg, &order, &colors, &mask);

    let layout = GridLayout::new(cfg.grid, cfg.geometry);
    let document = render_svg(&timeline, &layout, &cfg.palette);
    verify_svg(&document, &layout)?;

    Ok(Generated {
        mask,
        order,
        timeline,
        layout,
        document,
    })
}

/// [`generate`], then hand the document to `sink`.
pub fn generate_to(cfg: &SnakeConfig, sink: &mut dyn DocumentSink) -> SnakeResult<Generated> {
    let generated = generate(cfg)?;
    sink.write_document(&generated.document)?;
    Ok(generated)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;

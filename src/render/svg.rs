//! SVG/SMIL serialization of a [`Timeline`].

use std::fmt::{self, Write as _};

use crate::animation::timeline::{AnchorTrack, Begin, ColorTransition, Timeline, Trigger};
use crate::config::Palette;
use crate::foundation::core::Cell;
use crate::foundation::error::{SnakeError, SnakeResult};
use crate::foundation::math::Fnv1a64;
use crate::render::layout::GridLayout;

/// Serialized document plus its content fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    source: String,
    fingerprint: u64,
}

impl SvgDocument {
    pub(crate) fn new(source: String) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(source.as_bytes());
        Self {
            fingerprint: h.finish(),
            source,
        }
    }

    /// SVG source text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Take the SVG source text.
    pub fn into_string(self) -> String {
        self.source
    }

    /// FNV-1a 64 of the document bytes.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

struct BeginAttr<'a>(&'a Begin);

impl fmt::Display for BeginAttr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, trigger) in self.0.triggers().iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            match *trigger {
                Trigger::At { ms: 0 } => f.write_str("0s")?,
                Trigger::At { ms } => write!(f, "{ms}ms")?,
                Trigger::AfterBegin {
                    anchor,
                    offset_ms: 0,
                } => write!(f, "{}.begin", anchor.as_str())?,
                Trigger::AfterBegin { anchor, offset_ms } => {
                    write!(f, "{}.begin+{offset_ms}ms", anchor.as_str())?
                }
                Trigger::AtEnd { anchor } => write!(f, "{}.end", anchor.as_str())?,
            }
        }
        Ok(())
    }
}

fn fill_attr(freeze: bool) -> &'static str {
    if freeze { "freeze" } else { "remove" }
}

fn write_anchor(out: &mut String, anchor: &AnchorTrack) -> fmt::Result {
    writeln!(
        out,
        r#"  <rect x="-10" y="-10" width="1" height="1" fill="none" opacity="0"><animate id="{}" attributeName="opacity" from="0" to="0" begin="{}" dur="{}ms"/></rect>"#,
        anchor.id.as_str(),
        BeginAttr(&anchor.begin),
        anchor.dur_ms,
    )
}

fn write_transition(out: &mut String, t: &ColorTransition) -> fmt::Result {
    let values = match t.from {
        Some(from) => format!(r#"values="{from};{}""#, t.to),
        None => format!(r#"to="{}""#, t.to),
    };
    writeln!(
        out,
        r#"    <animate attributeName="fill" {values} begin="{}" dur="{}ms" fill="{}"/>"#,
        BeginAttr(&t.begin),
        t.dur_ms,
        fill_attr(t.freeze),
    )
}

fn write_document(
    out: &mut String,
    timeline: &Timeline,
    layout: &GridLayout,
    palette: &Palette,
) -> fmt::Result {
    let (w, h) = (layout.width, layout.height);
    let radius = layout.geometry.corner_radius;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        palette.background
    )?;

    for anchor in &timeline.anchors {
        write_anchor(out, anchor)?;
    }

    for track in &timeline.cells {
        let r = layout.cell_rect(track.cell);
        writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" ry="{radius}" fill="{}">"#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
            track.base,
        )?;
        for t in &track.transitions {
            write_transition(out, t)?;
        }
        writeln!(out, "  </rect>")?;
    }

    if let Some(progress) = &timeline.progress {
        let bar = layout.progress_rect();
        let rx = bar.height() / 2.0;
        writeln!(out, "  <g>")?;
        writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="{rx}" ry="{rx}" fill="{}"/>"#,
            bar.x0,
            bar.y0,
            bar.width(),
            bar.height(),
            palette.bar_track,
        )?;
        writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="0" height="{}" rx="{rx}" ry="{rx}" fill="{}">"#,
            bar.x0,
            bar.y0,
            bar.height(),
            palette.bar_fill,
        )?;
        writeln!(
            out,
            r#"      <animate attributeName="width" from="0" to="{}" begin="{}" dur="{}ms" fill="freeze"/>"#,
            bar.width(),
            BeginAttr(&progress.begin),
            progress.dur_ms,
        )?;
        writeln!(out, "    </rect>")?;
        writeln!(out, "  </g>")?;
    }

    if let Some(patrol) = &timeline.patrol {
        writeln!(
            out,
            r#"  <g id="patrol-train" opacity="0" transform="translate(0,0)">"#
        )?;
        writeln!(
            out,
            r#"    <animate attributeName="opacity" from="0" to="1" begin="{}" dur="1ms" fill="freeze"/>"#,
            BeginAttr(&patrol.reveal),
        )?;
        if let Some(hide) = &patrol.hide {
            writeln!(
                out,
                r#"    <animate attributeName="opacity" from="1" to="0" begin="{}" dur="1ms" fill="freeze"/>"#,
                BeginAttr(hide),
            )?;
        }
        for i in 0..patrol.length {
            let r = layout.cell_rect(Cell::new(patrol.row, patrol.from_col + i));
            writeln!(
                out,
                r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" ry="{radius}" fill="{}"/>"#,
                r.x0,
                r.y0,
                r.width(),
                r.height(),
                palette.snake,
            )?;
        }
        let dx = layout.col_offset(patrol.from_col, patrol.to_col).x;
        let [k0, k1, k2] = patrol.key_times;
        writeln!(
            out,
            r#"    <animateTransform attributeName="transform" attributeType="XML" type="translate" values="0 0;{dx} 0;0 0" keyTimes="{k0};{k1};{k2}" begin="{}" dur="{}ms" repeatCount="indefinite"/>"#,
            BeginAttr(&patrol.begin),
            patrol.period_ms,
        )?;
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}

/// Serialize `timeline` into a standalone SVG document.
#[tracing::instrument(skip_all, fields(cells = timeline.cells.len()))]
pub fn render_svg(timeline: &Timeline, layout: &GridLayout, palette: &Palette) -> SvgDocument {
    let mut out = String::with_capacity(timeline.cells.len() * 512);
    // Writing into a `String` cannot fail.
    let _ = write_document(&mut out, timeline, layout, palette);
    tracing::debug!(bytes = out.len(), "rendered svg");
    SvgDocument::new(out)
}

/// Check that `doc` parses as SVG and has the expected canvas size.
pub fn verify_svg(doc: &SvgDocument, layout: &GridLayout) -> SnakeResult<()> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(doc.as_str(), &opts)
        .map_err(|e| SnakeError::document(format!("generated svg does not parse: {e}")))?;

    let size = tree.size();
    let (w, h) = (f64::from(size.width()), f64::from(size.height()));
    if (w - layout.width).abs() > 0.5 || (h - layout.height).abs() > 0.5 {
        return Err(SnakeError::document(format!(
            "generated svg is {w}x{h}, expected {}x{}",
            layout.width, layout.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;

use anyhow::Context;
use usvg::tiny_skia_path::PathSegment;

use crate::foundation::{
    core::{Affine, BezPath, Point},
    error::{EpicycleError, EpicycleResult},
};

/// Parse SVG path data (the `d` attribute) into a `BezPath`.
pub fn parse_svg_path_d(d: &str) -> EpicycleResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Err(EpicycleError::validation("svg path data must be non-empty"));
    }

    BezPath::from_svg(d)
        .map_err(|e| EpicycleError::validation(format!("invalid svg path data: {e}")))
}

/// Collect every path of an SVG document into a single outline.
///
/// Paths are visited in document order with their absolute transforms applied. Text and
/// image nodes are ignored. Coordinates stay in SVG user space (y grows downwards).
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn outline_from_svg(bytes: &[u8]) -> EpicycleResult<BezPath> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let mut out = BezPath::new();
    let paths = append_group(tree.root(), &mut out);
    if paths == 0 {
        return Err(EpicycleError::validation(
            "svg document contains no path elements",
        ));
    }

    tracing::debug!(paths, elements = out.elements().len(), "collected svg outline");
    Ok(out)
}

fn append_group(group: &usvg::Group, out: &mut BezPath) -> usize {
    let mut n = 0;
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => n += append_group(g, out),
            usvg::Node::Path(p) => {
                append_path(p, out);
                n += 1;
            }
            _ => {}
        }
    }
    n
}

fn append_path(path: &usvg::Path, out: &mut BezPath) {
    let ts = path.abs_transform();
    let affine = Affine::new([
        f64::from(ts.sx),
        f64::from(ts.ky),
        f64::from(ts.kx),
        f64::from(ts.sy),
        f64::from(ts.tx),
        f64::from(ts.ty),
    ]);
    let map = |p: usvg::tiny_skia_path::Point| affine * Point::new(f64::from(p.x), f64::from(p.y));

    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(map(p)),
            PathSegment::LineTo(p) => out.line_to(map(p)),
            PathSegment::QuadTo(p1, p) => out.quad_to(map(p1), map(p)),
            PathSegment::CubicTo(p1, p2, p) => out.curve_to(map(p1), map(p2), map(p)),
            PathSegment::Close => out.close_path(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sample/svg.rs"]
mod tests;

//! Core pattern generation pipeline
//!
//! Points → Delaunay triangulation → Voronoi cells. Each stage is pure: no
//! shared state survives a call, so concurrent generations (two cards resizing
//! at once) cannot interfere.

mod delaunay;
mod points;
mod voronoi;

pub use delaunay::{circumcircle, triangulate, Circumcircle, Triangle};
pub use points::generate_points;
pub use voronoi::{build_cell_entries, build_cells, NeighborEntry};

use glam::DVec2;

use crate::cell::VoronoiCell;
use crate::config::PatternConfig;
use crate::error::Result;

/// Run the full geometry pipeline for a canvas
///
/// Returns the generated points together with their triangulation and cells.
/// Degenerate geometry never errors: an impossible triangulation simply comes
/// back with empty triangle and cell collections.
pub fn generate_geometry(
    width: f64,
    height: f64,
    config: &PatternConfig,
) -> Result<(Vec<DVec2>, Vec<Triangle>, Vec<VoronoiCell>)> {
    let points = points::generate_points(width, height, config)?;
    let triangles = delaunay::triangulate(&points);
    let cells = voronoi::build_cells(&points, &triangles);

    log::debug!(
        "pattern geometry: {} points, {} triangles, {} cells",
        points.len(),
        triangles.len(),
        cells.len()
    );

    Ok((points, triangles, cells))
}

//! Voronoi cell construction from the Delaunay triangulation
//!
//! Each triangle's circumcenter is a Voronoi vertex. For every triangle edge
//! (p1, p2), the circumcenter lies on the boundary between p1's and p2's
//! cells, so it is recorded against both endpoints. Sorting a point's recorded
//! circumcenters by angle around the point yields its cell polygon.

use glam::DVec2;
use std::collections::HashSet;

use crate::cell::VoronoiCell;
use crate::generation::delaunay::Triangle;

/// One adjacency record for a point's Voronoi cell
///
/// Captures that the cell boundary of `point` passes through `center`, with
/// `neighbor` on the opposite side of that stretch of boundary. Both fields
/// are indices into the triangulated point slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborEntry {
    /// Index of the point owning the cell
    pub point: usize,
    /// Circumcenter of the adjacent triangle
    pub center: DVec2,
    /// Index of the other endpoint of the shared triangle edge
    pub neighbor: usize,
}

/// Collect each point's neighbor entries, angularly sorted around the point
///
/// The result is indexed by point: `entries[i]` belongs to `points[i]`.
/// Triangles without a circumcircle are skipped. A list with fewer than 3
/// entries cannot close into a polygon (typically a boundary point) and is
/// left for the consumer to skip, not an error.
pub fn build_cell_entries(points: &[DVec2], triangles: &[Triangle]) -> Vec<Vec<NeighborEntry>> {
    let mut entries: Vec<Vec<NeighborEntry>> = vec![Vec::new(); points.len()];

    for triangle in triangles {
        let center = match triangle.circumcircle {
            Some(circle) => circle.center,
            None => continue,
        };

        for (p1, p2) in triangle.edges() {
            entries[p1].push(NeighborEntry {
                point: p1,
                center,
                neighbor: p2,
            });
            entries[p2].push(NeighborEntry {
                point: p2,
                center,
                neighbor: p1,
            });
        }
    }

    for (i, list) in entries.iter_mut().enumerate() {
        let point = points[i];
        list.sort_by(|a, b| {
            let angle_a = (a.center.y - point.y).atan2(a.center.x - point.x);
            let angle_b = (b.center.y - point.y).atan2(b.center.x - point.x);
            angle_a
                .partial_cmp(&angle_b)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    entries
}

/// Assemble full [`VoronoiCell`] records for every point
///
/// Cell vertices are the angularly ordered circumcenters from
/// [`build_cell_entries`], collapsed so each circumcenter appears once — the
/// two edges a triangle shares with the point both record the same center, and
/// the polygon wants it a single time. Neighbor ids are deduplicated and
/// sorted for deterministic ordering. Points that never made it into a
/// triangle (exact duplicates) get an empty, degenerate cell.
pub fn build_cells(points: &[DVec2], triangles: &[Triangle]) -> Vec<VoronoiCell> {
    build_cell_entries(points, triangles)
        .into_iter()
        .enumerate()
        .map(|(id, entries)| {
            let mut neighbor_set = HashSet::new();
            let mut vertices = Vec::with_capacity(entries.len());
            for entry in &entries {
                neighbor_set.insert(entry.neighbor);
                vertices.push(entry.center);
            }
            // Equal centers sort to equal angles, so duplicates are adjacent.
            vertices.dedup();

            let mut neighbors: Vec<usize> = neighbor_set.into_iter().collect();
            neighbors.sort_unstable();

            VoronoiCell {
                id,
                seed: points[id],
                neighbors,
                vertices,
            }
        })
        .collect()
}

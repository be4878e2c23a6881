//! Voronoi cell structure
//!
//! Represents one cell of the web pattern: the region of the canvas closer to
//! its seed point than to any other generated point.

use glam::DVec2;

/// A single Voronoi cell of a generated pattern
///
/// Each cell carries:
/// - A unique ID (the index of its seed in the generated point set)
/// - The seed point itself
/// - Neighbor connectivity over the Voronoi graph
/// - The ordered boundary polygon (circumcenters of the incident Delaunay
///   triangles)
///
/// Cells are never stored or serialized; a widget regenerates them from its
/// `PatternConfig` on every resize.
#[derive(Debug, Clone)]
pub struct VoronoiCell {
    /// Cell identifier, equal to the seed's index in the point set
    ///
    /// IDs are stable and deterministic: the same configuration and canvas
    /// size always produce the same cells in the same order.
    pub id: usize,

    /// The generating point of this cell
    pub seed: DVec2,

    /// IDs of adjacent cells, sorted ascending
    ///
    /// Two cells are neighbors when their seeds share a Delaunay triangle
    /// edge.
    pub neighbors: Vec<usize>,

    /// Boundary polygon vertices, ordered by angle around the seed
    ///
    /// These are the circumcenters of the Delaunay triangles incident to the
    /// seed. Fewer than 3 vertices means the cell cannot close into a polygon
    /// (a boundary point's cell is open); consumers skip such cells.
    pub vertices: Vec<DVec2>,
}

impl VoronoiCell {
    /// Whether this cell is too small to form a closed polygon
    ///
    /// Boundary points legitimately produce open cells; skipping them is the
    /// expected consumer behavior, not an error.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Get the number of neighboring cells
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this cell is a neighbor of another cell
    #[inline]
    pub fn is_neighbor_of(&self, other_cell_id: usize) -> bool {
        self.neighbors.binary_search(&other_cell_id).is_ok()
    }

    /// Get the vertex count (polygon complexity)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Polygon area by the shoelace formula
    ///
    /// Degenerate cells have zero area.
    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }

        let mut sum = 0.0;
        for i in 0..self.vertices.len() {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % self.vertices.len()];
            sum += a.perp_dot(b);
        }
        sum.abs() / 2.0
    }

    /// Centroid of the boundary polygon, `None` for degenerate cells
    pub fn centroid(&self) -> Option<DVec2> {
        if self.is_degenerate() {
            return None;
        }

        let sum: DVec2 = self.vertices.iter().copied().sum();
        Some(sum / self.vertices.len() as f64)
    }
}

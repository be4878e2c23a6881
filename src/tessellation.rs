//! Tessellation facade
//!
//! Owns the full output of one generation pass: the point set, its Delaunay
//! triangulation (the gem pattern's geometry) and the dual Voronoi cells (the
//! web pattern's geometry).

use glam::DVec2;

use crate::cell::VoronoiCell;
use crate::config::PatternConfig;
use crate::error::Result;
use crate::generation::{generate_geometry, Triangle};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A complete tessellation of one canvas
///
/// Everything is computed in `generate` and immutable afterwards; a widget
/// discards the tessellation and builds a new one on resize. Two patterns read
/// from it:
///
/// - **gem**: [`triangles`](Self::triangles), filled/stroked directly
/// - **web**: [`cells`](Self::cells), each non-degenerate cell's `vertices`
///   polygon
///
/// # Examples
///
/// ```
/// use voronoi_pattern::*;
///
/// let config = PatternConfigBuilder::new().seed(42).build().unwrap();
/// let tess = Tessellation::generate(320.0, 200.0, config).unwrap();
///
/// assert!(tess.triangles().len() > 0);
/// for cell in tess.cells().iter().filter(|c| !c.is_degenerate()) {
///     // hand cell.vertices to the renderer
///     assert!(cell.vertex_count() >= 3);
/// }
/// ```
#[derive(Clone)]
pub struct Tessellation {
    /// Configuration used for this generation
    config: PatternConfig,

    /// Canvas width the pattern was generated for
    width: f64,

    /// Canvas height the pattern was generated for
    height: f64,

    /// Generated point set (corners first, then interior points)
    points: Vec<DVec2>,

    /// Delaunay triangles over `points`
    triangles: Vec<Triangle>,

    /// Voronoi cells, one per point, indexed by cell id
    cells: Vec<VoronoiCell>,

    /// Seed-point index for position-to-cell lookups
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl Tessellation {
    /// Generate the tessellation for a canvas
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - Canvas size, strictly positive
    /// * `config` - Generation options
    ///
    /// # Errors
    ///
    /// Only configuration problems error (bad dimensions); degenerate geometry
    /// comes back as empty triangle/cell collections.
    pub fn generate(width: f64, height: f64, config: PatternConfig) -> Result<Self> {
        let (points, triangles, cells) = generate_geometry(width, height, &config)?;

        #[cfg(feature = "spatial-index")]
        let spatial_index = SpatialIndex::new(&points);

        Ok(Self {
            config,
            width,
            height,
            points,
            triangles,
            cells,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Get the configuration used to generate this tessellation
    #[inline]
    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Get the canvas width
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Get the canvas height
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Get the generated point set
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Get the Delaunay triangles (the gem pattern geometry)
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Get all Voronoi cells (the web pattern geometry)
    #[inline]
    pub fn cells(&self) -> &[VoronoiCell] {
        &self.cells
    }

    /// Get the number of cells (equals the number of points)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get a cell by id
    ///
    /// Returns `None` if the id is out of bounds.
    #[inline]
    pub fn get_cell(&self, id: usize) -> Option<&VoronoiCell> {
        self.cells.get(id)
    }

    /// Get neighbor ids for a cell
    ///
    /// Returns an empty slice for an invalid id.
    pub fn get_neighbors(&self, cell_id: usize) -> &[usize] {
        self.cells
            .get(cell_id)
            .map(|c| c.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a triangle's vertex indices to canvas coordinates
    #[inline]
    pub fn triangle_positions(&self, triangle: &Triangle) -> [DVec2; 3] {
        triangle.positions(&self.points)
    }

    /// Find the cell containing a canvas position (requires `spatial-index`)
    ///
    /// The containing cell is the one whose seed is nearest to the position.
    /// Useful for hover/hit testing against the web pattern.
    ///
    /// # Example
    ///
    /// ```
    /// # use voronoi_pattern::*;
    /// # let config = PatternConfigBuilder::new().seed(42).build().unwrap();
    /// # let tess = Tessellation::generate(320.0, 200.0, config).unwrap();
    /// let cell_id = tess.find_cell_at(glam::DVec2::new(160.0, 100.0));
    /// assert!(cell_id < tess.cell_count());
    /// ```
    #[cfg(feature = "spatial-index")]
    pub fn find_cell_at(&self, position: DVec2) -> usize {
        self.spatial_index.find_nearest(position)
    }

    /// Find cells within a given hop count of a center cell (BFS)
    ///
    /// Returns the center cell and every cell reachable over at most `hops`
    /// neighbor edges; empty for an invalid center id. Used to spread render
    /// effects (highlight ripples) outward from a cell.
    pub fn find_cells_within_radius(&self, center_id: usize, hops: usize) -> Vec<usize> {
        if center_id >= self.cells.len() {
            return vec![];
        }

        let mut visited = std::collections::HashSet::new();
        let mut current = vec![center_id];
        visited.insert(center_id);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &cell_id in &current {
                for &neighbor in self.get_neighbors(cell_id) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            current = next;
        }

        visited.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Distribution, PatternConfigBuilder};

    fn small_tessellation() -> Tessellation {
        let config = PatternConfigBuilder::new()
            .seed(42)
            .point_count(30)
            .unwrap()
            .build()
            .unwrap();
        Tessellation::generate(320.0, 200.0, config).unwrap()
    }

    #[test]
    fn test_generation_basics() {
        let tess = small_tessellation();

        assert_eq!(tess.width(), 320.0);
        assert_eq!(tess.height(), 200.0);
        assert!(tess.points().len() >= 4);
        assert!(!tess.triangles().is_empty());
        assert_eq!(tess.cell_count(), tess.points().len());
    }

    #[test]
    fn test_deterministic_regeneration() {
        let config = PatternConfigBuilder::new().seed(7).build().unwrap();
        let a = Tessellation::generate(256.0, 256.0, config).unwrap();
        let b = Tessellation::generate(256.0, 256.0, config).unwrap();

        assert_eq!(a.points(), b.points());
        assert_eq!(a.triangles().len(), b.triangles().len());
        for (ta, tb) in a.triangles().iter().zip(b.triangles().iter()) {
            assert_eq!(ta.vertices, tb.vertices);
        }
    }

    #[test]
    fn test_corners_survive_into_triangles() {
        let tess = small_tessellation();

        // The four corners are extremal, so each must be a vertex of at least
        // one returned triangle.
        for corner in 0..4 {
            assert!(
                tess.triangles().iter().any(|t| t.vertices.contains(&corner)),
                "corner {} missing from the triangulation",
                corner
            );
        }
    }

    #[test]
    fn test_get_cell_bounds() {
        let tess = small_tessellation();

        assert!(tess.get_cell(0).is_some());
        assert!(tess.get_cell(tess.cell_count()).is_none());
        assert!(tess.get_neighbors(usize::MAX).is_empty());
    }

    #[test]
    fn test_interior_cells_close() {
        let tess = small_tessellation();

        let closed = tess.cells().iter().filter(|c| !c.is_degenerate()).count();
        assert!(closed > 0, "expected at least one closed interior cell");
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let config = PatternConfigBuilder::new().seed(1).build().unwrap();
        assert!(Tessellation::generate(0.0, 100.0, config).is_err());
        assert!(Tessellation::generate(100.0, -1.0, config).is_err());
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_cell_at_seed_returns_that_cell() {
        let tess = small_tessellation();

        for cell in tess.cells().iter().take(10) {
            assert_eq!(tess.find_cell_at(cell.seed), cell.id);
        }
    }

    #[test]
    fn test_find_cells_within_radius() {
        let tess = small_tessellation();

        let r0 = tess.find_cells_within_radius(0, 0);
        assert_eq!(r0, vec![0]);

        let r1 = tess.find_cells_within_radius(0, 1);
        assert_eq!(r1.len(), 1 + tess.get_neighbors(0).len());

        let r2 = tess.find_cells_within_radius(0, 2);
        assert!(r2.len() >= r1.len());

        assert!(tess.find_cells_within_radius(usize::MAX, 3).is_empty());
    }

    #[test]
    fn test_all_distributions_generate() {
        for dist in [
            Distribution::GoldenSpiral,
            Distribution::Clustered,
            Distribution::Uniform,
            Distribution::RadialGradient,
        ] {
            let config = PatternConfigBuilder::new()
                .seed(9)
                .distribution(dist)
                .build()
                .unwrap();
            let tess = Tessellation::generate(300.0, 220.0, config).unwrap();
            assert!(
                !tess.triangles().is_empty(),
                "{:?} produced no triangles",
                dist
            );
        }
    }
}

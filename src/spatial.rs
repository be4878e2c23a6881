//! Spatial indexing for fast position-to-cell lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::DVec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around a KD-tree of seed points
///
/// Maps a canvas position (pointer hover, hit test) to the id of the Voronoi
/// cell containing it — the cell of the nearest seed, by definition of the
/// diagram. O(log n) per query.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build the index from the generated seed points
    ///
    /// Called once per generation; the point set always contains at least the
    /// four canvas corners.
    ///
    /// # Example
    ///
    /// ```
    /// use voronoi_pattern::SpatialIndex;
    /// use glam::DVec2;
    ///
    /// let seeds = vec![
    ///     DVec2::new(10.0, 10.0),
    ///     DVec2::new(90.0, 20.0),
    ///     DVec2::new(50.0, 80.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&seeds);
    /// assert_eq!(index.find_nearest(DVec2::new(12.0, 9.0)), 0);
    /// ```
    pub fn new(seeds: &[DVec2]) -> Self {
        let entries: Vec<[f64; 2]> = seeds.iter().map(|p| [p.x, p.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&entries),
        }
    }

    /// Find the cell id whose seed is nearest to `position`
    pub fn find_nearest(&self, position: DVec2) -> usize {
        let query = [position.x, position.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item
    }
}

#[cfg(test)]
#[cfg(feature = "spatial-index")]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let seeds = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
            DVec2::new(0.0, 100.0),
            DVec2::new(100.0, 100.0),
        ];

        let index = SpatialIndex::new(&seeds);

        assert_eq!(index.find_nearest(DVec2::new(10.0, 5.0)), 0);
        assert_eq!(index.find_nearest(DVec2::new(95.0, 10.0)), 1);
        assert_eq!(index.find_nearest(DVec2::new(5.0, 88.0)), 2);
        assert_eq!(index.find_nearest(DVec2::new(99.0, 99.0)), 3);
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let seeds = vec![DVec2::new(25.0, 75.0), DVec2::new(60.0, 40.0)];
        let index = SpatialIndex::new(&seeds);

        assert_eq!(index.find_nearest(seeds[0]), 0);
        assert_eq!(index.find_nearest(seeds[1]), 1);
    }
}

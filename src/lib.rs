//! Delaunay/Voronoi pattern geometry for decorative canvas widgets
//!
//! Generates the geometry behind two card-background patterns:
//!
//! - the **gem** pattern: a Delaunay triangulation of a seeded point set,
//!   rendered as faceted triangles
//! - the **web** pattern: the dual Voronoi diagram, rendered as cell polygons
//!
//! The crate is pure geometry. Rendering (canvas fill/stroke, gradients) is
//! left to the caller, which consumes either the triangle/cell coordinates
//! directly or the flat [`MeshData`] buffers.
//!
//! # Quick Start
//!
//! ```rust
//! use voronoi_pattern::*;
//!
//! // Configure a deterministic pattern
//! let config = PatternConfigBuilder::new()
//!     .seed(42)
//!     .distribution(Distribution::GoldenSpiral)
//!     .build()
//!     .unwrap();
//!
//! // Tessellate a 320x200 card
//! let tess = Tessellation::generate(320.0, 200.0, config).unwrap();
//! println!("{} triangles, {} cells", tess.triangles().len(), tess.cell_count());
//!
//! // Flatten for rendering
//! let gem = generate_gem_mesh(&tess);
//! let web = generate_web_mesh(&tess);
//! assert!(!gem.is_empty() && !web.is_empty());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): O(log n) position-to-cell lookups via KD-tree
//! - `serde`: serialization support for [`PatternConfig`]

// Modules
pub mod cell;
pub mod config;
pub mod error;
pub mod generation;
pub mod mesh;
pub mod tessellation;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use cell::VoronoiCell;
pub use config::{Anchor, Distribution, PatternConfig, PatternConfigBuilder};
pub use error::{PatternError, Result};
pub use generation::{
    build_cell_entries, build_cells, circumcircle, generate_points, triangulate, Circumcircle,
    NeighborEntry, Triangle,
};
pub use mesh::{center_proximity, generate_gem_mesh, generate_web_mesh, MeshData};
pub use tessellation::Tessellation;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;

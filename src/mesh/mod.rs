//! Render-ready geometry buffers
//!
//! Flattens a [`Tessellation`](crate::Tessellation) into engine-agnostic
//! vertex/index buffers:
//! - canvas 2D: walk `indices` in triples and fill paths
//! - wgpu/GL: upload `positions`/`proximities` directly as vertex attributes
//!
//! Alongside each position the buffers carry a *proximity* scalar — how close
//! the vertex's shape sits to the canvas center, normalized to [0, 1] — which
//! is the single input the gem and web renderers derive their gradient
//! opacities from. Color/opacity mapping itself stays with the renderer.

use glam::DVec2;

use crate::tessellation::Tessellation;

/// Engine-agnostic 2D mesh output
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions in canvas coordinates
    pub positions: Vec<[f32; 2]>,
    /// Per-vertex proximity to the canvas center, in [0, 1]
    pub proximities: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn push_vertex(&mut self, position: DVec2, proximity: f32) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push([position.x as f32, position.y as f32]);
        self.proximities.push(proximity);
        index
    }
}

/// How close `point` sits to the canvas center, normalized to [0, 1]
///
/// 1 at the exact center, falling to 0 at the corners (distance measured
/// against the half-diagonal). This is the scalar the gem and web renderers
/// scale their gradient opacity by.
pub fn center_proximity(point: DVec2, width: f64, height: f64) -> f64 {
    let center = DVec2::new(width / 2.0, height / 2.0);
    let max_distance = center.length().max(f64::MIN_POSITIVE);
    (1.0 - point.distance(center) / max_distance).clamp(0.0, 1.0)
}

/// Generate the gem pattern mesh: one output triangle per Delaunay triangle
///
/// All three vertices of a triangle share the proximity of its centroid, so a
/// renderer can flat-shade per facet.
pub fn generate_gem_mesh(tessellation: &Tessellation) -> MeshData {
    let mut mesh = MeshData::default();
    let (width, height) = (tessellation.width(), tessellation.height());

    for triangle in tessellation.triangles() {
        let [a, b, c] = tessellation.triangle_positions(triangle);
        let centroid = (a + b + c) / 3.0;
        let proximity = center_proximity(centroid, width, height) as f32;

        let ia = mesh.push_vertex(a, proximity);
        let ib = mesh.push_vertex(b, proximity);
        let ic = mesh.push_vertex(c, proximity);
        mesh.indices.extend([ia, ib, ic]);
    }

    mesh
}

/// Generate the web pattern mesh: a triangle fan per non-degenerate cell
///
/// Each cell polygon is fanned around its centroid; degenerate cells (open
/// boundary cells with fewer than 3 vertices) contribute nothing. All of a
/// cell's vertices share the centroid's proximity.
pub fn generate_web_mesh(tessellation: &Tessellation) -> MeshData {
    let mut mesh = MeshData::default();
    let (width, height) = (tessellation.width(), tessellation.height());

    for cell in tessellation.cells() {
        let centroid = match cell.centroid() {
            Some(c) => c,
            None => continue,
        };
        let proximity = center_proximity(centroid, width, height) as f32;

        let center_idx = mesh.push_vertex(centroid, proximity);
        let base_idx = mesh.positions.len() as u32;
        for &vertex in &cell.vertices {
            mesh.push_vertex(vertex, proximity);
        }

        let n = cell.vertices.len() as u32;
        for i in 0..n {
            mesh.indices.extend([
                center_idx,
                base_idx + i,
                base_idx + (i + 1) % n,
            ]);
        }
    }

    mesh
}

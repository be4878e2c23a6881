//! Incremental Delaunay triangulation (Bowyer–Watson)
//!
//! Points are inserted one at a time into a mesh seeded with a large synthetic
//! super-triangle. Each insertion removes every triangle whose circumcircle
//! contains the new point, then re-triangulates the hole's boundary against
//! the point. Triangles touching a super-triangle vertex are stripped at the
//! end, leaving the Delaunay triangulation of the input.
//!
//! Triangles store vertex *indices* into the caller's point slice, never raw
//! coordinates, so adjacency and super-triangle exclusion are exact integer
//! comparisons and two distinct-but-close points can never be confused.
//!
//! No spatial index: every insertion scans the whole mesh. Quadratic-ish in
//! the worst case, which is fine for the target size of a few hundred points
//! per canvas.

use glam::DVec2;

/// Determinant magnitudes below this are treated as collinear
const EPSILON: f64 = 1e-8;

/// Circumcircle of a triangle: center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    /// Circle center (the Voronoi vertex dual to the triangle)
    pub center: DVec2,
    /// Circle radius
    pub radius: f64,
}

/// A mesh triangle: three vertex indices plus the cached circumcircle
///
/// The circumcircle is computed once at construction. A triangle whose
/// vertices are (nearly) collinear has no circumcircle; it can never contain
/// a point and is inert during insertion.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// Vertex indices into the point arena, in construction order
    pub vertices: [usize; 3],
    /// Cached circumcircle, `None` for degenerate triangles
    pub circumcircle: Option<Circumcircle>,
}

impl Triangle {
    fn new(vertices: [usize; 3], arena: &[DVec2]) -> Self {
        let circumcircle = circumcircle(
            arena[vertices[0]],
            arena[vertices[1]],
            arena[vertices[2]],
        );
        Self {
            vertices,
            circumcircle,
        }
    }

    /// Directed edges (a→b, b→c, c→a)
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    /// Whether the circumcircle contains `point`, boundary inclusive
    ///
    /// Degenerate triangles contain nothing.
    pub fn circumcircle_contains(&self, point: DVec2) -> bool {
        match self.circumcircle {
            Some(circle) => point.distance(circle.center) <= circle.radius,
            None => false,
        }
    }

    /// Resolve the vertex indices to coordinates
    pub fn positions(&self, points: &[DVec2]) -> [DVec2; 3] {
        [
            points[self.vertices[0]],
            points[self.vertices[1]],
            points[self.vertices[2]],
        ]
    }

    fn touches_vertex_at_or_above(&self, first_synthetic: usize) -> bool {
        self.vertices.iter().any(|&v| v >= first_synthetic)
    }
}

/// Circumcircle of three points via the determinant formula
///
/// Returns `None` when the points are collinear within [`EPSILON`], which
/// keeps the division well-defined at the cost of leaving near-degenerate
/// slivers in the mesh.
pub fn circumcircle(a: DVec2, b: DVec2, c: DVec2) -> Option<Circumcircle> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < EPSILON {
        return None;
    }

    let a2 = a.length_squared();
    let b2 = b.length_squared();
    let c2 = c.length_squared();

    let center = DVec2::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );

    Some(Circumcircle {
        center,
        radius: center.distance(a),
    })
}

/// Three synthetic points enclosing the input's bounding box with 10× margin
fn super_triangle_points(points: &[DVec2]) -> [DVec2; 3] {
    let mut min = DVec2::splat(f64::INFINITY);
    let mut max = DVec2::splat(f64::NEG_INFINITY);

    for p in points {
        min = min.min(*p);
        max = max.max(*p);
    }

    let dx = (max.x - min.x) * 10.0;
    let dy = (max.y - min.y) * 10.0;

    [
        DVec2::new(min.x - dx, min.y - dy * 3.0),
        DVec2::new(min.x - dx, max.y + dy),
        DVec2::new(max.x + dx * 3.0, max.y + dy),
    ]
}

/// Compute the Delaunay triangulation of `points`
///
/// Returned triangles index into `points`. Exact duplicate points (same bit
/// pattern) are inserted once; the first occurrence keeps the index. Fewer
/// than 3 unique points, or input whose unique points are all collinear,
/// yields an empty list — callers treat that as "nothing to draw", not an
/// error.
pub fn triangulate(points: &[DVec2]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    // First occurrence of every distinct coordinate pair keeps its index.
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<usize> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if seen.insert((p.x.to_bits(), p.y.to_bits())) {
            unique.push(i);
        }
    }

    if unique.len() < 3 {
        return Vec::new();
    }

    // The arena is the caller's points plus the three super-triangle vertices,
    // so any vertex index >= points.len() marks a synthetic triangle.
    let first_synthetic = points.len();
    let mut arena: Vec<DVec2> = points.to_vec();
    arena.extend(super_triangle_points(points));

    let mut mesh = vec![Triangle::new(
        [first_synthetic, first_synthetic + 1, first_synthetic + 2],
        &arena,
    )];

    for &point_idx in &unique {
        let point = arena[point_idx];

        let bad: Vec<usize> = (0..mesh.len())
            .filter(|&t| mesh[t].circumcircle_contains(point))
            .collect();
        if bad.is_empty() {
            continue;
        }

        // The hole boundary: edges of bad triangles whose reverse is not an
        // edge of a different bad triangle.
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for &t in &bad {
            for (u, v) in mesh[t].edges() {
                let shared = bad.iter().any(|&other| {
                    other != t && mesh[other].edges().contains(&(v, u))
                });
                if !shared {
                    boundary.push((u, v));
                }
            }
        }

        // Remove bad triangles back to front so the indices stay valid.
        for &t in bad.iter().rev() {
            mesh.swap_remove(t);
        }

        for (u, v) in boundary {
            mesh.push(Triangle::new([u, v, point_idx], &arena));
        }
    }

    mesh.retain(|t| !t.touches_vertex_at_or_above(first_synthetic));

    log::debug!(
        "triangulated {} points ({} unique) into {} triangles",
        points.len(),
        unique.len(),
        mesh.len()
    );

    mesh
}

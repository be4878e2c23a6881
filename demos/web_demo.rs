//! Demonstration of the web pattern (Voronoi cells)

use voronoi_pattern::*;

fn main() -> Result<()> {
    println!("Generating web pattern...");

    let config = PatternConfigBuilder::new()
        .seed(72340)
        .distribution(Distribution::Uniform)
        .point_count(60)?
        .build()?;

    let tess = Tessellation::generate(400.0, 260.0, config)?;

    let closed = tess.cells().iter().filter(|c| !c.is_degenerate()).count();
    let open = tess.cell_count() - closed;
    println!(
        "Generated {} cells ({} closed, {} open boundary cells)",
        tess.cell_count(),
        closed,
        open
    );

    let total_area: f64 = tess.cells().iter().map(|c| c.area()).sum();
    println!("Total closed-cell area: {:.1}", total_area);

    let mesh = generate_web_mesh(&tess);
    println!("\nMesh statistics:");
    println!("  Vertices: {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());

    // Neighbor graph queries, e.g. for spreading a highlight outward from a
    // hovered cell.
    #[cfg(feature = "spatial-index")]
    {
        let hovered = tess.find_cell_at(DVec2::new(200.0, 130.0));
        let ripple = tess.find_cells_within_radius(hovered, 2);
        println!(
            "\nCell under the canvas center: {} ({} cells within 2 hops)",
            hovered,
            ripple.len()
        );
    }

    Ok(())
}

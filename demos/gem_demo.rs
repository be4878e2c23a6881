//! Demonstration of the gem pattern (Delaunay triangles)

use voronoi_pattern::*;

fn main() -> Result<()> {
    println!("Generating gem pattern...");

    let config = PatternConfigBuilder::new()
        .seed(42)
        .distribution(Distribution::GoldenSpiral)
        .point_count(50)?
        .build()?;

    let tess = Tessellation::generate(320.0, 200.0, config)?;
    println!(
        "Generated {} points, {} triangles",
        tess.points().len(),
        tess.triangles().len()
    );

    let mesh = generate_gem_mesh(&tess);
    println!("\nMesh statistics:");
    println!("  Vertices: {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());
    println!("  Indices: {}", mesh.indices.len());

    // The same seed must regenerate the identical pattern after a resize
    // event hands us the same dimensions again.
    let again = Tessellation::generate(320.0, 200.0, config)?;
    assert_eq!(tess.points(), again.points());
    println!("\nRegeneration is deterministic.");

    println!("\n=== All distributions ===");
    for name in ["goldenSpiral", "clustered", "uniform", "radialGradient"] {
        let config = PatternConfigBuilder::new()
            .seed(42)
            .distribution_name(name)?
            .build()?;
        let tess = Tessellation::generate(320.0, 200.0, config)?;
        let mesh = generate_gem_mesh(&tess);

        println!(
            "{}: {} points, {} triangles, {} mesh vertices",
            name,
            tess.points().len(),
            tess.triangles().len(),
            mesh.vertex_count()
        );
    }

    Ok(())
}

//! Minimal headless host: scatter a canvas, run both engines to
//! completion, and print their reports.

use rand::prelude::*;
use stepviz::{
    partition, scatter_clusters, scatter_points, ClusteringEngine, Palette, PathBuildingEngine,
    Rect, Shape, StepAlgorithm,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let region = Rect::new(10.0, 10.0, 600.0, 400.0);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut palette = Palette::with_seed(2024);

    // Build the mixed canvas the way an interactive host would.
    let mut shapes: Vec<Shape> = scatter_points(region, 40, &mut rng)
        .into_iter()
        .map(Shape::Point)
        .collect();
    shapes.extend(
        scatter_clusters(region, 4, &mut palette, &mut rng)
            .into_iter()
            .map(Shape::Cluster),
    );

    let (points, clusters) = partition(shapes);

    // Clustering run.
    let mut kmeans = ClusteringEngine::new(points.clone(), clusters);
    kmeans.initialize();
    while !kmeans.is_finished() {
        kmeans.step();
        println!("{}", kmeans.report());
    }
    println!("converged in {} iterations", kmeans.iteration());

    // Path run over the same points, starting from the first one.
    let mut path = PathBuildingEngine::new(points, 0)?.with_seed(2024);
    path.initialize();
    while !path.is_finished() {
        path.step();
        println!("{}", path.report());
    }
    println!(
        "path visits {} points, total length {}",
        path.path().len(),
        path.total_distance()
    );

    Ok(())
}

//! # stepviz
//!
//! Stepwise engines for animating K-Means clustering and nearest-neighbour
//! path construction over a 2D canvas of points and cluster markers.
//!
//! The crate owns the algorithm state and the entity model; rendering,
//! mouse editing, and animation timers belong to the embedding host. A
//! host drives a run by moving the current canvas entities into an engine,
//! calling [`StepAlgorithm::initialize`] once, then [`StepAlgorithm::step`]
//! per tick until [`StepAlgorithm::is_finished`], reading entity state and
//! [`StepAlgorithm::report`] text after each tick.
//!
//! ```rust
//! use stepviz::{ClusterEntity, ClusteringEngine, Color, PointEntity, StepAlgorithm};
//!
//! let points = vec![PointEntity::new(1.0, 0.0), PointEntity::new(99.0, 100.0)];
//! let clusters = vec![
//!     ClusterEntity::new(0.0, 0.0, Color::rgb(200, 40, 40)),
//!     ClusterEntity::new(100.0, 100.0, Color::rgb(40, 40, 200)),
//! ];
//!
//! let mut engine = ClusteringEngine::new(points, clusters);
//! engine.initialize();
//! while !engine.is_finished() {
//!     engine.step();
//!     println!("{}", engine.report());
//! }
//! assert_eq!(engine.clusters()[0].center(), (1.0, 0.0));
//! ```

pub mod canvas;
pub mod color;
pub mod engine;
pub mod entity;
/// Error types used across `stepviz`.
pub mod error;
pub mod geom;

pub use canvas::{partition, scatter_clusters, scatter_points, Rect, Shape};
pub use color::{Color, Palette};
pub use engine::{
    run_to_completion, Algorithm, ClusteringEngine, PathBuildingEngine, RunState, StepAlgorithm,
};
pub use entity::{Anchor, ClusterEntity, PointEntity};
pub use error::{Error, Result};

//! Cross-engine tests: the shared trait surface, lifecycle states, and the
//! headless driver loop a host would run.

use crate::canvas::{partition, Shape};
use crate::color::Color;
use crate::engine::{
    run_to_completion, Algorithm, ClusteringEngine, PathBuildingEngine, RunState, StepAlgorithm,
};
use crate::entity::{ClusterEntity, PointEntity};

fn clustering_fixture() -> ClusteringEngine {
    ClusteringEngine::new(
        vec![
            PointEntity::new(0.0, 1.0),
            PointEntity::new(1.0, 0.0),
            PointEntity::new(100.0, 99.0),
            PointEntity::new(99.0, 100.0),
        ],
        vec![
            ClusterEntity::new(0.0, 0.0, Color::rgb(200, 40, 40)),
            ClusterEntity::new(100.0, 100.0, Color::rgb(40, 40, 200)),
        ],
    )
}

fn path_fixture() -> PathBuildingEngine {
    PathBuildingEngine::new(
        vec![
            PointEntity::new(0.0, 0.0),
            PointEntity::new(10.0, 0.0),
            PointEntity::new(3.0, 0.0),
        ],
        0,
    )
    .unwrap()
    .with_seed(7)
}

#[test]
fn test_kind_identifies_each_engine() {
    assert_eq!(clustering_fixture().kind(), Algorithm::Clustering);
    assert_eq!(path_fixture().kind(), Algorithm::PathBuilding);
}

#[test]
fn test_speed_is_stored_verbatim() {
    for engine in [
        &mut clustering_fixture() as &mut dyn StepAlgorithm,
        &mut path_fixture() as &mut dyn StepAlgorithm,
    ] {
        assert_eq!(engine.speed(), 150);
        engine.set_speed(37);
        assert_eq!(engine.speed(), 37);
    }
}

#[test]
fn test_clustering_lifecycle_states() {
    let mut e = clustering_fixture();
    assert_eq!(e.state(), RunState::Uninitialized);

    e.initialize();
    assert_eq!(e.state(), RunState::Ready);

    e.step();
    assert_eq!(e.state(), RunState::Stepping);

    while !e.is_finished() {
        e.step();
    }
    assert_eq!(e.state(), RunState::Done);
}

#[test]
fn test_path_lifecycle_states() {
    let mut e = path_fixture();
    assert_eq!(e.state(), RunState::Uninitialized);

    e.initialize();
    assert_eq!(e.state(), RunState::Ready);

    e.step();
    assert_eq!(e.state(), RunState::Stepping);

    e.step();
    assert_eq!(e.state(), RunState::Done);
    assert!(e.is_finished());
}

#[test]
fn test_inert_clustering_is_done_from_the_start() {
    let e = ClusteringEngine::new(vec![], vec![]);
    assert_eq!(e.state(), RunState::Done);
    assert!(e.is_finished());
}

#[test]
fn test_driver_runs_both_engines_through_the_trait() {
    let mut engines: Vec<Box<dyn StepAlgorithm>> =
        vec![Box::new(clustering_fixture()), Box::new(path_fixture())];

    for engine in &mut engines {
        let steps = run_to_completion(engine.as_mut(), 100);
        assert!(engine.is_finished());
        assert!(steps > 0);
        assert!(!engine.report().is_empty());
    }
}

#[test]
fn test_driver_respects_step_bound() {
    let mut e = clustering_fixture();
    let steps = run_to_completion(&mut e, 0);
    assert_eq!(steps, 0);
    assert!(!e.is_finished());
}

#[test]
fn test_second_initialize_is_a_noop() {
    let mut e = path_fixture();
    e.initialize();
    let color = e.points()[0].color;

    e.initialize();
    assert_eq!(e.path(), &[0]);
    assert_eq!(e.points()[0].color, color);
}

#[test]
fn test_partitioned_canvas_drives_a_clustering_run() {
    // The host keeps one mixed shape list and splits it when a run starts.
    let shapes = vec![
        Shape::Cluster(ClusterEntity::new(0.0, 0.0, Color::rgb(220, 50, 50))),
        Shape::Point(PointEntity::new(1.0, 1.0)),
        Shape::Point(PointEntity::new(2.0, -1.0)),
        Shape::Cluster(ClusterEntity::new(50.0, 50.0, Color::rgb(50, 220, 50))),
        Shape::Point(PointEntity::new(51.0, 49.0)),
    ];

    let (points, clusters) = partition(shapes);
    let mut engine = ClusteringEngine::new(points, clusters);
    run_to_completion(&mut engine, 100);

    assert!(engine.is_finished());
    assert_eq!(engine.assignments(), &[Some(0), Some(0), Some(1)]);
}

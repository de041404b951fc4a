//! Stepwise nearest-neighbour path construction.
//!
//! Starting from a designated point, each step appends the unvisited point
//! closest to the current path tail. The greedy tour is O(n²) over a run
//! and makes no optimality claim; the point of the engine is watching the
//! path grow one segment per tick.

use std::fmt::Write as _;

use log::{debug, info};
use rand::prelude::*;

use crate::color::Color;
use crate::engine::{Algorithm, RunState, StepAlgorithm, DEFAULT_SPEED};
use crate::entity::PointEntity;
use crate::error::{Error, Result};
use crate::geom::{distance, round2};

/// Stepwise greedy path builder over a fixed point set.
#[derive(Debug, Clone)]
pub struct PathBuildingEngine {
    points: Vec<PointEntity>,
    /// Visit order; `path[0]` is the designated start, and points are only
    /// ever appended.
    path: Vec<usize>,
    /// Unvisited point indices, in input order.
    pool: Vec<usize>,
    start: usize,
    /// Running total of appended segment lengths, in whole units.
    total_dist: i64,
    /// Run color, drawn at `initialize`.
    color: Option<Color>,
    rng: StdRng,
    speed: u32,
    initialized: bool,
}

impl PathBuildingEngine {
    /// Take ownership of the points for one run.
    ///
    /// `start` indexes into `points`; every other point forms the
    /// unvisited pool, in input order.
    pub fn new(points: Vec<PointEntity>, start: usize) -> Result<Self> {
        if start >= points.len() {
            return Err(Error::InvalidStart {
                index: start,
                n_points: points.len(),
            });
        }

        let pool = (0..points.len()).filter(|&i| i != start).collect();
        Ok(Self {
            points,
            path: Vec::new(),
            pool,
            start,
            total_dist: 0,
            color: None,
            rng: StdRng::from_os_rng(),
            speed: DEFAULT_SPEED,
            initialized: false,
        })
    }

    /// Seed the run's color randomness, for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The points, in the order supplied at construction.
    pub fn points(&self) -> &[PointEntity] {
        &self.points
    }

    /// Indices of visited points, in visit order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Accumulated path length in whole units.
    pub fn total_distance(&self) -> i64 {
        self.total_dist
    }
}

impl StepAlgorithm for PathBuildingEngine {
    fn kind(&self) -> Algorithm {
        Algorithm::PathBuilding
    }

    /// Open the path at the start point: mark it, color it with the run
    /// color, and make it the tail.
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let color = Color::random(&mut self.rng);
        self.color = Some(color);

        let start = &mut self.points[self.start];
        start.color = color;
        start.start_point = true;
        self.path.push(self.start);
    }

    fn step(&mut self) {
        let (Some(&tail), Some(run_color)) = (self.path.last(), self.color) else {
            return;
        };
        let (tx, ty) = self.points[tail].center();

        let mut min_dist = f64::INFINITY;
        let mut nearest = None;
        for (pos, &i) in self.pool.iter().enumerate() {
            let dist = distance(tx, ty, self.points[i].x, self.points[i].y);
            if dist < min_dist {
                min_dist = dist;
                nearest = Some(pos);
            }
        }

        let Some(pos) = nearest else {
            return;
        };
        let chosen = self.pool.remove(pos);

        // Whole units only; the fractional remainder of every segment is
        // dropped from the total.
        self.total_dist += min_dist as i64;

        let (nx, ny) = self.points[chosen].center();
        self.points[tail].set_anchor(nx, ny);
        self.points[chosen].color = run_color;
        self.path.push(chosen);

        debug!(
            "appended point {chosen} at distance {min_dist:.2}, total {}",
            self.total_dist
        );

        if self.pool.is_empty() {
            // Closing the path: the terminal point gets the same heavy
            // marker as the start, in its own color.
            let terminal = &mut self.points[chosen];
            terminal.color = Color::random(&mut self.rng);
            terminal.start_point = true;
            info!(
                "path complete: {} points, total length {}",
                self.path.len(),
                self.total_dist
            );
        }
    }

    fn is_finished(&self) -> bool {
        self.pool.is_empty()
    }

    /// # Panics
    ///
    /// The path must hold at least two points, i.e. one successful
    /// [`Self::step`] must precede the first call. The host guards this.
    fn report(&self) -> String {
        let newest = &self.points[self.path[self.path.len() - 1]];
        let previous = &self.points[self.path[self.path.len() - 2]];

        let (x1, y1) = (round2(newest.x), round2(newest.y));
        let (x2, y2) = (round2(previous.x), round2(previous.y));
        // The displayed segment length comes from the already-rounded
        // coordinates, while the total accumulates the raw distance in
        // whole units; the two figures can disagree in the last digits.
        let segment = round2(distance(x1, y1, x2, y2));

        let mut out = String::new();
        let _ = writeln!(out, "\nPoints in path: {}", self.path.len());
        let _ = writeln!(out, "-->Point added in: {x1}, {y1}");
        let _ = writeln!(
            out,
            "\tDistance of added point: {segment}\tTotal length of path: {}",
            self.total_dist
        );
        out
    }

    fn state(&self) -> RunState {
        if self.is_finished() {
            RunState::Done
        } else if !self.initialized {
            RunState::Uninitialized
        } else if self.path.len() <= 1 {
            RunState::Ready
        } else {
            RunState::Stepping
        }
    }

    fn speed(&self) -> u32 {
        self.speed
    }

    fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(points: &[(f64, f64)], start: usize) -> PathBuildingEngine {
        PathBuildingEngine::new(
            points.iter().map(|&(x, y)| PointEntity::new(x, y)).collect(),
            start,
        )
        .unwrap()
        .with_seed(42)
    }

    #[test]
    fn test_invalid_start_index_errors() {
        let err = PathBuildingEngine::new(vec![PointEntity::new(0.0, 0.0)], 3).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidStart {
                index: 3,
                n_points: 1
            }
        );
    }

    #[test]
    fn test_initialize_opens_path_at_start() {
        let mut e = engine(&[(0.0, 0.0), (10.0, 0.0)], 0);
        e.initialize();

        assert_eq!(e.path(), &[0]);
        assert!(e.points()[0].start_point);
        assert_ne!(e.points()[0].color, crate::color::Color::GRAY);
        assert!(!e.is_finished());
    }

    #[test]
    fn test_greedy_walk_visits_nearest_first() {
        // Start (0,0); pool (10,0), (3,0), (10,10).
        let mut e = engine(&[(0.0, 0.0), (10.0, 0.0), (3.0, 0.0), (10.0, 10.0)], 0);
        e.initialize();

        e.step();
        assert_eq!(e.path(), &[0, 2]);
        assert_eq!(e.total_distance(), 3);

        e.step();
        assert_eq!(e.path(), &[0, 2, 1]);
        assert_eq!(e.total_distance(), 10);

        e.step();
        assert_eq!(e.path(), &[0, 2, 1, 3]);
        assert_eq!(e.total_distance(), 20);
        assert!(e.is_finished());

        // The closing point wears the start-style marker.
        assert!(e.points()[3].start_point);
    }

    #[test]
    fn test_n_minus_one_steps_visit_every_point_once() {
        let coords = [
            (0.0, 0.0),
            (5.0, 1.0),
            (9.0, 4.0),
            (2.0, 8.0),
            (7.0, 7.0),
            (1.0, 3.0),
        ];
        let mut e = engine(&coords, 2);
        let steps = crate::engine::run_to_completion(&mut e, 100);

        assert_eq!(steps, coords.len() - 1);
        assert!(e.is_finished());
        assert_eq!(e.path().len(), coords.len());
        assert_eq!(e.path()[0], 2);

        let mut visited: Vec<usize> = e.path().to_vec();
        visited.sort_unstable();
        assert_eq!(visited, (0..coords.len()).collect::<Vec<_>>());

        // The total equals the sum of consecutive distances, each
        // truncated to whole units before accumulation.
        let mut expected = 0i64;
        for pair in e.path().windows(2) {
            let a = &e.points()[pair[0]];
            let b = &e.points()[pair[1]];
            expected += distance(a.x, a.y, b.x, b.y) as i64;
        }
        assert_eq!(e.total_distance(), expected);
    }

    #[test]
    fn test_ties_keep_earliest_pool_entry() {
        // Two pool points equidistant from the start.
        let mut e = engine(&[(0.0, 0.0), (5.0, 0.0), (-5.0, 0.0)], 0);
        e.initialize();
        e.step();
        assert_eq!(e.path(), &[0, 1]);
    }

    #[test]
    fn test_step_is_noop_once_pool_is_empty() {
        let mut e = engine(&[(0.0, 0.0), (1.0, 0.0)], 0);
        crate::engine::run_to_completion(&mut e, 10);
        assert!(e.is_finished());

        let path = e.path().to_vec();
        let total = e.total_distance();
        e.step();
        assert_eq!(e.path(), path.as_slice());
        assert_eq!(e.total_distance(), total);
    }

    #[test]
    fn test_single_point_run_finishes_immediately() {
        let e = engine(&[(4.0, 4.0)], 0);
        assert!(e.is_finished());
    }

    #[test]
    fn test_anchor_points_from_old_tail_to_new_point() {
        let mut e = engine(&[(0.0, 0.0), (6.0, 8.0)], 0);
        e.initialize();
        e.step();

        let anchor = e.points()[0].anchor.expect("tail anchors to the appended point");
        assert_eq!((anchor.x1, anchor.y1), (0.0, 0.0));
        assert_eq!((anchor.x2, anchor.y2), (6.0, 8.0));
        assert_eq!(e.total_distance(), 10);
    }

    #[test]
    fn test_report_preserves_rounding_mismatch() {
        // Raw segment 2.006 truncates to 2 in the total, while the report
        // recomputes the segment from coordinates rounded to 2.01.
        let mut e = engine(&[(0.0, 0.0), (2.006, 0.0)], 0);
        e.initialize();
        e.step();

        assert_eq!(e.total_distance(), 2);
        let report = e.report();
        assert!(report.contains("Points in path: 2"));
        assert!(report.contains("-->Point added in: 2.01, 0"));
        assert!(report.contains("Distance of added point: 2.01"));
        assert!(report.contains("Total length of path: 2"));
    }

    #[test]
    fn test_run_color_deterministic_with_seed() {
        let mut a = engine(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)], 0);
        let mut b = engine(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)], 0);
        crate::engine::run_to_completion(&mut a, 10);
        crate::engine::run_to_completion(&mut b, 10);

        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert_eq!(pa.color, pb.color);
        }
    }
}

//! Stepwise K-Means (Lloyd iteration) over canvas entities.
//!
//! Each step runs one full assign/update round:
//!
//! 1. **Assign**: every point moves to its nearest cluster center
//!    (Euclidean distance, strict improvement only, so ties keep the first
//!    cluster in enumeration order).
//! 2. **Update**: every non-empty cluster recenters on the arithmetic mean
//!    of its members; empty clusters keep their position.
//!
//! The run converges when an assignment round changes nothing. Both
//! half-steps are WCSS-non-increasing and the objective is bounded below,
//! so a finite entity set always reaches that fixed point.
//!
//! Unlike a batch clusterer, the engine keeps every intermediate state
//! visible: after each step the host can read recolored points, moved
//! cluster markers, and the anchor lines tying each point to its center.

use std::fmt::Write as _;

use log::{debug, info};

use crate::engine::{Algorithm, RunState, StepAlgorithm, DEFAULT_SPEED};
use crate::entity::{ClusterEntity, PointEntity};
use crate::geom::{distance, round2};

/// Stepwise K-Means over a fixed set of cluster markers and points.
///
/// Determinism: identical entity positions and identical vector orders
/// produce bit-identical assignments and centers on every run.
#[derive(Debug, Clone)]
pub struct ClusteringEngine {
    points: Vec<PointEntity>,
    clusters: Vec<ClusterEntity>,
    /// Point index -> cluster index; `None` before the first assignment.
    assignments: Vec<Option<usize>>,
    /// Cluster index -> member point indices, rebuilt every step.
    members: Vec<Vec<usize>>,
    iteration: u32,
    /// Whether the last step moved any point between clusters.
    changed: bool,
    speed: u32,
    initialized: bool,
}

impl ClusteringEngine {
    /// Take ownership of the canvas entities for one run.
    ///
    /// With no points or no clusters the engine is inert: [`Self::step`]
    /// does nothing and [`Self::is_finished`] is true from the start.
    pub fn new(points: Vec<PointEntity>, clusters: Vec<ClusterEntity>) -> Self {
        let assignments = vec![None; points.len()];
        let members = vec![Vec::new(); clusters.len()];
        Self {
            points,
            clusters,
            assignments,
            members,
            iteration: 0,
            changed: false,
            speed: DEFAULT_SPEED,
            initialized: false,
        }
    }

    fn inert(&self) -> bool {
        self.points.is_empty() || self.clusters.is_empty()
    }

    /// Assign every point to its strictly nearest cluster and rebuild the
    /// member lists. Returns how many points changed cluster.
    fn assign_points(&mut self) -> usize {
        for members in &mut self.members {
            members.clear();
        }

        let mut moved = 0;
        for (i, point) in self.points.iter_mut().enumerate() {
            let mut min_dist = f64::INFINITY;
            let mut nearest = 0;
            for (c, cluster) in self.clusters.iter().enumerate() {
                let dist = distance(point.x, point.y, cluster.x, cluster.y);
                if dist < min_dist {
                    min_dist = dist;
                    nearest = c;
                }
            }

            if self.assignments[i] != Some(nearest) {
                moved += 1;
            }

            let cluster = &self.clusters[nearest];
            point.color = cluster.color;
            // Anchor to the pre-recentering position first; the update
            // half-step re-anchors to the moved center.
            point.set_anchor(cluster.x, cluster.y);
            self.assignments[i] = Some(nearest);
            self.members[nearest].push(i);
        }

        self.changed = moved > 0;
        moved
    }

    /// Recenter every non-empty cluster on the mean of its members and
    /// re-anchor those members to the moved center.
    fn recenter_clusters(&mut self) {
        for (c, members) in self.members.iter().enumerate() {
            if members.is_empty() {
                continue;
            }

            let mut x_sum = 0.0;
            let mut y_sum = 0.0;
            for &i in members {
                x_sum += self.points[i].x;
                y_sum += self.points[i].y;
            }

            let n = members.len() as f64;
            self.clusters[c].x = x_sum / n;
            self.clusters[c].y = y_sum / n;

            let (cx, cy) = self.clusters[c].center();
            for &i in members {
                self.points[i].set_anchor(cx, cy);
            }
        }
    }

    /// The points, in the order supplied at construction.
    pub fn points(&self) -> &[PointEntity] {
        &self.points
    }

    /// The cluster markers, in the order supplied at construction.
    pub fn clusters(&self) -> &[ClusterEntity] {
        &self.clusters
    }

    /// Point index -> cluster index, `None` until the first step.
    pub fn assignments(&self) -> &[Option<usize>] {
        &self.assignments
    }

    /// Number of steps taken so far.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }
}

impl StepAlgorithm for ClusteringEngine {
    fn kind(&self) -> Algorithm {
        Algorithm::Clustering
    }

    /// Clustering needs no per-run setup; this only marks the run ready.
    fn initialize(&mut self) {
        self.initialized = true;
    }

    fn step(&mut self) {
        if self.inert() {
            return;
        }

        let was_finished = self.is_finished();

        let moved = self.assign_points();
        self.recenter_clusters();
        self.iteration += 1;

        debug!(
            "iteration {}: {moved} of {} points changed cluster",
            self.iteration,
            self.points.len()
        );
        if !self.changed && !was_finished {
            info!("clustering converged after {} iterations", self.iteration);
        }
    }

    fn is_finished(&self) -> bool {
        if self.inert() {
            return true;
        }
        self.iteration > 0 && !self.changed
    }

    fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nIteration: {}", self.iteration);

        for (c, cluster) in self.clusters.iter().enumerate() {
            let x = round2(cluster.x);
            let y = round2(cluster.y);
            let _ = writeln!(out, "-->Cluster: {c}");
            let _ = writeln!(out, "\tLocation: {x}, {y}");
            let _ = writeln!(out, "\tContains {} points", self.members[c].len());
        }

        out
    }

    fn state(&self) -> RunState {
        if self.is_finished() {
            RunState::Done
        } else if !self.initialized {
            RunState::Uninitialized
        } else if self.iteration == 0 {
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

//! Host-side canvas helpers: mixed shape lists, rectangle selection, and
//! random scatter generation.
//!
//! Everything here is pure geometry. Mouse tracking, painting, and timers
//! belong to the embedding UI; this module only answers the questions that
//! UI asks — which shape is under the cursor, which shapes fall inside a
//! drag rectangle, and how to populate an empty canvas.

use rand::prelude::*;

use crate::color::Palette;
use crate::entity::{ClusterEntity, PointEntity};

/// A canvas shape: either a data point or a cluster marker.
///
/// Hosts keep one mixed list in drawing order and split it with
/// [`partition`] when a run starts.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A data point.
    Point(PointEntity),
    /// A cluster marker.
    Cluster(ClusterEntity),
}

impl Shape {
    /// Center coordinates.
    pub fn center(&self) -> (f64, f64) {
        match self {
            Shape::Point(p) => p.center(),
            Shape::Cluster(c) => c.center(),
        }
    }

    /// Whether the canvas coordinate hits this shape.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Shape::Point(p) => p.contains(x, y),
            Shape::Cluster(c) => c.contains(x, y),
        }
    }

    /// Translate the shape.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Point(p) => p.move_by(dx, dy),
            Shape::Cluster(c) => c.move_by(dx, dy),
        }
    }

    /// Set the selection highlight.
    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Point(p) => p.selected = selected,
            Shape::Cluster(c) => c.selected = selected,
        }
    }
}

/// Split a mixed shape list into points and clusters, preserving order.
///
/// The relative order of each kind is kept; it fixes the tie-breaking
/// order of every later engine step.
pub fn partition(shapes: Vec<Shape>) -> (Vec<PointEntity>, Vec<ClusterEntity>) {
    let mut points = Vec::new();
    let mut clusters = Vec::new();
    for shape in shapes {
        match shape {
            Shape::Point(p) => points.push(p),
            Shape::Cluster(c) => clusters.push(c),
        }
    }
    (points, clusters)
}

/// An axis-aligned rectangle, used for drag selection and scatter regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// A rectangle from its top-left corner and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the coordinate lies inside, bounds inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x <= x && x <= self.x + self.width && self.y <= y && y <= self.y + self.height
    }

    /// Indices of shapes whose centers lie inside the rectangle.
    ///
    /// Selection goes by center, not outline, so a shape half inside the
    /// drag rectangle counts only once its center crosses the edge.
    pub fn indices_within(&self, shapes: &[Shape]) -> Vec<usize> {
        shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| {
                let (cx, cy) = shape.center();
                self.contains(cx, cy)
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// `n` gray points placed uniformly at random inside `region`.
///
/// `region` must have positive width and height.
pub fn scatter_points(region: Rect, n: usize, rng: &mut impl Rng) -> Vec<PointEntity> {
    (0..n)
        .map(|_| {
            PointEntity::new(
                rng.random_range(region.x..region.x + region.width),
                rng.random_range(region.y..region.y + region.height),
            )
        })
        .collect()
}

/// `n` cluster markers placed uniformly at random inside `region`, each
/// with a fresh palette color.
///
/// `region` must have positive width and height.
pub fn scatter_clusters(
    region: Rect,
    n: usize,
    palette: &mut Palette,
    rng: &mut impl Rng,
) -> Vec<ClusterEntity> {
    (0..n)
        .map(|_| {
            ClusterEntity::new(
                rng.random_range(region.x..region.x + region.width),
                rng.random_range(region.y..region.y + region.height),
                palette.next_color(),
            )
        })
        .collect()
}

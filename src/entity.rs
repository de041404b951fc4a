//! Canvas entities mutated by the engines and read by the rendering host.
//!
//! Entities are plain data: the host creates them (usually via the
//! [`crate::canvas`] helpers), moves them into an engine for a run, and
//! reads position, color, flags, and anchors back for rendering. Engines
//! never create or destroy entities.

use crate::color::Color;
use crate::geom::distance;

/// Radius of a point shape on the canvas.
pub const POINT_RADIUS: f64 = 5.0;
/// Side length of the square cluster marker.
pub const CLUSTER_SIZE: f64 = 20.0;

/// Opacity applied to anchor lines.
const ANCHOR_ALPHA: u8 = 75;

/// A transient line from an entity center to a related coordinate.
///
/// Clustering anchors each point to its cluster center; path building
/// anchors each path point to its successor. The host only reads these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Owning entity's center x.
    pub x1: f64,
    /// Owning entity's center y.
    pub y1: f64,
    /// Target x.
    pub x2: f64,
    /// Target y.
    pub y2: f64,
    /// Translucent copy of the owner's color.
    pub color: Color,
}

impl Anchor {
    /// An anchor tinted with a translucent copy of `color`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            color: color.with_alpha(ANCHOR_ALPHA),
        }
    }
}

/// A movable data point on the canvas.
///
/// Points start gray and unmarked; the engines recolor them, flag path
/// endpoints, and attach anchors as a run progresses.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEntity {
    /// Center x coordinate.
    pub x: f64,
    /// Center y coordinate.
    pub y: f64,
    /// Current fill color.
    pub color: Color,
    /// Selection highlight, maintained by the host.
    pub selected: bool,
    /// Marks the start (and, once a path closes, the terminal) point.
    pub start_point: bool,
    /// Line from this point to its cluster center or path successor.
    pub anchor: Option<Anchor>,
}

impl PointEntity {
    /// A gray, unselected point centered at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            color: Color::GRAY,
            selected: false,
            start_point: false,
            anchor: None,
        }
    }

    /// Center coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether the canvas coordinate falls inside the point's disc.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        distance(self.x, self.y, x, y) < POINT_RADIUS
    }

    /// Translate the point.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Attach an anchor from this point's center to the target, tinted
    /// with the point's current color.
    pub(crate) fn set_anchor(&mut self, x2: f64, y2: f64) {
        self.anchor = Some(Anchor::new(self.x, self.y, x2, y2, self.color));
    }
}

/// A cluster marker.
///
/// Its position is the only field the clustering engine mutates; the color
/// is fixed at creation and copied onto member points every step.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterEntity {
    /// Center x coordinate.
    pub x: f64,
    /// Center y coordinate.
    pub y: f64,
    /// Stable display color, assigned at creation.
    pub color: Color,
    /// Selection highlight, maintained by the host.
    pub selected: bool,
}

impl ClusterEntity {
    /// A cluster marker centered at the given coordinates.
    pub fn new(x: f64, y: f64, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            selected: false,
        }
    }

    /// Center coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether the coordinate falls inside the square marker, bounds
    /// inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let half = CLUSTER_SIZE / 2.0;
        self.x - half <= x && x <= self.x + half && self.y - half <= y && y <= self.y + half
    }

    /// Translate the marker.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

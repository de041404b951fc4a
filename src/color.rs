//! Display colors for canvas entities.
//!
//! Colors are purely visual: they let a viewer tell clusters and path runs
//! apart, and carry no algorithmic meaning. Randomized generation is
//! seedable so test output stays reproducible.

use rand::prelude::*;

/// An RGBA display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity, 255 = opaque.
    pub a: u8,
}

impl Color {
    /// Default fill of a point before any engine touches it.
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    /// Outline and highlight color.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Fully opaque color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// The same color at a different opacity.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// A random opaque color, each channel drawn uniformly from `0..225`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::rgb(
            rng.random_range(0..225),
            rng.random_range(0..225),
            rng.random_range(0..225),
        )
    }
}

/// A seedable stream of random display colors.
///
/// Hosts draw one color per cluster marker at creation time; the color then
/// stays with the marker for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Palette {
    rng: StdRng,
}

impl Palette {
    /// A palette seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A palette with a fixed seed, for reproducible colors.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The next color in the stream.
    pub fn next_color(&mut self) -> Color {
        Color::random(&mut self.rng)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

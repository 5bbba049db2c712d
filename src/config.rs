//! Visualizer configuration.
//!
//! [`VisualizerConfig::default()`] reproduces the classic layout: an 800×600
//! dark-gray canvas, particles emitted from its center in blue, a size slider
//! over `1..=50` starting at 10 and a quantity slider over `1..=100` starting
//! at 30.
//!
//! ```ignore
//! use sparkbox::prelude::*;
//!
//! let config = VisualizerConfig::new()
//!     .with_initial_color(Rgb::new(255, 80, 0))
//!     .with_size_slider(SliderRange::new(1, 80, 20))
//!     .with_seed(42);
//!
//! Visualizer::new().with_config(config).run()?;
//! ```

use glam::Vec2;

use crate::color::Rgb;
use crate::shape::ParticleShape;

/// Integer range and starting value of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl SliderRange {
    /// Create a slider range. `default` is clamped into `min..=max`.
    pub fn new(min: u32, max: u32, default: u32) -> Self {
        let max = max.max(min);
        Self {
            min,
            max,
            default: default.clamp(min, max),
        }
    }

    /// Clamp `value` into the range.
    #[inline]
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// Configuration for a [`Visualizer`](crate::Visualizer) run.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    /// Window title.
    pub title: String,
    /// Canvas width in logical pixels.
    pub width: u32,
    /// Canvas height in logical pixels.
    pub height: u32,
    /// Color the canvas is cleared to every frame.
    pub background: Rgb,
    /// Target frame rate of the frame loop.
    pub target_fps: u32,
    /// Where new particles appear.
    pub spawn_position: Vec2,
    /// Emitter color before "Change Color" is first pressed.
    pub initial_color: Rgb,
    /// Particle size slider.
    pub size_slider: SliderRange,
    /// Particle quantity slider.
    pub quantity_slider: SliderRange,
    /// Shape selected in the dropdown at startup.
    pub initial_shape: ParticleShape,
    /// Seed for the emitter's RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Append the measured FPS to the window title.
    pub show_fps: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            title: "Particle Engine with Controls".to_string(),
            width: 800,
            height: 600,
            background: Rgb::BACKGROUND,
            target_fps: 60,
            spawn_position: Vec2::new(400.0, 300.0),
            initial_color: Rgb::new(0, 128, 255),
            size_slider: SliderRange::new(1, 50, 10),
            quantity_slider: SliderRange::new(1, 100, 30),
            initial_shape: ParticleShape::Circle,
            seed: None,
            show_fps: false,
        }
    }
}

impl VisualizerConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the canvas size in logical pixels.
    ///
    /// The spawn position is not moved; set it with
    /// [`with_spawn_position`](Self::with_spawn_position) if needed.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set the background clear color.
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    /// Set the target frame rate. Values below 1 are treated as 1.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Set where particles are emitted from.
    pub fn with_spawn_position(mut self, position: Vec2) -> Self {
        self.spawn_position = position;
        self
    }

    /// Set the emitter's starting color.
    pub fn with_initial_color(mut self, color: Rgb) -> Self {
        self.initial_color = color;
        self
    }

    /// Set the range and starting value of the size slider.
    pub fn with_size_slider(mut self, range: SliderRange) -> Self {
        self.size_slider = range;
        self
    }

    /// Set the range and starting value of the quantity slider.
    pub fn with_quantity_slider(mut self, range: SliderRange) -> Self {
        self.quantity_slider = range;
        self
    }

    /// Set the shape selected at startup.
    pub fn with_initial_shape(mut self, shape: ParticleShape) -> Self {
        self.initial_shape = shape;
        self
    }

    /// Seed the emitter's RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Show the measured FPS in the window title.
    pub fn with_fps_in_title(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = VisualizerConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.background, Rgb::new(30, 30, 30));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.spawn_position, Vec2::new(400.0, 300.0));
        assert_eq!(config.initial_color, Rgb::new(0, 128, 255));
        assert_eq!(config.size_slider, SliderRange { min: 1, max: 50, default: 10 });
        assert_eq!(config.quantity_slider, SliderRange { min: 1, max: 100, default: 30 });
        assert_eq!(config.initial_shape, ParticleShape::Circle);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_chain() {
        let config = VisualizerConfig::new()
            .with_title("Sparks")
            .with_size(640, 480)
            .with_target_fps(0)
            .with_initial_shape(ParticleShape::Star)
            .with_seed(9)
            .with_fps_in_title(true);

        assert_eq!(config.title, "Sparks");
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.target_fps, 1);
        assert_eq!(config.initial_shape, ParticleShape::Star);
        assert_eq!(config.seed, Some(9));
        assert!(config.show_fps);
    }

    #[test]
    fn test_slider_range_clamps_default() {
        let range = SliderRange::new(5, 10, 50);
        assert_eq!(range.default, 10);
        assert_eq!(range.clamp(0), 5);
        assert_eq!(range.clamp(7), 7);

        // Inverted bounds collapse to a single value
        let range = SliderRange::new(10, 3, 1);
        assert_eq!((range.min, range.max, range.default), (10, 10, 10));
    }
}

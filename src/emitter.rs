//! Particle emitter.
//!
//! The [`Emitter`] owns the current emission settings and every live
//! particle. Settings can change at any time between frames; particles keep
//! the color, size and shape they were emitted with.
//!
//! # Example
//!
//! ```ignore
//! let mut emitter = Emitter::new(Vec2::new(400.0, 300.0))
//!     .with_color(Rgb::new(0, 128, 255))
//!     .with_size(10.0)
//!     .with_quantity(30);
//!
//! emitter.emit();          // 30 new particles
//! emitter.update();        // every particle moves and ages one tick
//! emitter.render(&mut canvas);
//! ```

use glam::Vec2;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Surface;
use crate::color::Rgb;
use crate::config::VisualizerConfig;
use crate::particle::Particle;
use crate::shape::ParticleShape;

/// Range of each velocity component, in pixels per tick.
pub const VELOCITY_RANGE: std::ops::RangeInclusive<f32> = -2.0..=2.0;

/// Range of initial lifetimes, in ticks.
pub const LIFETIME_RANGE: std::ops::RangeInclusive<i32> = 50..=100;

/// Spawns bursts of particles and advances them.
#[derive(Debug, Clone)]
pub struct Emitter {
    position: Vec2,
    color: Rgb,
    size: f32,
    quantity: usize,
    shape: Option<ParticleShape>,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Emitter {
    /// Create an emitter at `position` emitting 50 white circles of size 5.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            color: Rgb::WHITE,
            size: 5.0,
            quantity: 50,
            shape: Some(ParticleShape::Circle),
            particles: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an emitter from the visualizer's starting settings.
    pub fn from_config(config: &VisualizerConfig) -> Self {
        let emitter = Self::new(config.spawn_position)
            .with_color(config.initial_color)
            .with_size(config.size_slider.default as f32)
            .with_quantity(config.quantity_slider.default as usize)
            .with_shape(config.initial_shape);
        match config.seed {
            Some(seed) => emitter.with_seed(seed),
            None => emitter,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_shape(mut self, shape: ParticleShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Reseed the RNG so velocities, lifetimes and colors are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Spawn `quantity` particles at the emitter position.
    ///
    /// Each particle gets its own random velocity and lifetime, and a copy
    /// of the current color, size and shape.
    pub fn emit(&mut self) {
        self.particles.reserve(self.quantity);
        for _ in 0..self.quantity {
            let velocity = Vec2::new(
                self.rng.gen_range(VELOCITY_RANGE),
                self.rng.gen_range(VELOCITY_RANGE),
            );
            let lifetime = self.rng.gen_range(LIFETIME_RANGE);
            self.particles.push(Particle::new(
                self.position,
                velocity,
                self.color,
                self.size,
                self.shape,
                lifetime,
            ));
        }
        debug!(
            "Emitted {} particles ({} live)",
            self.quantity,
            self.particles.len()
        );
    }

    /// Advance every particle one tick and drop the expired ones.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Draw every live particle, oldest first.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.particles {
            particle.render(surface);
        }
    }

    /// Remove all particles without touching the settings.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Pick a new random color, each channel uniform in `0..=255`.
    pub fn randomize_color(&mut self) -> Rgb {
        self.color = Rgb::random(&mut self.rng);
        debug!("Emitter color changed to {:?}", self.color);
        self.color
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn set_quantity(&mut self, quantity: usize) {
        self.quantity = quantity;
    }

    pub fn set_shape(&mut self, shape: Option<ParticleShape>) {
        self.shape = shape;
    }

    /// Select a shape by its dropdown label.
    ///
    /// An unknown label is kept as "no shape": particles emitted while it is
    /// active are simulated but never drawn.
    pub fn set_shape_name(&mut self, name: &str) {
        self.shape = match name.parse() {
            Ok(shape) => {
                debug!("Emitter shape changed to {}", shape);
                Some(shape)
            }
            Err(e) => {
                warn!("{}; new particles will not be drawn", e);
                None
            }
        };
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    #[inline]
    pub fn shape(&self) -> Option<ParticleShape> {
        self.shape
    }

    /// Live particles in emission order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

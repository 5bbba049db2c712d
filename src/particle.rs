//! A single emitted particle.

use glam::Vec2;

use crate::canvas::Surface;
use crate::color::Rgb;
use crate::shape::{Outline, ParticleShape};

/// A short-lived particle moving in a straight line.
///
/// Each [`update`](Particle::update) moves the particle by its velocity and
/// counts its lifetime down by one tick. Particles are normally created by
/// [`Emitter::emit`](crate::Emitter::emit).
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    color: Rgb,
    size: f32,
    /// `None` when the emitter was set to a shape name it did not recognize.
    shape: Option<ParticleShape>,
    lifetime: i32,
}

impl Particle {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        color: Rgb,
        size: f32,
        shape: Option<ParticleShape>,
        lifetime: i32,
    ) -> Self {
        Self {
            position,
            velocity,
            color,
            size,
            shape,
            lifetime,
        }
    }

    /// Advance one tick.
    #[inline]
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.lifetime -= 1;
    }

    /// Draw the particle. A particle without a known shape draws nothing.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some(shape) = self.shape else {
            return;
        };
        match shape.outline(self.position, self.size) {
            Outline::Disc { center, radius } => surface.fill_circle(center, radius, self.color),
            Outline::Rect { origin, size } => surface.fill_rect(origin, size, self.color),
            Outline::Polygon(points) => surface.fill_polygon(&points, self.color),
        }
    }

    /// Whether the particle still has lifetime left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
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
    pub fn shape(&self) -> Option<ParticleShape> {
        self.shape
    }

    /// Remaining lifetime in ticks.
    #[inline]
    pub fn lifetime(&self) -> i32 {
        self.lifetime
    }
}

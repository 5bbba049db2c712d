//! # Sparkbox
//!
//! An interactive 2D particle burst visualizer.
//!
//! A window shows a dark canvas with a control panel along the bottom. Pressing
//! "Emit Particles" spawns a burst at the canvas center; each particle drifts
//! in a straight line and disappears after a random lifetime. Sliders set the
//! size and number of particles per burst, "Change Color" picks a random
//! color, and a dropdown selects the particle shape.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sparkbox::prelude::*;
//!
//! fn main() -> Result<(), VisualizerError> {
//!     Visualizer::with_config(
//!         VisualizerConfig::new()
//!             .with_initial_shape(ParticleShape::Star)
//!             .with_seed(42),
//!     )
//!     .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles and the emitter
//!
//! A [`Particle`] moves by its velocity once per tick and counts its lifetime
//! down. The [`Emitter`] owns all live particles: [`Emitter::emit`] appends a
//! burst, [`Emitter::update`] advances and prunes them, and
//! [`Emitter::render`] draws them in emission order.
//!
//! ### Drawing
//!
//! Particles draw into anything implementing [`Surface`]. The visualizer uses
//! a [`Canvas`], a CPU pixel buffer uploaded to the GPU every frame, so the
//! whole simulation runs and can be inspected without a window:
//!
//! ```ignore
//! let mut ctx = AppContext::new(&VisualizerConfig::default());
//! ctx.tick(vec![FrameEvent::EmitPressed], SliderValues { size: 10, quantity: 30 });
//! assert_eq!(ctx.emitter().len(), 30);
//! ```
//!
//! ### Shapes
//!
//! [`ParticleShape`] selects one of five outlines: circle, square, triangle,
//! star or hexagon. Parsing any other name fails with
//! [`ShapeParseError`]; the emitter treats an unknown name as "draw nothing".
//!
//! ## Logging
//!
//! Sparkbox logs through the [`log`] facade. The bundled binary installs
//! `env_logger` at `info`; set `RUST_LOG=sparkbox=debug` to see every burst.

pub mod canvas;
pub mod color;
pub mod config;
pub mod emitter;
pub mod error;
pub mod frame;
mod gpu;
pub mod particle;
pub mod shape;
pub mod time;
pub mod ui;
mod visualizer;

pub use canvas::{Canvas, Surface};
pub use color::Rgb;
pub use config::{SliderRange, VisualizerConfig};
pub use emitter::Emitter;
pub use error::{GpuError, ShapeParseError, VisualizerError};
pub use frame::{AppContext, FrameEvent, LoopState, SliderValues};
pub use glam::{IVec2, Vec2};
pub use particle::Particle;
pub use shape::{Outline, ParticleShape};
pub use time::FrameClock;
pub use ui::ControlPanel;
pub use visualizer::Visualizer;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use sparkbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Surface};
    pub use crate::color::Rgb;
    pub use crate::config::{SliderRange, VisualizerConfig};
    pub use crate::emitter::Emitter;
    pub use crate::error::{ShapeParseError, VisualizerError};
    pub use crate::frame::{AppContext, FrameEvent, LoopState, SliderValues};
    pub use crate::particle::Particle;
    pub use crate::shape::ParticleShape;
    pub use crate::visualizer::Visualizer;
    pub use crate::{IVec2, Vec2};
}

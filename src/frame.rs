//! The per-tick frame loop logic.
//!
//! [`AppContext`] is everything the frame loop mutates: the emitter, the
//! canvas it draws into, and whether the loop is still running. The winit
//! runner feeds it one batch of [`FrameEvent`]s and the current
//! [`SliderValues`] per tick, then presents the canvas.
//!
//! A tick always runs in the same order:
//!
//! 1. Handle every pending event.
//! 2. Copy size and quantity from the sliders into the emitter.
//! 3. Advance the emitter one step.
//! 4. Clear the canvas and draw all particles.

use log::info;

use crate::canvas::{Canvas, Surface};
use crate::color::Rgb;
use crate::config::VisualizerConfig;
use crate::emitter::Emitter;

/// Discrete input delivered to the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    /// The window was asked to close.
    Quit,
    /// "Change Color" was pressed.
    ColorPressed,
    /// "Emit Particles" was pressed.
    EmitPressed,
    /// The shape dropdown changed; carries the selected label.
    ShapeSelected(String),
}

/// Slider positions, polled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderValues {
    pub size: u32,
    pub quantity: u32,
}

/// Whether the frame loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    /// Terminal: the runner exits after the current tick.
    Stopped,
}

/// Top-level application state driven by the frame loop.
#[derive(Debug)]
pub struct AppContext {
    emitter: Emitter,
    canvas: Canvas,
    background: Rgb,
    state: LoopState,
}

impl AppContext {
    pub fn new(config: &VisualizerConfig) -> Self {
        let mut canvas = Canvas::new(config.width, config.height);
        canvas.clear(config.background);
        Self {
            emitter: Emitter::from_config(config),
            canvas,
            background: config.background,
            state: LoopState::Running,
        }
    }

    /// Apply one input event.
    pub fn handle_event(&mut self, event: FrameEvent) {
        match event {
            FrameEvent::Quit => {
                if self.state == LoopState::Running {
                    info!("Quit requested");
                }
                self.state = LoopState::Stopped;
            }
            FrameEvent::ColorPressed => {
                self.emitter.randomize_color();
            }
            FrameEvent::EmitPressed => self.emitter.emit(),
            FrameEvent::ShapeSelected(name) => self.emitter.set_shape_name(&name),
        }
    }

    /// Run one full tick and return the resulting loop state.
    ///
    /// The tick completes even when a [`FrameEvent::Quit`] is among the
    /// events; the caller stops after it.
    pub fn tick<I>(&mut self, events: I, sliders: SliderValues) -> LoopState
    where
        I: IntoIterator<Item = FrameEvent>,
    {
        for event in events {
            self.handle_event(event);
        }

        self.emitter.set_size(sliders.size as f32);
        self.emitter.set_quantity(sliders.quantity as usize);

        self.emitter.update();
        self.canvas.clear(self.background);
        self.emitter.render(&mut self.canvas);

        self.state
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The frame drawn by the last tick.
    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    #[inline]
    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ParticleShape;

    const DEFAULT_SLIDERS: SliderValues = SliderValues {
        size: 10,
        quantity: 30,
    };

    fn context() -> AppContext {
        AppContext::new(&VisualizerConfig::default().with_seed(11))
    }

    #[test]
    fn test_starts_running_with_cleared_canvas() {
        let ctx = context();
        assert_eq!(ctx.state(), LoopState::Running);
        assert!(ctx.emitter().is_empty());
        assert_eq!(ctx.canvas().count(Rgb::BACKGROUND), 800 * 600);
    }

    #[test]
    fn test_idle_tick_keeps_running() {
        let mut ctx = context();
        let state = ctx.tick(Vec::new(), DEFAULT_SLIDERS);
        assert_eq!(state, LoopState::Running);
        assert_eq!(ctx.canvas().count(Rgb::BACKGROUND), 800 * 600);
    }

    #[test]
    fn test_emit_draws_particles() {
        let mut ctx = context();
        ctx.tick(vec![FrameEvent::EmitPressed], DEFAULT_SLIDERS);
        assert_eq!(ctx.emitter().len(), 30);
        assert!(ctx.canvas().count(Rgb::new(0, 128, 255)) > 0);
    }

    #[test]
    fn test_quit_still_completes_tick() {
        let mut ctx = context();
        let state = ctx.tick(
            vec![FrameEvent::Quit, FrameEvent::EmitPressed],
            DEFAULT_SLIDERS,
        );
        assert_eq!(state, LoopState::Stopped);
        // Events after the quit in the same batch were still handled
        assert_eq!(ctx.emitter().len(), 30);
    }

    #[test]
    fn test_stopped_is_terminal() {
        let mut ctx = context();
        ctx.handle_event(FrameEvent::Quit);
        assert_eq!(ctx.tick(Vec::new(), DEFAULT_SLIDERS), LoopState::Stopped);
        assert_eq!(ctx.tick(Vec::new(), DEFAULT_SLIDERS), LoopState::Stopped);
    }

    #[test]
    fn test_sliders_sync_every_tick() {
        let mut ctx = context();
        ctx.tick(Vec::new(), SliderValues { size: 3, quantity: 7 });
        assert_eq!(ctx.emitter().size(), 3.0);
        assert_eq!(ctx.emitter().quantity(), 7);

        // Direct changes are overwritten on the next tick
        ctx.emitter_mut().set_quantity(99);
        ctx.tick(Vec::new(), SliderValues { size: 3, quantity: 7 });
        assert_eq!(ctx.emitter().quantity(), 7);
    }

    #[test]
    fn test_events_apply_before_slider_sync() {
        let mut ctx = context();
        // Emission uses the quantity synced on the previous tick
        ctx.tick(Vec::new(), SliderValues { size: 4, quantity: 5 });
        ctx.tick(vec![FrameEvent::EmitPressed], SliderValues { size: 4, quantity: 12 });
        assert_eq!(ctx.emitter().len(), 5);
        assert!(ctx.emitter().particles().iter().all(|p| p.size() == 4.0));
    }

    #[test]
    fn test_color_and_shape_events() {
        let mut ctx = context();
        let before = ctx.emitter().color();
        ctx.tick(
            vec![
                FrameEvent::ColorPressed,
                FrameEvent::ShapeSelected("hexagon".into()),
            ],
            DEFAULT_SLIDERS,
        );
        assert_eq!(ctx.emitter().shape(), Some(ParticleShape::Hexagon));
        assert_ne!(ctx.emitter().color(), before);
    }

    #[test]
    fn test_unknown_shape_emits_invisible_particles() {
        let mut ctx = context();
        ctx.tick(
            vec![
                FrameEvent::ShapeSelected("pentagon".into()),
                FrameEvent::EmitPressed,
            ],
            DEFAULT_SLIDERS,
        );
        assert_eq!(ctx.emitter().len(), 30);
        assert_eq!(ctx.canvas().count(Rgb::BACKGROUND), 800 * 600);
    }
}

//! Window, event loop and frame pacing for the particle visualizer.
//!
//! [`Visualizer::run`] opens the window, acquires the GPU and then drives
//! [`AppContext::tick`] at the configured frame rate until the window is
//! closed.

use std::sync::Arc;
use std::time::Instant;

use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::VisualizerConfig;
use crate::error::VisualizerError;
use crate::frame::{AppContext, FrameEvent, LoopState};
use crate::gpu::GpuState;
use crate::time::FrameClock;
use crate::ui::ControlPanel;

/// An interactive particle burst visualizer.
///
/// # Example
///
/// ```ignore
/// use sparkbox::{Visualizer, VisualizerConfig};
///
/// Visualizer::with_config(VisualizerConfig::new().with_seed(7)).run()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    config: VisualizerConfig,
}

impl Visualizer {
    /// Create a visualizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VisualizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Open the window and run the frame loop until it is closed.
    ///
    /// Blocks the calling thread. Returns an error if the event loop, the
    /// window or the GPU could not be set up.
    pub fn run(self) -> Result<(), VisualizerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => {
                info!("Visualizer stopped after {} frames", app.clock.frame());
                Ok(())
            }
        }
    }
}

struct App {
    config: VisualizerConfig,
    context: AppContext,
    panel: ControlPanel,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    /// First fatal error, reported once the event loop returns.
    error: Option<VisualizerError>,
}

impl App {
    fn new(config: VisualizerConfig) -> Self {
        Self {
            context: AppContext::new(&config),
            panel: ControlPanel::new(&config),
            clock: FrameClock::new(config.target_fps),
            window: None,
            gpu_state: None,
            error: None,
            config,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), VisualizerError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let gpu_state = pollster::block_on(GpuState::new(
            window,
            self.config.width,
            self.config.height,
        ))?;
        self.gpu_state = Some(gpu_state);

        info!(
            "Opened {}x{} window at {} fps",
            self.config.width, self.config.height, self.config.target_fps
        );
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: VisualizerError) {
        error!("{err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    /// Stop the frame loop without waiting for another redraw.
    fn request_close(&mut self) {
        self.context.handle_event(FrameEvent::Quit);
    }

    fn should_exit(&self) -> bool {
        self.context.state() == LoopState::Stopped
    }

    /// Run one tick of the frame loop and present it.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) else {
            return;
        };

        self.clock.tick(Instant::now());

        let panel = &mut self.panel;
        let (ui_events, panel_paint) = gpu_state.egui.run(window, |ctx| panel.show(ctx));

        let state = self.context.tick(ui_events, self.panel.slider_values());

        match gpu_state.render(self.context.canvas(), &panel_paint) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, stopping");
                event_loop.exit();
                return;
            }
            Err(e) => warn!("Render error: {e:?}"),
        }

        if self.config.show_fps && self.clock.frame() % u64::from(self.config.target_fps.max(1)) == 0 {
            window.set_title(&format!("{} - {:.0} fps", self.config.title, self.clock.fps()));
        }

        if state == LoopState::Stopped {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Widgets see input first
        if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
            gpu_state.egui.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                self.request_close();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit() {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            if self.clock.is_due(Instant::now()) {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_frame()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_stops_without_redraw() {
        let mut app = App::new(VisualizerConfig::new().with_seed(3));
        assert!(!app.should_exit());

        app.request_close();
        assert!(app.should_exit());
        // No tick was needed to observe the quit
        assert_eq!(app.clock.frame(), 0);
        assert_eq!(app.context.state(), LoopState::Stopped);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut app = App::new(VisualizerConfig::new().with_seed(3));
        app.request_close();
        app.request_close();
        assert!(app.should_exit());
    }
}

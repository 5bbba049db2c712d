//! The egui layer drawn over the canvas.
//!
//! Each redraw builds the control panel in one [`EguiLayer::run`] call, then
//! [`GpuState::render`](super::GpuState::render) uploads its meshes, paints
//! them in the canvas pass and frees retired textures.

use winit::event::WindowEvent;
use winit::window::Window;

/// Tessellated panel geometry for one frame.
pub struct PanelPaint {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

pub struct EguiLayer {
    ctx: egui::Context,
    input: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl EguiLayer {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat, window: &Window) -> Self {
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals {
            window_shadow: egui::Shadow::NONE,
            popup_shadow: egui::Shadow::NONE,
            ..egui::Visuals::dark()
        });

        let input = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        // No depth buffer, single sample, no dithering
        let renderer = egui_wgpu::Renderer::new(device, target_format, None, 1, false);

        Self { ctx, input, renderer }
    }

    /// Feed a window event to egui. Returns true if a widget consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.input.on_window_event(window, event).consumed
    }

    /// Build one frame of UI with `build` and tessellate it.
    pub fn run<R>(&mut self, window: &Window, build: impl FnOnce(&egui::Context) -> R) -> (R, PanelPaint) {
        self.ctx.begin_pass(self.input.take_egui_input(window));
        let result = build(&self.ctx);
        let output = self.ctx.end_pass();

        self.input
            .handle_platform_output(window, output.platform_output);

        let paint = PanelPaint {
            primitives: self.ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        };
        (result, paint)
    }

    /// Upload new textures and vertex data ahead of the render pass.
    ///
    /// The returned command buffers must be submitted before the encoder.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        paint: &PanelPaint,
        screen: &egui_wgpu::ScreenDescriptor,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, delta) in &paint.textures.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &paint.primitives, screen)
    }

    pub fn paint(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        paint: &PanelPaint,
        screen: &egui_wgpu::ScreenDescriptor,
    ) {
        self.renderer.render(render_pass, &paint.primitives, screen);
    }

    /// Release textures egui no longer references. Call after submitting.
    pub fn free_textures(&mut self, paint: &PanelPaint) {
        for id in &paint.textures.free {
            self.renderer.free_texture(id);
        }
    }
}

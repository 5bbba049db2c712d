//! The control panel: sliders, buttons, shape dropdown and labels.
//!
//! Widgets sit at fixed positions along the bottom of the canvas. Each frame
//! [`ControlPanel::show`] draws them and reports button presses and dropdown
//! changes as [`FrameEvent`]s; slider positions are read separately with
//! [`ControlPanel::slider_values`].

use egui::{pos2, Align2, Color32, FontId, Id, LayerId, Order, Pos2};

use crate::config::{SliderRange, VisualizerConfig};
use crate::frame::{FrameEvent, SliderValues};
use crate::shape::ParticleShape;

const SLIDER_WIDTH: f32 = 200.0;
const BUTTON_SIZE: [f32; 2] = [100.0, 30.0];
const DROPDOWN_WIDTH: f32 = 120.0;

const SIZE_SLIDER_POS: Pos2 = pos2(20.0, 540.0);
const QUANTITY_SLIDER_POS: Pos2 = pos2(250.0, 540.0);
const COLOR_BUTTON_POS: Pos2 = pos2(500.0, 540.0);
const EMIT_BUTTON_POS: Pos2 = pos2(650.0, 540.0);
const SHAPE_DROPDOWN_POS: Pos2 = pos2(620.0, 500.0);
const SIZE_LABEL_POS: Pos2 = pos2(20.0, 510.0);
const QUANTITY_LABEL_POS: Pos2 = pos2(250.0, 510.0);

/// Widget state of the control panel.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    size: u32,
    quantity: u32,
    size_range: SliderRange,
    quantity_range: SliderRange,
    shape: ParticleShape,
}

impl ControlPanel {
    pub fn new(config: &VisualizerConfig) -> Self {
        Self {
            size: config.size_slider.default,
            quantity: config.quantity_slider.default,
            size_range: config.size_slider,
            quantity_range: config.quantity_slider,
            shape: config.initial_shape,
        }
    }

    /// Current slider positions.
    pub fn slider_values(&self) -> SliderValues {
        SliderValues {
            size: self.size_range.clamp(self.size),
            quantity: self.quantity_range.clamp(self.quantity),
        }
    }

    /// Shape currently selected in the dropdown.
    pub fn selected_shape(&self) -> ParticleShape {
        self.shape
    }

    /// Make `shape` the dropdown selection.
    ///
    /// Returns the event to send when the selection actually changed.
    pub fn select_shape(&mut self, shape: ParticleShape) -> Option<FrameEvent> {
        if shape == self.shape {
            return None;
        }
        self.shape = shape;
        Some(FrameEvent::ShapeSelected(shape.label().to_string()))
    }

    /// Draw the labels and widgets for this frame and collect their events.
    pub fn show(&mut self, ctx: &egui::Context) -> Vec<FrameEvent> {
        let mut events = Vec::new();

        let painter = ctx.layer_painter(LayerId::new(Order::Background, Id::new("labels")));
        for (pos, text) in [
            (SIZE_LABEL_POS, "Particle Size"),
            (QUANTITY_LABEL_POS, "Particle Quantity"),
        ] {
            painter.text(pos, Align2::LEFT_TOP, text, FontId::proportional(16.0), Color32::WHITE);
        }

        fixed_area(ctx, "size_slider", SIZE_SLIDER_POS, |ui| {
            ui.spacing_mut().slider_width = SLIDER_WIDTH;
            ui.add(
                egui::Slider::new(&mut self.size, self.size_range.min..=self.size_range.max)
                    .show_value(false),
            );
        });

        fixed_area(ctx, "quantity_slider", QUANTITY_SLIDER_POS, |ui| {
            ui.spacing_mut().slider_width = SLIDER_WIDTH;
            ui.add(
                egui::Slider::new(
                    &mut self.quantity,
                    self.quantity_range.min..=self.quantity_range.max,
                )
                .show_value(false),
            );
        });

        fixed_area(ctx, "color_button", COLOR_BUTTON_POS, |ui| {
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Change Color")).clicked() {
                events.push(FrameEvent::ColorPressed);
            }
        });

        fixed_area(ctx, "emit_button", EMIT_BUTTON_POS, |ui| {
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Emit Particles")).clicked() {
                events.push(FrameEvent::EmitPressed);
            }
        });

        fixed_area(ctx, "shape_dropdown", SHAPE_DROPDOWN_POS, |ui| {
            let mut selected = self.shape;
            egui::ComboBox::from_id_salt("shape_dropdown")
                .width(DROPDOWN_WIDTH)
                .selected_text(self.shape.label())
                .show_ui(ui, |ui| {
                    for shape in ParticleShape::ALL {
                        ui.selectable_value(&mut selected, shape, shape.label());
                    }
                });
            events.extend(self.select_shape(selected));
        });

        events
    }
}

fn fixed_area(ctx: &egui::Context, id: &str, pos: Pos2, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Area::new(Id::new(id))
        .fixed_pos(pos)
        .show(ctx, add_contents);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn run_frame(ctx: &egui::Context, panel: &mut ControlPanel, events: Vec<egui::Event>) -> Vec<FrameEvent> {
        let mut out = Vec::new();
        let _ = ctx.run(input(events), |ctx| {
            out = panel.show(ctx);
        });
        out
    }

    /// Lay the panel out, then press and release the primary button at `pos`.
    fn click(panel: &mut ControlPanel, pos: Pos2) -> Vec<FrameEvent> {
        let ctx = egui::Context::default();
        run_frame(&ctx, panel, Vec::new());
        run_frame(&ctx, panel, Vec::new());

        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        run_frame(
            &ctx,
            panel,
            vec![egui::Event::PointerMoved(pos), button(true), button(false)],
        )
    }

    #[test]
    fn test_defaults_from_config() {
        let panel = ControlPanel::new(&VisualizerConfig::default());
        assert_eq!(panel.slider_values(), SliderValues { size: 10, quantity: 30 });
        assert_eq!(panel.selected_shape(), ParticleShape::Circle);
    }

    #[test]
    fn test_idle_frame_produces_no_events() {
        let mut panel = ControlPanel::new(&VisualizerConfig::default());
        let ctx = egui::Context::default();
        assert!(run_frame(&ctx, &mut panel, Vec::new()).is_empty());
        assert_eq!(panel.slider_values(), SliderValues { size: 10, quantity: 30 });
    }

    #[test]
    fn test_slider_values_are_clamped() {
        let mut panel = ControlPanel::new(&VisualizerConfig::default());
        panel.size = 500;
        panel.quantity = 0;
        assert_eq!(panel.slider_values(), SliderValues { size: 50, quantity: 1 });
    }

    #[test]
    fn test_emit_button_click() {
        let mut panel = ControlPanel::new(&VisualizerConfig::default());
        assert_eq!(click(&mut panel, pos2(700.0, 555.0)), vec![FrameEvent::EmitPressed]);
    }

    #[test]
    fn test_color_button_click() {
        let mut panel = ControlPanel::new(&VisualizerConfig::default());
        assert_eq!(click(&mut panel, pos2(550.0, 555.0)), vec![FrameEvent::ColorPressed]);
    }

    #[test]
    fn test_click_on_empty_canvas_produces_no_events() {
        let mut panel = ControlPanel::new(&VisualizerConfig::default());
        assert!(click(&mut panel, pos2(400.0, 300.0)).is_empty());
    }

    #[test]
    fn test_select_shape_reports_changes_only() {
        let mut panel = ControlPanel::new(&VisualizerConfig::default());
        assert_eq!(panel.select_shape(ParticleShape::Circle), None);
        assert_eq!(
            panel.select_shape(ParticleShape::Hexagon),
            Some(FrameEvent::ShapeSelected("hexagon".to_string()))
        );
        assert_eq!(panel.selected_shape(), ParticleShape::Hexagon);
        assert_eq!(panel.select_shape(ParticleShape::Hexagon), None);
    }

    #[test]
    fn test_selected_shape_drives_emitter() {
        let config = VisualizerConfig::default().with_seed(5);
        let mut panel = ControlPanel::new(&config);
        let mut app = crate::frame::AppContext::new(&config);

        let events: Vec<FrameEvent> = panel
            .select_shape(ParticleShape::Star)
            .into_iter()
            .chain([FrameEvent::EmitPressed])
            .collect();
        app.tick(events, panel.slider_values());

        assert_eq!(app.emitter().shape(), Some(ParticleShape::Star));
        assert!(app
            .emitter()
            .particles()
            .iter()
            .all(|p| p.shape() == Some(ParticleShape::Star)));
    }
}

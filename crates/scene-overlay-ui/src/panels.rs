//! The overlay's built-in main menu bar and debug windows.

use egui::{Color32, Context, Id, Slider, TopBottomPanel, Ui, Window};
use scene_overlay_core::OverlayPanels;

/// State of the widget demo window, kept in egui's temp storage.
#[derive(Debug, Clone, PartialEq)]
struct DemoState {
    value: f32,
    enabled: bool,
    color: Color32,
    text: String,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            value: 0.5,
            enabled: true,
            color: Color32::from_rgb(51, 128, 204),
            text: String::from("scene-overlay"),
        }
    }
}

/// Draws the main menu bar (if enabled) and every open built-in window.
///
/// Runs inside the open frame, before any user draw listener.
pub fn show_builtin_panels(ctx: &Context, panels: &mut OverlayPanels) {
    if panels.show_main_menu {
        build_main_menu(ctx, panels);
    }

    if panels.show_demo {
        Window::new("Demo")
            .open(&mut panels.show_demo)
            .default_width(280.0)
            .show(ctx, build_demo_window);
    }

    if panels.show_metrics {
        Window::new("Metrics")
            .open(&mut panels.show_metrics)
            .vscroll(true)
            .show(ctx, |ui| {
                let dt = ui.ctx().input(|i| i.stable_dt);
                if dt > 0.0 {
                    ui.label(format!("{:.1} ms/frame ({:.0} FPS)", dt * 1000.0, 1.0 / dt));
                }
                ui.separator();
                ui.ctx().clone().inspection_ui(ui);
            });
    }

    if panels.show_style_editor {
        Window::new("Style Editor")
            .open(&mut panels.show_style_editor)
            .vscroll(true)
            .show(ctx, |ui| {
                ui.ctx().clone().settings_ui(ui);
            });
    }

    if panels.show_about {
        Window::new("About")
            .open(&mut panels.show_about)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("scene-overlay {}", env!("CARGO_PKG_VERSION")));
                ui.label("Immediate-mode UI overlay for 3D rendering hosts.");
                ui.label("UI by egui, rendered with egui-wgpu.");
            });
    }
}

fn build_main_menu(ctx: &Context, panels: &mut OverlayPanels) {
    TopBottomPanel::top("scene_overlay_main_menu").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Input", |ui| {
                ui.checkbox(&mut panels.grab_mouse, "Grab Mouse");
                ui.checkbox(&mut panels.grab_keyboard, "Grab Keyboard");
                ui.checkbox(&mut panels.draw_cursor, "Software Cursor");
            });
            ui.menu_button("Tools", |ui| {
                ui.checkbox(&mut panels.show_demo, "Demo Window");
                ui.checkbox(&mut panels.show_metrics, "Metrics/Debugger");
                ui.checkbox(&mut panels.show_style_editor, "Style Editor");
                ui.checkbox(&mut panels.show_about, "About");
            });
        });
    });
}

fn build_demo_window(ui: &mut Ui) {
    let id = Id::new("scene_overlay_demo");
    let mut state: DemoState = ui.ctx().data_mut(|d| d.get_temp(id).unwrap_or_default());

    ui.heading("Widgets");
    ui.checkbox(&mut state.enabled, "Enabled");
    ui.add_enabled(
        state.enabled,
        Slider::new(&mut state.value, 0.0..=1.0).text("value"),
    );
    ui.horizontal(|ui| {
        ui.label("Color:");
        ui.color_edit_button_srgba(&mut state.color);
    });
    ui.text_edit_singleline(&mut state.text);
    if ui.button("Reset").clicked() {
        state = DemoState::default();
    }

    ui.ctx().data_mut(|d| d.insert_temp(id, state));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ctx: &Context, panels: &mut OverlayPanels) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| show_builtin_panels(ctx, panels));
    }

    #[test]
    fn test_all_panels_draw() {
        let ctx = Context::default();
        let mut panels = OverlayPanels {
            show_main_menu: true,
            show_demo: true,
            show_metrics: true,
            show_style_editor: true,
            show_about: true,
            ..OverlayPanels::default()
        };
        run(&ctx, &mut panels);
        run(&ctx, &mut panels);
        assert!(panels.show_demo);
        assert!(panels.show_about);
    }

    #[test]
    fn test_hidden_menu_draws_nothing() {
        let ctx = Context::default();
        let mut panels = OverlayPanels::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            show_builtin_panels(ctx, &mut panels);
        });
        assert!(output.shapes.is_empty());
    }

    #[test]
    fn test_demo_state_persists() {
        let ctx = Context::default();
        let id = Id::new("scene_overlay_demo");
        let mut panels = OverlayPanels {
            show_demo: true,
            ..OverlayPanels::default()
        };
        for _ in 0..3 {
            run(&ctx, &mut panels);
            let state: Option<DemoState> = ctx.data_mut(|d| d.get_temp(id));
            assert_eq!(state, Some(DemoState::default()));
        }
    }
}

use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

use crate::LetrasApp;
use crate::model::{FontMode, Screen};

pub fn top_panel(app: &mut LetrasApp, ctx: &Context) {
    let in_game = matches!(app.screen(), Screen::Tracing | Screen::Quiz | Screen::Builder);

    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if in_game {
                if ui.button("✖ Salir").clicked() {
                    app.exit();
                }
                if ui.button("🔊 Repetir").clicked() {
                    app.replay_prompt();
                }
            }

            let font_label = match app.font_mode {
                FontMode::Print => "Aa Imprenta",
                FontMode::Script => "𝒜𝒶 Ligada",
            };
            if ui.button(font_label).clicked() {
                app.toggle_font_mode();
            }

            // Subtítulo de lo último que se ha dicho
            if let Some(caption) = app.caption() {
                ui.separator();
                ui.label(RichText::new(format!("🗣 {caption}")).italics());
            }
        });
    });
}

/// Barra inferior: estrellas y pegatinas conseguidas, y día/noche.
pub fn bottom_panel(app: &LetrasApp, ctx: &Context) {
    let (stars, max_stars) = app.star_totals();
    let stickers = app.unlocked_sticker_count();
    let dark = ctx.style().visuals.dark_mode;

    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(format!("⭐ {stars}/{max_stars}")).size(18.0));
            ui.label(RichText::new(format!("🏅 {stickers}")).size(18.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if dark { "☀ Día" } else { "🌙 Noche" };
                if ui.button(RichText::new(label).size(18.0)).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    right_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 44.0], egui::Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right_enabled, |ui| {
                ui.add_sized([btn_w, 44.0], egui::Button::new(right_label))
            })
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}

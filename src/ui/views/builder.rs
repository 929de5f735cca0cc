use egui::{Button, CentralPanel, Context, RichText, Vec2};

use crate::LetrasApp;
use crate::games::ActiveGame;
use crate::ui::helpers::{big_list_button, item_text};

pub fn ui_builder(app: &mut LetrasApp, ctx: &Context) {
    let Some(ActiveGame::Builder(builder)) = app.active_game() else {
        return;
    };
    let slots = builder.slots().to_vec();
    let pieces = builder.pieces().to_vec();
    let font_mode = app.font_mode;
    let (word, emoji) = app
        .current_item()
        .map(|item| (item.text.clone(), item.emoji.clone().unwrap_or_default()))
        .unwrap_or_default();

    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            // Modelo a copiar
            ui.label(RichText::new("Mira y construye:").size(20.0));
            ui.label(RichText::new(emoji).size(72.0));
            ui.label(item_text(&word, 40.0, font_mode));
            ui.add_space(20.0);

            // Casillas: pulsar una llena la vacía
            ui.horizontal_wrapped(|ui| {
                for (i, slot) in slots.iter().enumerate() {
                    let text = slot.as_deref().unwrap_or(" ");
                    let button = Button::new(item_text(text, 40.0, font_mode))
                        .min_size(Vec2::splat(80.0));
                    let response = ui.add_enabled(slot.is_some(), button);
                    if response.on_hover_text("Pulsa para borrar").clicked() {
                        app.clear_slot(i);
                    }
                }
            });

            ui.add_space(24.0);
            ui.separator();
            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui| {
                for piece in &pieces {
                    let label = item_text(&piece.value, 36.0, font_mode);
                    if big_list_button(ui, label, 72.0, 72.0, !piece.used) {
                        app.place_piece(piece.id);
                    }
                }
            });

            ui.add_space(24.0);
            if ui.button("⟲ Empezar de nuevo").clicked() {
                app.reset_builder();
            }
        });
    });
}

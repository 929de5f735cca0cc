use egui::{Context, RichText};

use crate::LetrasApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;

pub fn ui_victory(app: &mut LetrasApp, ctx: &Context) {
    let Some(victory) = app.victory().cloned() else {
        return;
    };

    centered_panel(ctx, 360.0, 420.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("🏆 ¡Nivel completado!").size(32.0));
            ui.add_space(12.0);

            if let Some(sticker) = &victory.sticker {
                ui.label(RichText::new(&sticker.emoji).size(96.0));
                ui.label(RichText::new(&sticker.name).size(24.0).strong());
                if !victory.newly_unlocked {
                    ui.label("¡Ya tienes todas las pegatinas!");
                }
            }
            ui.add_space(8.0);
            ui.label(RichText::new(&victory.motivation).size(22.0));
            ui.add_space(20.0);

            if big_list_button(ui, RichText::new("¡Genial!").size(24.0), width, 56.0, true) {
                app.acknowledge_victory();
            }
        });
    });
}

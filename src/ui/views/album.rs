use egui::{CentralPanel, Context, RichText, ScrollArea, Vec2};

use crate::LetrasApp;
use crate::ui::helpers::big_list_button;
use crate::view_models::StickerInfo;

const COLUMNS: usize = 4;

pub fn ui_album(app: &mut LetrasApp, ctx: &Context) {
    let stickers: Vec<StickerInfo> = app.sticker_infos();

    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("📖 Mis pegatinas").size(30.0));
            ui.add_space(16.0);

            ScrollArea::vertical().max_height(ui.available_height() - 70.0).show(ui, |ui| {
                egui::Grid::new("album_grid")
                    .spacing(Vec2::splat(18.0))
                    .show(ui, |ui| {
                        for (i, sticker) in stickers.iter().enumerate() {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(sticker.face()).size(56.0));
                                let name = if sticker.unlocked { sticker.name.as_str() } else { "???" };
                                ui.label(name);
                            });
                            if i % COLUMNS == COLUMNS - 1 {
                                ui.end_row();
                            }
                        }
                    });
            });

            ui.add_space(12.0);
            if big_list_button(ui, "⬅ Volver al mapa", 240.0, 40.0, true) {
                app.close_album();
            }
        });
    });
}

use egui::{CentralPanel, Context, RichText, ScrollArea, Vec2};

use crate::LetrasApp;
use crate::ui::helpers::{big_list_button, colored_button, hex_color};
use crate::view_models::LevelInfo;

pub fn ui_map(app: &mut LetrasApp, ctx: &Context) {
    let infos: Vec<LevelInfo> = app.level_infos();
    let owned = app.unlocked_sticker_count();
    let total = app.catalog().stickers.len();
    let augmenting = app.is_augmenting();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_width(content_width);
                ui.heading(RichText::new("Amelia Aprende Letras").size(32.0));
                ui.add_space(16.0);

                for info in &infos {
                    let label = RichText::new(format!("{}\n{}", info.label(), info.stars_text()))
                        .size(24.0);
                    if colored_button(ui, label, hex_color(&info.color), Vec2::new(content_width, 90.0)) {
                        app.select_level(info.id);
                    }
                    ui.add_space(10.0);
                }

                ui.add_space(16.0);
                if big_list_button(ui, format!("📖 Mis pegatinas ({owned}/{total})"), content_width, 44.0, true) {
                    app.open_album();
                }
                ui.add_space(8.0);

                let wand = if augmenting { "✨ Creando magia..." } else { "✨ Varita mágica" };
                if big_list_button(ui, wand, content_width, 44.0, !augmenting) {
                    app.request_content_augmentation();
                }
                if augmenting {
                    ui.spinner();
                }
            });
        });
    });
}

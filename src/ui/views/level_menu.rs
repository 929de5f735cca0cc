use egui::{Context, RichText};

use crate::LetrasApp;
use crate::model::MiniGame;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;

fn game_label(kind: MiniGame) -> &'static str {
    match kind {
        MiniGame::Builder => "🧩 Construir",
        MiniGame::Tracing => "✏️ Escribir",
        MiniGame::Quiz => "❓ Adivinar",
    }
}

pub fn ui_level_menu(app: &mut LetrasApp, ctx: &Context) {
    let Some((icon, title)) = app.current_level().map(|l| (l.icon.clone(), l.title.clone())) else {
        return;
    };
    let games = app.available_games();
    let button_h = 56.0;
    let est_height = 120.0 + (button_h + 10.0) * (games.len() as f32 + 1.0);

    centered_panel(ctx, est_height, 400.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(format!("{icon} {title}")).size(30.0));
            ui.add_space(20.0);

            for kind in games {
                let label = RichText::new(game_label(kind)).size(22.0);
                if big_list_button(ui, label, width, button_h, true) {
                    app.choose_mini_game(kind);
                    return;
                }
                ui.add_space(10.0);
            }

            ui.add_space(10.0);
            if big_list_button(ui, "⬅ Volver", width, 40.0, true) {
                app.close_level_menu();
            }
        });
    });
}

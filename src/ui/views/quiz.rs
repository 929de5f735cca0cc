use egui::{CentralPanel, Context, RichText, Vec2};

use crate::LetrasApp;
use crate::games::ActiveGame;
use crate::model::GameItem;
use crate::ui::helpers::{big_list_button, item_text};

pub fn ui_quiz(app: &mut LetrasApp, ctx: &Context) {
    let Some(ActiveGame::Quiz(quiz)) = app.active_game() else {
        return;
    };
    let question = quiz.question().unwrap_or_default();
    let options: Vec<GameItem> = quiz.visible_options().cloned().collect();
    let solved = quiz.is_solved();
    let progress = format!("{} / {}", quiz.current_index() + 1, quiz.len());
    let mistakes = quiz.mistakes();
    let font_mode = app.font_mode;

    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(progress);
            ui.heading(RichText::new(question).size(28.0));
            if mistakes > 0 && !solved {
                ui.label(RichText::new("¡Escucha bien y prueba otra vez!").italics());
            }
            ui.add_space(24.0);

            let side = 150.0;
            egui::Grid::new("quiz_options")
                .spacing(Vec2::splat(16.0))
                .show(ui, |ui| {
                    for (i, option) in options.iter().enumerate() {
                        let label = match &option.emoji {
                            Some(emoji) => item_text(&format!("{emoji}\n{}", option.text), 40.0, font_mode),
                            None => item_text(&option.text, 48.0, font_mode),
                        };
                        if big_list_button(ui, label, side, side, !solved) {
                            app.select_option(&option.id);
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            if solved {
                ui.add_space(16.0);
                ui.label(RichText::new("🎉 ¡Muy bien!").size(28.0));
            }
        });
    });
}

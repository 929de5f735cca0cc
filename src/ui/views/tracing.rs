use egui::{Align2, CentralPanel, Color32, Context, FontFamily, FontId, RichText, Sense, Shape, Stroke, Vec2};

use crate::LetrasApp;
use crate::games::{ActiveGame, TracingBoard};
use crate::model::FontMode;
use crate::ui::layout::two_button_row;

const CANVAS_SIZE: Vec2 = Vec2::new(560.0, 360.0);
const INK: Color32 = Color32::from_rgb(37, 99, 235);

pub fn ui_tracing(app: &mut LetrasApp, ctx: &Context) {
    let Some(ActiveGame::Tracing(board)) = app.active_game() else {
        return;
    };
    let board: TracingBoard = board.clone();
    let font_mode = app.font_mode;
    let count = app.current_level().map(|l| l.content.len()).unwrap_or(0);
    let index = app.item_index();

    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(format!("{} / {count}", index + 1));
            ui.heading(RichText::new("Escribe con el dedo o el ratón").size(24.0));
            ui.add_space(12.0);

            let (response, painter) = ui.allocate_painter(CANVAS_SIZE, Sense::drag());
            let rect = response.rect;
            painter.rect_filled(rect, 16.0, Color32::WHITE);

            // Guía en gris detrás de los trazos
            let guide = match font_mode {
                FontMode::Print => board.target().to_string(),
                FontMode::Script => board.target().to_lowercase(),
            };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                guide,
                FontId::new(board.font_size(), FontFamily::Proportional),
                Color32::from_gray(225),
            );

            for stroke in board.strokes() {
                if stroke.len() > 1 {
                    painter.add(Shape::line(stroke.clone(), Stroke::new(10.0, INK)));
                } else if let Some(dot) = stroke.first() {
                    painter.circle_filled(*dot, 5.0, INK);
                }
            }

            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.begin_stroke(pos);
                }
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.extend_stroke(rect.clamp(pos));
                }
            }
            if response.drag_stopped() {
                app.end_stroke();
            }

            ui.add_space(12.0);
            if board.is_validating() {
                ui.spinner();
            }
            let (clear, submit) = two_button_row(
                ui,
                CANVAS_SIZE.x,
                "🧽 Borrar",
                "✅ ¡Listo!",
                board.has_drawn() && !board.is_validating(),
            );
            if clear {
                app.clear_drawing();
            }
            if submit {
                app.submit_drawing();
            }
        });
    });
}

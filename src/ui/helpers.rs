// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

use crate::model::FontMode;

pub fn big_list_button(ui: &mut Ui, label: impl Into<RichText>, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label.into()).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón grande con el color del nivel de fondo
pub fn colored_button(ui: &mut Ui, label: RichText, fill: Color32, size: Vec2) -> bool {
    ui.add(
        Button::new(label.color(Color32::BLACK))
            .fill(fill)
            .corner_radius(16.0)
            .min_size(size),
    )
    .clicked()
}

/// `#RRGGBB` del catálogo; si no se entiende, gris claro
pub fn hex_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(Color32::LIGHT_GRAY)
}

/// Texto de un ítem según el modo de letra elegido
pub fn item_text(text: &str, size: f32, mode: FontMode) -> RichText {
    match mode {
        FontMode::Print => RichText::new(text).size(size).strong(),
        FontMode::Script => RichText::new(text.to_lowercase()).size(size).italics(),
    }
}

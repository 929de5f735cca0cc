mod helpers;
pub mod layout;
pub mod views;

use std::time::{Duration, Instant};

use crate::app::LetrasApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

/// Mientras la varita trabaja se repinta a este ritmo para recoger la respuesta
const AUGMENTATION_POLL: Duration = Duration::from_millis(150);

impl App for LetrasApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // Efectos retrasados y respuesta del generador antes de pintar
        let now = Instant::now();
        self.tick(now);
        self.poll_augmentation();

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        match self.screen() {
            Screen::Map => views::map::ui_map(self, ctx),
            Screen::LevelMenu => views::level_menu::ui_level_menu(self, ctx),
            Screen::Tracing => views::tracing::ui_tracing(self, ctx),
            Screen::Quiz => views::quiz::ui_quiz(self, ctx),
            Screen::Builder => views::builder::ui_builder(self, ctx),
            Screen::Victory => views::victory::ui_victory(self, ctx),
            Screen::StickerAlbum => views::album::ui_album(self, ctx),
        }

        // Escritura inmediata tras cada cambio de progreso
        if let Some(storage) = frame.storage_mut() {
            self.sync_storage(storage);
        }

        if let Some(due) = self.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
        if self.is_augmenting() {
            ctx.request_repaint_after(AUGMENTATION_POLL);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.sync_storage(storage);
    }
}

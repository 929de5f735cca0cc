use rand::seq::SliceRandom;

use super::*;
use crate::audio::Effect;
use crate::games::{TracingBoard, WordBuilder};
use crate::progress::MAX_SCORE;

impl LetrasApp {
    /// Un ítem bien hecho en Escribir o Construir.
    pub(crate) fn on_item_success(&mut self) {
        let Some(level) = &self.current_level else {
            return;
        };
        if level.is_last(self.item_index) {
            let id = level.id;
            self.complete_level(id, MAX_SCORE);
        } else {
            let delay = self.timing.advance();
            self.schedule(delay, Deferred::NextItem);
        }
    }

    /// Carga el siguiente ítem en el minijuego actual
    pub(crate) fn advance_item(&mut self) {
        let Some(level) = &self.current_level else {
            return;
        };
        let next = self.item_index + 1;
        let Some(item) = level.item(next).cloned() else {
            return;
        };
        self.item_index = next;
        match &mut self.active {
            Some(ActiveGame::Tracing(board)) => *board = TracingBoard::new(&item.text),
            Some(ActiveGame::Builder(builder)) => {
                *builder = WordBuilder::new(&item, &mut self.rng)
            }
            // Adivinar avanza por su cuenta
            Some(ActiveGame::Quiz(_)) | None => {}
        }
        self.replay_prompt();
    }

    /// Fin de nivel: puntuación (gana la mayor), pegatina y pantalla de victoria.
    pub fn complete_level(&mut self, level_id: u32, score: u8) {
        if self.progress.record_score(level_id, score) {
            log::info!("Nivel {level_id}: nueva mejor puntuación {score}");
        }
        self.persist();

        let (sticker, newly_unlocked) = match self.unlock_sticker() {
            Some(sticker) => {
                self.persist();
                (Some(sticker), true)
            }
            // Ya estaban todas: se enseña la primera sin tocar el progreso
            None => (self.catalog.stickers.first().cloned(), false),
        };

        let motivation = MOTIVATIONS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(MOTIVATIONS[0])
            .to_string();

        self.audio.play_effect(Effect::Success);
        self.speak(&format!("¡Has ganado un premio! {motivation}"));

        self.active = None;
        self.victory = Some(Victory {
            level_id,
            sticker,
            newly_unlocked,
            motivation,
        });
        self.state = Screen::Victory;
        self.epoch += 1;
    }

    /// Elige al azar una pegatina que el niño aún no tenga.
    pub(crate) fn unlock_sticker(&mut self) -> Option<Sticker> {
        let locked: Vec<&Sticker> = self
            .catalog
            .stickers
            .iter()
            .filter(|s| !self.progress.has_sticker(&s.id))
            .collect();
        let mut chosen = locked.choose(&mut self.rng).map(|s| (*s).clone())?;
        self.progress.add_sticker(&chosen.id);
        chosen.unlocked = true;
        log::info!("Pegatina desbloqueada: {} {}", chosen.emoji, chosen.name);
        Some(chosen)
    }
}

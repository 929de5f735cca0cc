use super::*;
use crate::games::{QuizGame, TracingBoard, WordBuilder};
use crate::model::MiniGame;

impl LetrasApp {
    /// Abre el menú del nivel. Un id desconocido no hace nada.
    pub fn select_level(&mut self, level_id: u32) -> bool {
        if !matches!(self.state, Screen::Map | Screen::LevelMenu) {
            log::debug!("select_level({level_id}) ignorado en {:?}", self.state);
            return false;
        }
        let Some(level) = self.catalog.level(level_id).cloned() else {
            log::debug!("Nivel {level_id} no existe");
            return false;
        };
        self.current_level = Some(level);
        self.item_index = 0;
        self.state = Screen::LevelMenu;
        true
    }

    /// "Volver" desde el menú del nivel
    pub fn close_level_menu(&mut self) {
        if self.state != Screen::LevelMenu {
            return;
        }
        self.current_level = None;
        self.state = Screen::Map;
    }

    pub fn available_games(&self) -> Vec<MiniGame> {
        let Some(level) = &self.current_level else {
            return Vec::new();
        };
        let mut games = Vec::new();
        if level.level_type.allows_builder() {
            games.push(MiniGame::Builder);
        }
        games.push(MiniGame::Tracing);
        games.push(MiniGame::Quiz);
        games
    }

    pub fn choose_mini_game(&mut self, kind: MiniGame) -> bool {
        if self.state != Screen::LevelMenu || !self.available_games().contains(&kind) {
            return false;
        }
        let Some(level) = self.current_level.clone() else {
            return false;
        };
        if level.content.is_empty() {
            log::warn!("Nivel {} sin contenido", level.id);
            return false;
        }

        self.item_index = 0;
        self.epoch += 1;
        self.active = Some(match kind {
            MiniGame::Tracing => ActiveGame::Tracing(TracingBoard::new(&level.content[0].text)),
            MiniGame::Quiz => ActiveGame::Quiz(QuizGame::new(level.content.clone(), &mut self.rng)),
            MiniGame::Builder => {
                ActiveGame::Builder(WordBuilder::new(&level.content[0], &mut self.rng))
            }
        });
        self.state = kind.into();
        log::info!("Nivel {}: empieza {kind:?}", level.id);
        self.replay_prompt();
        true
    }

    /// Salir del minijuego: se pierde el ítem en curso, el progreso no cambia.
    pub fn exit(&mut self) {
        if !matches!(self.state, Screen::Tracing | Screen::Quiz | Screen::Builder) {
            return;
        }
        self.active = None;
        self.item_index = 0;
        self.current_level = None;
        self.epoch += 1;
        self.state = Screen::Map;
    }

    pub fn acknowledge_victory(&mut self) {
        if self.state != Screen::Victory {
            return;
        }
        self.victory = None;
        self.current_level = None;
        self.item_index = 0;
        self.epoch += 1;
        self.state = Screen::Map;
    }

    pub fn open_album(&mut self) {
        if self.state == Screen::Map {
            self.state = Screen::StickerAlbum;
        }
    }

    pub fn close_album(&mut self) {
        if self.state == Screen::StickerAlbum {
            self.state = Screen::Map;
        }
    }

    pub fn toggle_font_mode(&mut self) {
        self.font_mode = self.font_mode.toggled();
    }

    /// Vuelve a decir la pregunta del ítem actual
    pub fn replay_prompt(&mut self) {
        let text = match &self.active {
            Some(ActiveGame::Quiz(quiz)) => quiz.question(),
            Some(ActiveGame::Builder(_)) => self.current_item().map(|item| item.prompt.clone()),
            Some(ActiveGame::Tracing(_)) | None => None,
        };
        if let Some(text) = text {
            self.speak(&text);
        }
    }
}

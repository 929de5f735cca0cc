use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LevelType {
    Letters,
    Syllables,
    Words,
    Stories,
}

impl LevelType {
    /// El juego de construir no tiene sentido con letras sueltas
    pub fn allows_builder(self) -> bool {
        !matches!(self, LevelType::Letters)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameItem {
    #[serde(default)]
    pub id: String,
    pub text: String, // Lo que se ve ("MA", "SOL")
    #[serde(default)]
    pub phonetic: String, // Cómo suena
    #[serde(default)]
    pub prompt: String, // Pregunta de introducción
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_parts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl GameItem {
    /// Piezas sin los separadores de espacio, en orden.
    pub fn letter_parts(&self) -> Vec<String> {
        self.construction_parts
            .iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect()
    }

    /// `constructionParts` sin espacios debe reconstruir `text` (ignorando mayúsculas).
    /// Un ítem sin piezas es válido.
    pub fn parts_match_text(&self) -> bool {
        if self.construction_parts.is_none() {
            return true;
        }
        let built: String = self.letter_parts().concat().to_uppercase();
        let target: String = self
            .text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        built == target
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelData {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "type")]
    pub level_type: LevelType,
    pub content: Vec<GameItem>,
}

impl LevelData {
    pub fn item(&self, index: usize) -> Option<&GameItem> {
        self.content.get(index)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.content.len()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Sticker {
    #[serde(default)]
    pub id: String,
    pub emoji: String,
    pub name: String,
    // Solo para mostrar; el estado real vive en UserProgress
    #[serde(default)]
    pub unlocked: bool,
}

/// Niveles y pegatinas disponibles. Solo cambia a través de la magia (IA).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub levels: Vec<LevelData>,
    pub stickers: Vec<Sticker>,
}

impl Catalog {
    pub fn level(&self, id: u32) -> Option<&LevelData> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn sticker(&self, id: &str) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MiniGame {
    Tracing, // "Escribir"
    Quiz,    // "Adivinar"
    Builder, // "Construir"
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Map,
    LevelMenu,
    Tracing,
    Quiz,
    Builder,
    Victory,
    StickerAlbum,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Map
    }
}

impl From<MiniGame> for Screen {
    fn from(game: MiniGame) -> Self {
        match game {
            MiniGame::Tracing => Screen::Tracing,
            MiniGame::Quiz => Screen::Quiz,
            MiniGame::Builder => Screen::Builder,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontMode {
    #[default]
    Print,
    Script,
}

impl FontMode {
    pub fn toggled(self) -> Self {
        match self {
            FontMode::Print => FontMode::Script,
            FontMode::Script => FontMode::Print,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, parts: Option<&[&str]>) -> GameItem {
        GameItem {
            id: text.to_lowercase(),
            text: text.into(),
            phonetic: text.to_lowercase(),
            prompt: format!("La palabra {text}"),
            construction_parts: parts.map(|p| p.iter().map(|s| s.to_string()).collect()),
            emoji: None,
        }
    }

    #[test]
    fn parts_match_text_ignores_spaces_and_case() {
        let story = item("EL OSO", Some(&["e", "L", " ", "O", "S", "O"]));
        assert!(story.parts_match_text());
        assert_eq!(story.letter_parts(), vec!["e", "L", "O", "S", "O"]);
    }

    #[test]
    fn parts_mismatch_is_detected() {
        assert!(!item("SOL", Some(&["S", "O"])).parts_match_text());
        assert!(item("SOL", None).parts_match_text());
    }

    #[test]
    fn letters_do_not_allow_builder() {
        assert!(!LevelType::Letters.allows_builder());
        assert!(LevelType::Stories.allows_builder());
    }
}

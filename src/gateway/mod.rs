//! Frontera con el generador de contenido (IA).
//!
//! La sesión solo ve `Option<MagicBundle>`: `None` es la única señal negativa.
//! Ningún error cruza esta frontera.

pub mod gemini;

use serde::{Deserialize, Serialize};

use crate::model::{GameItem, Sticker};

pub use gemini::GeminiGenerator;

/// Lote extra generado: ítems nuevos por tipo de nivel y una pegatina.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MagicBundle {
    #[serde(default)]
    pub syllables: Vec<GameItem>,
    #[serde(default)]
    pub words: Vec<GameItem>,
    #[serde(default)]
    pub stories: Vec<GameItem>,
    pub new_sticker: Sticker,
}

pub trait ContentGenerator: Send + Sync {
    /// Pide un lote temático. `None` = no disponible.
    fn generate(&self) -> Option<MagicBundle>;
}

/// Sin credenciales ni red: siempre "no disponible".
pub struct OfflineGenerator;

impl ContentGenerator for OfflineGenerator {
    fn generate(&self) -> Option<MagicBundle> {
        log::info!("Generador sin conexión: no hay contenido nuevo");
        None
    }
}

/// Devuelve siempre el mismo resultado. Útil para demos sin red.
pub struct StaticGenerator(pub Option<MagicBundle>);

impl ContentGenerator for StaticGenerator {
    fn generate(&self) -> Option<MagicBundle> {
        self.0.clone()
    }
}

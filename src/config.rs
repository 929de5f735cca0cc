use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "aprende_letras.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Carpeta donde se guarda el progreso
    pub progress_dir: PathBuf,
    pub gemini: GeminiConfig,
    pub timing: FeedbackTiming,
    pub voice: VoiceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            progress_dir: PathBuf::from("."),
            gemini: GeminiConfig::default(),
            timing: FeedbackTiming::default(),
            voice: VoiceConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".into(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".into(),
        }
    }
}

/// Pausas cosméticas entre la decisión y el avance (ms)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTiming {
    pub advance_ms: u64,
    pub builder_feedback_ms: u64,
    pub evaluation_ms: u64,
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            advance_ms: 1500,
            builder_feedback_ms: 500,
            evaluation_ms: 800,
        }
    }
}

impl FeedbackTiming {
    /// Sin pausas, para tests y ejecuciones sin ventana
    pub fn instant() -> Self {
        Self {
            advance_ms: 0,
            builder_feedback_ms: 0,
            evaluation_ms: 0,
        }
    }

    pub fn advance(&self) -> Duration {
        Duration::from_millis(self.advance_ms)
    }

    pub fn builder_feedback(&self) -> Duration {
        Duration::from_millis(self.builder_feedback_ms)
    }

    pub fn evaluation(&self) -> Duration {
        Duration::from_millis(self.evaluation_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            locale: "es-ES".into(),
            rate: 0.85, // un poco más lento para niños
            pitch: 1.1,
        }
    }
}

impl AppConfig {
    /// Lee el YAML (si existe) y aplica las variables de entorno encima.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("APRENDE_LETRAS_CONFIG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")) {
            self.gemini.api_key = Some(key);
        }
        if let Some(dir) = non_empty("APRENDE_LETRAS_PROGRESS_DIR") {
            self.progress_dir = PathBuf::from(dir);
        }
    }
}

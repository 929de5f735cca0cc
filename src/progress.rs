use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Clave fija bajo la que se guarda todo el progreso
pub const PROGRESS_KEY: &str = "aprende_letras_progress_v2";

pub const MAX_SCORE: u8 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    // Reservado: hoy todos los niveles están abiertos
    pub unlocked_levels: u32,
    pub stickers: Vec<String>, // ids en orden de desbloqueo
    pub level_scores: BTreeMap<u32, u8>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            unlocked_levels: 99,
            stickers: Vec::new(),
            level_scores: BTreeMap::new(),
        }
    }
}

impl UserProgress {
    pub fn score(&self, level_id: u32) -> u8 {
        self.level_scores.get(&level_id).copied().unwrap_or(0)
    }

    /// Guarda la puntuación solo si mejora la anterior. Devuelve `true` si cambió.
    pub fn record_score(&mut self, level_id: u32, score: u8) -> bool {
        let score = score.min(MAX_SCORE);
        let best = self.level_scores.entry(level_id).or_insert(0);
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }

    pub fn has_sticker(&self, id: &str) -> bool {
        self.stickers.iter().any(|s| s == id)
    }

    pub fn add_sticker(&mut self, id: &str) -> bool {
        if self.has_sticker(id) {
            return false;
        }
        self.stickers.push(id.to_string());
        true
    }
}

/// Almacén clave-valor de texto (lo mínimo que necesita el progreso)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Un fichero `<clave>.json` por clave dentro de una carpeta.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, value).map_err(|source| StoreError::Io { path, source })
    }
}

#[derive(Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct Mirror {
    values: HashMap<String, String>,
    dirty: bool,
}

/// Almacenamiento de eframe. eframe solo lo presta al arrancar y durante
/// cada frame, así que se guarda una copia y se vuelca con `flush_into`.
/// Los clones comparten la misma copia.
#[derive(Clone, Default)]
pub struct EframeStore {
    mirror: Arc<Mutex<Mirror>>,
}

impl EframeStore {
    /// Copia lo que ya hubiera guardado bajo `PROGRESS_KEY`.
    pub fn seeded(storage: Option<&dyn eframe::Storage>) -> Self {
        let store = Self::default();
        if let (Some(storage), Ok(mut mirror)) = (storage, store.mirror.lock()) {
            if let Some(text) = storage.get_string(PROGRESS_KEY) {
                mirror.values.insert(PROGRESS_KEY.to_string(), text);
            }
        }
        store
    }

    pub fn is_dirty(&self) -> bool {
        self.mirror.lock().map(|m| m.dirty).unwrap_or(false)
    }

    /// Escribe los cambios pendientes en eframe. Devuelve `true` si había alguno.
    pub fn flush_into(&self, storage: &mut dyn eframe::Storage) -> bool {
        let Ok(mut mirror) = self.mirror.lock() else {
            return false;
        };
        if !mirror.dirty {
            return false;
        }
        for (key, value) in &mirror.values {
            storage.set_string(key, value.clone());
        }
        storage.flush();
        mirror.dirty = false;
        log::debug!("Progreso volcado al almacenamiento de eframe");
        true
    }
}

impl KeyValueStore for EframeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.mirror.lock().ok()?.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut mirror = self.mirror.lock().map_err(|_| StoreError::Poisoned)?;
        mirror.values.insert(key.to_string(), value.to_string());
        mirror.dirty = true;
        Ok(())
    }
}

/// Lee y escribe `UserProgress` completo bajo `PROGRESS_KEY`.
pub struct ProgressStore {
    backend: Box<dyn KeyValueStore>,
}

impl ProgressStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    /// Sin datos o con datos corruptos se empieza de cero.
    pub fn load(&self) -> UserProgress {
        let Some(text) = self.backend.get(PROGRESS_KEY) else {
            log::info!("No hay progreso guardado, empezamos de cero");
            return UserProgress::default();
        };
        match serde_json::from_str(&text) {
            Ok(progress) => progress,
            Err(err) => {
                log::warn!("Progreso guardado ilegible ({err}), empezamos de cero");
                UserProgress::default()
            }
        }
    }

    pub fn try_save(&mut self, progress: &UserProgress) -> Result<(), StoreError> {
        let json = serde_json::to_string(progress)?;
        self.backend.set(PROGRESS_KEY, &json)
    }

    /// Escritura completa "dispara y olvida": los fallos solo se registran.
    pub fn save(&mut self, progress: &UserProgress) {
        if let Err(err) = self.try_save(progress) {
            log::error!("No se pudo guardar el progreso: {err}");
        }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }
}

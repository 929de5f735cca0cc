use std::sync::Arc;
use std::sync::mpsc::Receiver;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::audio::{AudioOutput, LogAudio};
use crate::config::{AppConfig, FeedbackTiming};
use crate::data::load_catalog;
use crate::error::CatalogError;
use crate::games::{ActiveGame, EncouragingEvaluator, HandwritingEvaluator};
use crate::gateway::{ContentGenerator, GeminiGenerator, MagicBundle, OfflineGenerator};
use crate::model::{Catalog, FontMode, GameItem, LevelData, Screen, Sticker};
use crate::progress::{EframeStore, FileStore, ProgressStore, UserProgress};

// Submódulos
pub mod augmentation;
pub mod completion;
pub mod minigames;
pub mod navigation;
pub mod scheduler;
pub mod view_models;


pub use crate::view_models::{LevelInfo, StickerInfo};
pub use scheduler::Deferred;

const MOTIVATIONS: [&str; 5] = [
    "¡Eres muy inteligente!",
    "¡Aprendes súper rápido!",
    "¡Sigue así, campeón/a!",
    "¡Lo has logrado!",
    "¡Qué gran esfuerzo!",
];

/// Lo que enseña el modal de victoria
#[derive(Clone, Debug, PartialEq)]
pub struct Victory {
    pub level_id: u32,
    pub sticker: Option<Sticker>,
    /// `false` si ya estaban todas y se muestra la de reserva
    pub newly_unlocked: bool,
    pub motivation: String,
}

/// Foto de la sesión: un efecto retrasado solo se aplica si sigue igual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionMark {
    pub screen: Screen,
    pub level_id: Option<u32>,
    pub item_index: usize,
    pub epoch: u64,
}

/// Controlador de sesión: única fuente de verdad de pantalla, nivel e ítem.
pub struct LetrasApp {
    catalog: Catalog,
    progress: UserProgress,
    store: ProgressStore,
    state: Screen,
    pub font_mode: FontMode,
    current_level: Option<LevelData>,
    item_index: usize,
    active: Option<ActiveGame>,
    victory: Option<Victory>,
    epoch: u64,
    pending: Vec<scheduler::Scheduled>,
    timing: FeedbackTiming,
    rng: StdRng,
    audio: Box<dyn AudioOutput>,
    evaluator: Box<dyn HandwritingEvaluator>,
    generator: Arc<dyn ContentGenerator>,
    augmentation: Option<Receiver<Option<MagicBundle>>>,
    eframe_store: Option<EframeStore>,
}

impl LetrasApp {
    /// Arranque normal: catálogo embebido y generador Gemini. El progreso va
    /// al almacenamiento de eframe si lo hay y si no a `progress_dir`.
    pub fn new(
        config: &AppConfig,
        storage: Option<&dyn eframe::Storage>,
    ) -> Result<Self, CatalogError> {
        let catalog = load_catalog()?;
        let eframe_store = storage.map(|s| EframeStore::seeded(Some(s)));
        let store = match &eframe_store {
            Some(handle) => ProgressStore::new(Box::new(handle.clone())),
            None => ProgressStore::new(Box::new(FileStore::new(&config.progress_dir))),
        };
        let generator: Arc<dyn ContentGenerator> = {
            let gemini = GeminiGenerator::from_config(&config.gemini);
            if gemini.is_configured() {
                Arc::new(gemini)
            } else {
                log::warn!("API_KEY no configurada. Modo sin conexión.");
                Arc::new(OfflineGenerator)
            }
        };

        Ok(Self::from_parts(
            catalog,
            store,
            Box::new(LogAudio::new(config.voice.clone())),
            config.timing.clone(),
        )
        .with_generator(generator)
        .with_eframe_store(eframe_store))
    }

    /// Lee el progreso una sola vez; el resto de colaboradores van por defecto.
    pub fn from_parts(
        catalog: Catalog,
        store: ProgressStore,
        audio: Box<dyn AudioOutput>,
        timing: FeedbackTiming,
    ) -> Self {
        let progress = store.load();
        Self {
            catalog,
            progress,
            store,
            state: Screen::Map,
            font_mode: FontMode::default(),
            current_level: None,
            item_index: 0,
            active: None,
            victory: None,
            epoch: 0,
            pending: Vec::new(),
            timing,
            rng: StdRng::from_entropy(),
            audio,
            evaluator: Box::new(EncouragingEvaluator::new()),
            generator: Arc::new(OfflineGenerator),
            augmentation: None,
            eframe_store: None,
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn ContentGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_eframe_store(mut self, store: Option<EframeStore>) -> Self {
        self.eframe_store = store;
        self
    }

    /// Vuelca a eframe lo que el progreso haya cambiado desde la última vez.
    pub fn sync_storage(&self, storage: &mut dyn eframe::Storage) -> bool {
        self.eframe_store
            .as_ref()
            .is_some_and(|store| store.flush_into(storage))
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn HandwritingEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    // Accesores de solo lectura
    pub fn screen(&self) -> Screen {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn current_level(&self) -> Option<&LevelData> {
        self.current_level.as_ref()
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// Ítem en juego del nivel abierto
    pub fn current_item(&self) -> Option<&GameItem> {
        self.current_level.as_ref()?.item(self.item_index)
    }

    pub fn active_game(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    pub fn victory(&self) -> Option<&Victory> {
        self.victory.as_ref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.audio.caption()
    }

    pub fn mark(&self) -> SessionMark {
        SessionMark {
            screen: self.state,
            level_id: self.current_level.as_ref().map(|l| l.id),
            item_index: self.item_index,
            epoch: self.epoch,
        }
    }

    fn persist(&mut self) {
        self.store.save(&self.progress);
    }

    fn speak(&mut self, text: &str) {
        self.audio.speak(text);
    }
}

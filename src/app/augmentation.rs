use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use super::*;
use crate::audio::Effect;
use crate::data::merge_bundle;

impl LetrasApp {
    pub fn is_augmenting(&self) -> bool {
        self.augmentation.is_some()
    }

    /// Pide contenido extra en segundo plano. Si ya hay una petición en
    /// curso no hace nada.
    pub fn request_content_augmentation(&mut self) -> bool {
        if self.augmentation.is_some() {
            log::debug!("Varita mágica ocupada; petición ignorada");
            return false;
        }
        self.audio.play_effect(Effect::Pop);
        self.speak("¡Magia! Creando cosas nuevas para ti...");

        let (tx, rx) = mpsc::channel();
        let generator = Arc::clone(&self.generator);
        thread::spawn(move || {
            let _ = tx.send(generator.generate());
        });
        self.augmentation = Some(rx);
        true
    }

    /// Llamar en cada frame. Devuelve `true` si la petición terminó ahora.
    pub fn poll_augmentation(&mut self) -> bool {
        let Some(rx) = &self.augmentation else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                log::error!("El hilo del generador terminó sin responder");
                None
            }
        };
        self.augmentation = None;
        self.apply_augmentation(result);
        true
    }

    /// Todo o nada: sin lote el catálogo no cambia.
    pub fn apply_augmentation(&mut self, bundle: Option<MagicBundle>) {
        match bundle {
            Some(bundle) => {
                let report = merge_bundle(&mut self.catalog, bundle);
                log::info!(
                    "Contenido mágico: {} ítems nuevos, {} descartados, pegatina {}",
                    report.added_items,
                    report.rejected_items,
                    report.sticker_id
                );
                self.audio.play_effect(Effect::Success);
                if report.added_items > 0 {
                    self.speak("¡Listo! He creado nuevas palabras y un premio especial.");
                } else {
                    self.speak("¡Listo! Tienes un premio especial nuevo.");
                }
            }
            None => {
                log::warn!("Generador no disponible");
                self.speak("Ups, la varita mágica descansa.");
            }
        }
    }
}

use std::sync::{Arc, Mutex};

use crate::config::VoiceConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Success,
    Fail,
    Pop,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AudioEvent {
    Speak(String),
    Effect(Effect),
}

/// Voz y efectos. Todo es "dispara y olvida".
pub trait AudioOutput {
    /// Empezar a hablar cancela lo que se estuviera diciendo.
    fn speak(&mut self, text: &str);
    fn play_effect(&mut self, effect: Effect);
    /// Lo último que se ha dicho (se muestra como subtítulo)
    fn caption(&self) -> Option<&str>;
}

/// Sin motor de voz: registra en el log y guarda el subtítulo.
pub struct LogAudio {
    voice: VoiceConfig,
    current: Option<String>,
}

impl LogAudio {
    pub fn new(voice: VoiceConfig) -> Self {
        Self {
            voice,
            current: None,
        }
    }

    /// Idioma, velocidad y tono con los que se habla
    pub fn voice(&self) -> &VoiceConfig {
        &self.voice
    }
}

impl AudioOutput for LogAudio {
    fn speak(&mut self, text: &str) {
        if let Some(previous) = self.current.take() {
            log::debug!("Voz cancelada: {previous}");
        }
        log::info!(
            "🔊 [{} x{:.2} tono {:.2}] {text}",
            self.voice.locale,
            self.voice.rate,
            self.voice.pitch
        );
        self.current = Some(text.to_string());
    }

    fn play_effect(&mut self, effect: Effect) {
        log::debug!("Efecto {effect:?}");
    }

    fn caption(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Guarda todo lo que suena; se puede clonar para inspeccionarlo desde fuera.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    events: Arc<Mutex<Vec<AudioEvent>>>,
    current: Option<String>,
}

impl RecordingAudio {
    pub fn events(&self) -> Vec<AudioEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                AudioEvent::Speak(text) => Some(text),
                AudioEvent::Effect(_) => None,
            })
            .collect()
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                AudioEvent::Effect(effect) => Some(effect),
                AudioEvent::Speak(_) => None,
            })
            .collect()
    }

    fn push(&self, event: AudioEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl AudioOutput for RecordingAudio {
    fn speak(&mut self, text: &str) {
        self.current = Some(text.to_string());
        self.push(AudioEvent::Speak(text.to_string()));
    }

    fn play_effect(&mut self, effect: Effect) {
        self.push(AudioEvent::Effect(effect));
    }

    fn caption(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

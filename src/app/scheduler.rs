use std::time::{Duration, Instant};

use super::*;
use crate::games::{Evaluation, Verdict};

/// Segunda fase de una acción: lo que ocurre tras la pausa de feedback.
#[derive(Clone, Debug, PartialEq)]
pub enum Deferred {
    NextItem,
    BuilderFeedback(Verdict),
    TracingResult(Evaluation),
    QuizAdvance,
}

#[derive(Clone, Debug)]
pub(crate) struct Scheduled {
    pub due: Instant,
    pub mark: SessionMark,
    pub effect: Deferred,
}

impl LetrasApp {
    pub(crate) fn schedule(&mut self, delay: Duration, effect: Deferred) {
        let mark = self.mark();
        log::trace!("Programado {effect:?} en {delay:?}");
        self.pending.push(Scheduled {
            due: Instant::now() + delay,
            mark,
            effect,
        });
    }

    /// Ejecuta lo que ya venció. Si la sesión cambió desde que se programó,
    /// el efecto se tira sin tocar nada.
    pub fn tick(&mut self, now: Instant) {
        let (due, rest): (Vec<Scheduled>, Vec<Scheduled>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;

        for scheduled in due {
            if scheduled.mark != self.mark() {
                log::debug!("Descartado {:?}: la sesión cambió", scheduled.effect);
                continue;
            }
            self.run_deferred(scheduled.effect);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Cuándo vence lo próximo, para pedir el repintado a tiempo
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    fn run_deferred(&mut self, effect: Deferred) {
        match effect {
            Deferred::NextItem => self.advance_item(),
            Deferred::BuilderFeedback(verdict) => self.finish_builder_item(verdict),
            Deferred::TracingResult(evaluation) => self.finish_tracing_item(evaluation),
            Deferred::QuizAdvance => self.advance_quiz(),
        }
    }
}

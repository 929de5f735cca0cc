use egui::Pos2;

use super::*;
use crate::audio::Effect;
use crate::games::{Advance, Evaluation, PlaceOutcome, Selection, Verdict};

impl LetrasApp {
    fn builder_mut(&mut self) -> Option<&mut crate::games::WordBuilder> {
        match &mut self.active {
            Some(ActiveGame::Builder(builder)) if self.state == Screen::Builder => Some(builder),
            _ => None,
        }
    }

    fn quiz_mut(&mut self) -> Option<&mut crate::games::QuizGame> {
        match &mut self.active {
            Some(ActiveGame::Quiz(quiz)) if self.state == Screen::Quiz => Some(quiz),
            _ => None,
        }
    }

    fn board_mut(&mut self) -> Option<&mut crate::games::TracingBoard> {
        match &mut self.active {
            Some(ActiveGame::Tracing(board)) if self.state == Screen::Tracing => Some(board),
            _ => None,
        }
    }

    // ---------- Construir ----------

    pub fn place_piece(&mut self, piece_id: usize) -> PlaceOutcome {
        let Some(builder) = self.builder_mut() else {
            return PlaceOutcome::Ignored;
        };
        let outcome = builder.place_piece(piece_id);
        let value = builder
            .pieces()
            .iter()
            .find(|p| p.id == piece_id)
            .map(|p| p.value.clone());

        if outcome != PlaceOutcome::Ignored {
            self.audio.play_effect(Effect::Pop);
            if let Some(value) = value {
                self.speak(&value);
            }
        }
        if let PlaceOutcome::Completed { verdict, .. } = outcome {
            let delay = self.timing.builder_feedback();
            self.schedule(delay, Deferred::BuilderFeedback(verdict));
        }
        outcome
    }

    pub fn clear_slot(&mut self, index: usize) -> bool {
        let Some(builder) = self.builder_mut() else {
            return false;
        };
        if builder.clear_slot(index).is_none() {
            return false;
        }
        self.audio.play_effect(Effect::Pop);
        self.speak("Borrado");
        true
    }

    pub fn reset_builder(&mut self) {
        let Some(builder) = self.builder_mut() else {
            return;
        };
        builder.reset();
        self.audio.play_effect(Effect::Pop);
    }

    pub(crate) fn finish_builder_item(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => {
                let phonetic = self
                    .current_item()
                    .map(|item| item.phonetic.clone())
                    .unwrap_or_default();
                self.audio.play_effect(Effect::Success);
                self.speak(&format!("¡Excelente! {phonetic}"));
                self.on_item_success();
            }
            Verdict::Incorrect => {
                // Las casillas se quedan llenas hasta que el niño borre
                self.audio.play_effect(Effect::Fail);
                self.speak("Casi casi, inténtalo de nuevo.");
            }
        }
    }

    // ---------- Adivinar ----------

    pub fn select_option(&mut self, item_id: &str) -> Selection {
        let Some(quiz) = self.quiz_mut() else {
            return Selection::Ignored;
        };
        let selection = quiz.select_option(item_id);
        match &selection {
            Selection::Ignored => {}
            Selection::Correct { .. } => {
                self.audio.play_effect(Effect::Success);
                self.speak("¡Muy bien!");
                let delay = self.timing.advance();
                self.schedule(delay, Deferred::QuizAdvance);
            }
            Selection::Wrong { phonetic, .. } => {
                self.audio.play_effect(Effect::Fail);
                self.speak(phonetic);
            }
        }
        selection
    }

    pub(crate) fn advance_quiz(&mut self) {
        let Some(level_id) = self.current_level.as_ref().map(|l| l.id) else {
            return;
        };
        let advance = match &mut self.active {
            Some(ActiveGame::Quiz(quiz)) => quiz.advance(&mut self.rng),
            _ => None,
        };
        match advance {
            Some(Advance::NextItem(index)) => {
                self.item_index = index;
                self.replay_prompt();
            }
            Some(Advance::Finished { score }) => self.complete_level(level_id, score),
            None => {}
        }
    }

    // ---------- Escribir ----------

    pub fn begin_stroke(&mut self, at: Pos2) {
        if let Some(board) = self.board_mut() {
            board.begin_stroke(at);
        }
    }

    pub fn extend_stroke(&mut self, to: Pos2) {
        if let Some(board) = self.board_mut() {
            board.extend_stroke(to);
        }
    }

    pub fn end_stroke(&mut self) {
        if let Some(board) = self.board_mut() {
            board.end_stroke();
        }
    }

    pub fn clear_drawing(&mut self) -> bool {
        let cleared = self.board_mut().is_some_and(|board| board.clear());
        if cleared {
            self.audio.play_effect(Effect::Pop);
            self.speak("Borrado");
        }
        cleared
    }

    /// Manda el dibujo al evaluador; el resultado se aplica tras la pausa.
    pub fn submit_drawing(&mut self) -> bool {
        let Some(board) = self.board_mut() else {
            return false;
        };
        let Some(capture) = board.submit() else {
            return false;
        };
        let target = board.target().to_string();

        self.audio.play_effect(Effect::Pop);
        let evaluation = self.evaluator.evaluate(&capture, &target);
        log::debug!("Evaluación de '{target}': {evaluation:?}");
        let delay = self.timing.evaluation();
        self.schedule(delay, Deferred::TracingResult(evaluation));
        true
    }

    pub(crate) fn finish_tracing_item(&mut self, evaluation: Evaluation) {
        if evaluation.accepted {
            self.audio.play_effect(Effect::Success);
            self.speak(&evaluation.feedback);
            self.on_item_success();
        } else {
            self.audio.play_effect(Effect::Fail);
            self.speak(&evaluation.feedback);
            if let Some(board) = self.board_mut() {
                board.unlock();
            }
        }
    }
}

//! Escribir: la pizarra de trazos y el evaluador de caligrafía.

use egui::Pos2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

const ENCOURAGING_FEEDBACK: [&str; 5] = [
    "¡Lo hiciste genial!",
    "¡Qué bien escribes!",
    "¡Te quedó precioso!",
    "¡Eres increíble!",
    "¡Excelente trabajo!",
];

/// Lo que se manda a evaluar
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingCapture {
    pub strokes: Vec<Vec<Pos2>>,
}

impl DrawingCapture {
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub accepted: bool,
    pub feedback: String,
}

pub trait HandwritingEvaluator {
    fn evaluate(&mut self, capture: &DrawingCapture, target: &str) -> Evaluation;
}

/// Acepta siempre y anima con una frase al azar.
pub struct EncouragingEvaluator {
    rng: StdRng,
}

impl EncouragingEvaluator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EncouragingEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl HandwritingEvaluator for EncouragingEvaluator {
    fn evaluate(&mut self, capture: &DrawingCapture, target: &str) -> Evaluation {
        log::debug!(
            "Evaluando '{target}' con {} puntos",
            capture.point_count()
        );
        let feedback = ENCOURAGING_FEEDBACK
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("¡Muy bien!");
        Evaluation {
            accepted: true,
            feedback: feedback.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TracingBoard {
    target: String,
    capture: DrawingCapture,
    drawing: bool,
    validating: bool,
}

impl TracingBoard {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            capture: DrawingCapture::default(),
            drawing: false,
            validating: false,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn strokes(&self) -> &[Vec<Pos2>] {
        &self.capture.strokes
    }

    pub fn has_drawn(&self) -> bool {
        !self.capture.strokes.is_empty()
    }

    pub fn is_validating(&self) -> bool {
        self.validating
    }

    pub fn begin_stroke(&mut self, at: Pos2) {
        if self.validating {
            return;
        }
        self.drawing = true;
        self.capture.strokes.push(vec![at]);
    }

    pub fn extend_stroke(&mut self, to: Pos2) {
        if !self.drawing || self.validating {
            return;
        }
        if let Some(stroke) = self.capture.strokes.last_mut() {
            stroke.push(to);
        }
    }

    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Devuelve `false` si no había nada que borrar
    pub fn clear(&mut self) -> bool {
        if self.validating || !self.has_drawn() {
            return false;
        }
        self.capture.strokes.clear();
        self.drawing = false;
        true
    }

    /// Bloquea la pizarra y entrega el dibujo. `None` si aún no hay trazos
    /// o ya hay una evaluación en curso.
    pub fn submit(&mut self) -> Option<DrawingCapture> {
        if !self.has_drawn() || self.validating {
            return None;
        }
        self.drawing = false;
        self.validating = true;
        Some(self.capture.clone())
    }

    /// Tras un rechazo se puede volver a intentar
    pub fn unlock(&mut self) {
        self.validating = false;
    }

    /// Tamaño de letra según lo largo que sea el objetivo
    pub fn font_size(&self) -> f32 {
        match self.target.chars().count() {
            0..=1 => 200.0,
            2..=4 => 120.0,
            5..=8 => 80.0,
            _ => 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn submit_requires_a_drawing_and_locks_the_board() {
        let mut board = TracingBoard::new("A");
        assert_eq!(board.submit(), None);

        board.begin_stroke(pos2(0.0, 0.0));
        board.extend_stroke(pos2(5.0, 5.0));
        board.end_stroke();
        let capture = board.submit().expect("hay trazos");
        assert_eq!(capture.point_count(), 2);
        assert!(board.is_validating());

        // bloqueada mientras se evalúa
        assert_eq!(board.submit(), None);
        board.begin_stroke(pos2(1.0, 1.0));
        assert_eq!(board.strokes().len(), 1);
        assert!(!board.clear());

        board.unlock();
        assert!(board.clear());
        assert!(!board.has_drawn());
    }

    #[test]
    fn extend_without_begin_is_ignored() {
        let mut board = TracingBoard::new("MA");
        board.extend_stroke(pos2(1.0, 1.0));
        assert!(!board.has_drawn());
    }

    #[test]
    fn stub_evaluator_always_accepts() {
        let mut evaluator = EncouragingEvaluator::with_seed(3);
        let result = evaluator.evaluate(&DrawingCapture::default(), "A");
        assert!(result.accepted);
        assert!(ENCOURAGING_FEEDBACK.contains(&result.feedback.as_str()));
    }

    #[test]
    fn font_shrinks_with_longer_targets() {
        assert_eq!(TracingBoard::new("A").font_size(), 200.0);
        assert_eq!(TracingBoard::new("LUNA").font_size(), 120.0);
        assert_eq!(TracingBoard::new("EL SOL BRILLA").font_size(), 50.0);
    }
}

pub mod builder;
pub mod quiz;
pub mod tracing;

pub use builder::{PlaceOutcome, Verdict, WordBuilder};
pub use quiz::{Advance, QuizGame, Selection};
pub use tracing::{
    DrawingCapture, EncouragingEvaluator, Evaluation, HandwritingEvaluator, TracingBoard,
};

/// El minijuego en curso con su estado
#[derive(Clone, Debug)]
pub enum ActiveGame {
    Tracing(TracingBoard),
    Quiz(QuizGame),
    Builder(WordBuilder),
}

//! Adivinar: una pregunta de opción múltiple por ítem, con pistas
//! progresivas tras varios fallos.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::GameItem;
use crate::progress::MAX_SCORE;

const DECOYS_PER_ROUND: usize = 3;
/// Desde este número de fallos, cada opción errónea pulsada desaparece
const REVEAL_CLICKED_AFTER: u32 = 2;
/// Al llegar exactamente aquí se oculta sola otra opción errónea
const AUTO_REVEAL_AT: u32 = 3;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// Opción ya eliminada, desconocida o ronda ya resuelta
    Ignored,
    Correct { last: bool },
    Wrong {
        phonetic: String,
        /// Opciones que se ocultaron con este clic
        revealed: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    NextItem(usize),
    Finished { score: u8 },
}

#[derive(Clone, Debug)]
pub struct QuizGame {
    items: Vec<GameItem>,
    current: usize,
    options: Vec<GameItem>,
    mistakes: u32,
    revealed_wrong: Vec<String>,
    solved: bool,
}

impl QuizGame {
    pub fn new<R: Rng + ?Sized>(items: Vec<GameItem>, rng: &mut R) -> Self {
        let mut quiz = Self {
            items,
            current: 0,
            options: Vec::new(),
            mistakes: 0,
            revealed_wrong: Vec::new(),
            solved: false,
        };
        quiz.start_round(rng);
        quiz
    }

    fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.mistakes = 0;
        self.revealed_wrong.clear();
        self.solved = false;
        self.options.clear();

        let Some(answer) = self.items.get(self.current).cloned() else {
            return;
        };
        // Con menos de 4 ítems hay menos señuelos; no es un error
        let pool: Vec<&GameItem> = self.items.iter().filter(|i| i.id != answer.id).collect();
        let mut options: Vec<GameItem> = pool
            .choose_multiple(rng, DECOYS_PER_ROUND)
            .map(|i| (*i).clone())
            .collect();
        options.push(answer);
        options.shuffle(rng);
        self.options = options;
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_item(&self) -> Option<&GameItem> {
        self.items.get(self.current)
    }

    pub fn options(&self) -> &[GameItem] {
        &self.options
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_revealed(&self, item_id: &str) -> bool {
        self.revealed_wrong.iter().any(|id| id == item_id)
    }

    /// Opciones que siguen en juego, en orden de presentación
    pub fn visible_options(&self) -> impl Iterator<Item = &GameItem> {
        self.options.iter().filter(|o| !self.is_revealed(&o.id))
    }

    pub fn question(&self) -> Option<String> {
        self.current_item()
            .map(|item| format!("¿Cuál es... {}?", item.prompt))
    }

    pub fn select_option(&mut self, item_id: &str) -> Selection {
        if self.solved || self.is_revealed(item_id) {
            return Selection::Ignored;
        }
        let Some(answer_id) = self.current_item().map(|i| i.id.clone()) else {
            return Selection::Ignored;
        };
        let Some(option) = self.options.iter().find(|o| o.id == item_id).cloned() else {
            return Selection::Ignored;
        };

        if option.id == answer_id {
            self.solved = true;
            return Selection::Correct {
                last: self.current + 1 >= self.items.len(),
            };
        }

        let mut revealed = Vec::new();
        if self.mistakes >= REVEAL_CLICKED_AFTER {
            self.revealed_wrong.push(option.id.clone());
            revealed.push(option.id.clone());
        }
        self.mistakes += 1;

        if self.mistakes == AUTO_REVEAL_AT {
            let extra = self
                .options
                .iter()
                .find(|o| o.id != answer_id && !self.is_revealed(&o.id))
                .map(|o| o.id.clone());
            if let Some(id) = extra {
                self.revealed_wrong.push(id.clone());
                revealed.push(id);
            }
        }

        Selection::Wrong {
            phonetic: option.phonetic,
            revealed,
        }
    }

    /// Segunda fase tras acertar: siguiente ítem o fin con la puntuación.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Advance> {
        if !self.solved {
            return None;
        }
        if self.current + 1 < self.items.len() {
            self.current += 1;
            self.start_round(rng);
            Some(Advance::NextItem(self.current))
        } else {
            // Se premia completar, no la precisión
            Some(Advance::Finished { score: MAX_SCORE })
        }
    }
}

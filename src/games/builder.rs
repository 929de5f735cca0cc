//! Construir: rellenar casillas con piezas desordenadas.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::GameItem;

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub id: usize,
    pub value: String,
    pub used: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Pieza usada, desconocida o no quedan casillas libres
    Ignored,
    Placed { slot: usize },
    /// Se llenó la última casilla y ya se validó
    Completed { slot: usize, verdict: Verdict },
}

#[derive(Clone, Debug)]
pub struct WordBuilder {
    target: Vec<String>,
    slots: Vec<Option<String>>,
    pieces: Vec<Piece>,
}

impl WordBuilder {
    /// Las piezas se presentan barajadas; cada llamada baraja de nuevo.
    pub fn new<R: Rng + ?Sized>(item: &GameItem, rng: &mut R) -> Self {
        let target = item.letter_parts();
        let mut pieces: Vec<Piece> = target
            .iter()
            .enumerate()
            .map(|(id, value)| Piece {
                id,
                value: value.clone(),
                used: false,
            })
            .collect();
        pieces.shuffle(rng);

        Self {
            slots: vec![None; target.len()],
            target,
            pieces,
        }
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn target_word(&self) -> String {
        self.target.concat()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn place_piece(&mut self, piece_id: usize) -> PlaceOutcome {
        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            return PlaceOutcome::Ignored;
        };
        let Some(piece) = self
            .pieces
            .iter_mut()
            .find(|p| p.id == piece_id && !p.used)
        else {
            return PlaceOutcome::Ignored;
        };

        piece.used = true;
        self.slots[slot] = Some(piece.value.clone());

        if self.is_full() {
            PlaceOutcome::Completed {
                slot,
                verdict: self.validate(),
            }
        } else {
            PlaceOutcome::Placed { slot }
        }
    }

    /// Vacía la casilla y libera una pieza usada con el mismo valor.
    /// Devuelve el valor quitado.
    pub fn clear_slot(&mut self, index: usize) -> Option<String> {
        let value = self.slots.get_mut(index)?.take()?;
        // Por valor, no por identidad: las piezas iguales son intercambiables
        if let Some(piece) = self
            .pieces
            .iter_mut()
            .find(|p| p.used && p.value == value)
        {
            piece.used = false;
        }
        Some(value)
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.pieces.iter_mut().for_each(|p| p.used = false);
    }

    pub fn validate(&self) -> Verdict {
        let built: String = self.slots.iter().flatten().map(String::as_str).collect();
        if self.is_full() && built == self.target_word() {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn item(text: &str, parts: &[&str]) -> GameItem {
        GameItem {
            id: text.to_lowercase(),
            text: text.into(),
            phonetic: text.to_lowercase(),
            prompt: format!("La palabra {text}"),
            construction_parts: Some(parts.iter().map(|s| s.to_string()).collect()),
            emoji: None,
        }
    }

    fn piece_for(builder: &WordBuilder, value: &str) -> usize {
        builder
            .pieces()
            .iter()
            .find(|p| p.value == value && !p.used)
            .map(|p| p.id)
            .expect("pieza libre")
    }

    fn fill(builder: &mut WordBuilder, letters: &[&str]) -> PlaceOutcome {
        let mut last = PlaceOutcome::Ignored;
        for letter in letters {
            last = builder.place_piece(piece_for(builder, letter));
        }
        last
    }

    #[test]
    fn spaces_are_not_slots() {
        let mut rng = StdRng::seed_from_u64(1);
        let builder = WordBuilder::new(&item("EL OSO", &["E", "L", " ", "O", "S", "O"]), &mut rng);
        assert_eq!(builder.slots().len(), 5);
        assert_eq!(builder.pieces().len(), 5);
        assert_eq!(builder.target_word(), "ELOSO");
    }

    #[test]
    fn correct_order_succeeds_for_any_shuffle() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut builder = WordBuilder::new(&item("LUNA", &["L", "U", "N", "A"]), &mut rng);
            let outcome = fill(&mut builder, &["L", "U", "N", "A"]);
            assert_eq!(
                outcome,
                PlaceOutcome::Completed {
                    slot: 3,
                    verdict: Verdict::Correct
                }
            );
        }
    }

    #[test]
    fn wrong_fill_fails_and_can_be_repaired() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut builder = WordBuilder::new(&item("SOL", &["S", "O", "L"]), &mut rng);
        let outcome = fill(&mut builder, &["L", "O", "S"]);
        assert!(matches!(
            outcome,
            PlaceOutcome::Completed {
                verdict: Verdict::Incorrect,
                ..
            }
        ));
        // Lleno: nada más entra hasta liberar una casilla
        assert!(builder.pieces().iter().all(|p| p.used));

        assert_eq!(builder.clear_slot(0).as_deref(), Some("L"));
        assert_eq!(builder.clear_slot(2).as_deref(), Some("S"));
        assert_eq!(builder.place_piece(piece_for(&builder, "S")), PlaceOutcome::Placed { slot: 0 });
        assert_eq!(
            builder.place_piece(piece_for(&builder, "L")),
            PlaceOutcome::Completed {
                slot: 2,
                verdict: Verdict::Correct
            }
        );
    }

    #[test]
    fn clearing_and_refilling_same_value_keeps_verdict() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut builder = WordBuilder::new(&item("OSO", &["O", "S", "O"]), &mut rng);
        fill(&mut builder, &["O", "S", "O"]);
        assert_eq!(builder.validate(), Verdict::Correct);

        builder.clear_slot(2);
        let outcome = builder.place_piece(piece_for(&builder, "O"));
        assert_eq!(
            outcome,
            PlaceOutcome::Completed {
                slot: 2,
                verdict: Verdict::Correct
            }
        );
    }

    #[test]
    fn no_op_paths() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut builder = WordBuilder::new(&item("MA", &["M", "A"]), &mut rng);
        assert_eq!(builder.clear_slot(0), None);
        assert_eq!(builder.clear_slot(9), None);
        assert_eq!(builder.place_piece(99), PlaceOutcome::Ignored);

        let m = piece_for(&builder, "M");
        builder.place_piece(m);
        // una pieza usada no se vuelve a colocar
        assert_eq!(builder.place_piece(m), PlaceOutcome::Ignored);
        fill(&mut builder, &["A"]);
        let any = builder.pieces()[0].id;
        assert_eq!(builder.place_piece(any), PlaceOutcome::Ignored);
    }

    #[test]
    fn reset_empties_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut builder = WordBuilder::new(&item("PAN", &["P", "A", "N"]), &mut rng);
        fill(&mut builder, &["N", "A"]);
        builder.reset();
        assert!(builder.slots().iter().all(Option::is_none));
        assert!(builder.pieces().iter().all(|p| !p.used));
    }
}

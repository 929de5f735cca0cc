// src/view_models.rs

#[derive(Clone, Debug)]
pub struct LevelInfo {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub color: String,
    pub score: u8,
    pub stars: u8, // 0..=3
}

#[derive(Clone, Debug)]
pub struct StickerInfo {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub unlocked: bool,
}

/// Una estrella por cada tramo de 33 puntos
pub fn stars_for(score: u8) -> u8 {
    (1..=3u8).filter(|k| u32::from(score) >= 33 * u32::from(*k)).count() as u8
}

impl LevelInfo {
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }

    pub fn stars_text(&self) -> String {
        (0..3)
            .map(|k| if k < self.stars { '⭐' } else { '☆' })
            .collect()
    }
}

impl StickerInfo {
    /// Lo que se pinta en el álbum
    pub fn face(&self) -> &str {
        if self.unlocked { self.emoji.as_str() } else { "?" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_light_every_33_points() {
        assert_eq!(stars_for(0), 0);
        assert_eq!(stars_for(32), 0);
        assert_eq!(stars_for(33), 1);
        assert_eq!(stars_for(66), 2);
        assert_eq!(stars_for(98), 2);
        assert_eq!(stars_for(99), 3);
        assert_eq!(stars_for(100), 3);
    }

    #[test]
    fn locked_sticker_shows_question_mark() {
        let mut info = StickerInfo {
            id: "s1".into(),
            name: "León".into(),
            emoji: "🦁".into(),
            unlocked: false,
        };
        assert_eq!(info.face(), "?");
        info.unlocked = true;
        assert_eq!(info.face(), "🦁");
    }
}

use super::*;
use crate::view_models::stars_for;

impl LetrasApp {
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        self.catalog
            .levels
            .iter()
            .map(|level| {
                let score = self.progress.score(level.id);
                LevelInfo {
                    id: level.id,
                    title: level.title.clone(),
                    icon: level.icon.clone(),
                    color: level.color.clone(),
                    score,
                    stars: stars_for(score),
                }
            })
            .collect()
    }

    /// Todas las del catálogo, también las creadas por la varita
    pub fn sticker_infos(&self) -> Vec<StickerInfo> {
        self.catalog
            .stickers
            .iter()
            .map(|s| StickerInfo {
                id: s.id.clone(),
                name: s.name.clone(),
                emoji: s.emoji.clone(),
                unlocked: self.progress.has_sticker(&s.id),
            })
            .collect()
    }

    /// (estrellas conseguidas, estrellas posibles) en todo el mapa
    pub fn star_totals(&self) -> (u32, u32) {
        let earned = self.level_infos().iter().map(|l| u32::from(l.stars)).sum();
        (earned, self.catalog.levels.len() as u32 * 3)
    }

    pub fn unlocked_sticker_count(&self) -> usize {
        self.sticker_infos().iter().filter(|s| s.unlocked).count()
    }
}

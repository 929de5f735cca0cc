// src/data.rs

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::gateway::MagicBundle;
use crate::model::{Catalog, GameItem, LevelData, LevelType, Sticker};

/// Carga el catálogo desde el YAML embebido y lo valida
pub fn load_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(include_str!("data/catalog.yaml"))
}

pub fn parse_catalog(yaml: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    let issues = validate_catalog(&catalog);
    if !issues.is_empty() {
        return Err(CatalogError::Invalid(issues));
    }
    log::info!(
        "Catálogo cargado: {} niveles, {} pegatinas",
        catalog.levels.len(),
        catalog.stickers.len()
    );
    Ok(catalog)
}

/// Devuelve la lista de problemas encontrados (vacía si todo está bien)
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut issues = Vec::new();

    let mut level_ids = HashSet::new();
    for level in &catalog.levels {
        if !level_ids.insert(level.id) {
            issues.push(format!("nivel {} repetido", level.id));
        }
        let mut item_ids = HashSet::new();
        for item in &level.content {
            if !item_ids.insert(item.id.as_str()) {
                issues.push(format!("nivel {}: ítem '{}' repetido", level.id, item.id));
            }
            if let Err(problem) = check_item(item, level.level_type) {
                issues.push(format!("nivel {}: {problem}", level.id));
            }
        }
    }

    if catalog.stickers.is_empty() {
        issues.push("no hay pegatinas".into());
    }
    let mut sticker_ids = HashSet::new();
    for sticker in &catalog.stickers {
        if !sticker_ids.insert(sticker.id.as_str()) {
            issues.push(format!("pegatina '{}' repetida", sticker.id));
        }
    }

    issues
}

fn check_item(item: &GameItem, level_type: LevelType) -> Result<(), String> {
    if item.id.trim().is_empty() || item.text.trim().is_empty() {
        return Err(format!("ítem sin id o sin texto ({:?})", item.text));
    }
    if level_type.allows_builder() && item.letter_parts().is_empty() {
        return Err(format!("ítem '{}' sin piezas para construir", item.id));
    }
    if !item.parts_match_text() {
        return Err(format!(
            "ítem '{}': las piezas no forman '{}'",
            item.id, item.text
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    pub added_items: usize,
    pub rejected_items: usize,
    pub sticker_id: String,
}

/// Añade el lote de la IA al catálogo. Los ítems mal formados se descartan
/// uno a uno; la pegatina recibe un id nuevo y único.
pub fn merge_bundle(catalog: &mut Catalog, bundle: MagicBundle) -> MergeReport {
    let mut report = MergeReport::default();
    let MagicBundle {
        syllables,
        words,
        stories,
        new_sticker,
    } = bundle;

    for (level_type, items) in [
        (LevelType::Syllables, syllables),
        (LevelType::Words, words),
        (LevelType::Stories, stories),
    ] {
        let accepted: Vec<GameItem> = items
            .into_iter()
            .map(with_id)
            .filter(|item| match check_item(item, level_type) {
                Ok(()) => true,
                Err(problem) => {
                    log::warn!("Ítem generado descartado: {problem}");
                    report.rejected_items += 1;
                    false
                }
            })
            .collect();

        for level in catalog
            .levels
            .iter_mut()
            .filter(|l| l.level_type == level_type)
        {
            report.added_items += append_items(level, &accepted);
        }
    }

    let id = mint_sticker_id(catalog);
    catalog.stickers.push(Sticker {
        id: id.clone(),
        unlocked: false,
        ..new_sticker
    });
    report.sticker_id = id;
    report
}

/// La IA no siempre manda `id`: se deriva del texto y `append_items`
/// resuelve las colisiones.
fn with_id(mut item: GameItem) -> GameItem {
    if item.id.trim().is_empty() {
        item.id = item
            .text
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
    }
    item
}

fn append_items(level: &mut LevelData, items: &[GameItem]) -> usize {
    for item in items {
        let mut item = item.clone();
        if level.content.iter().any(|i| i.id == item.id) {
            let base = item.id.clone();
            let mut n = 1;
            while level.content.iter().any(|i| i.id == item.id) {
                item.id = format!("{base}-ai{n}");
                n += 1;
            }
        }
        level.content.push(item);
    }
    items.len()
}

fn mint_sticker_id(catalog: &Catalog) -> String {
    let mut n = catalog.stickers.len() + 1;
    loop {
        let candidate = format!("ai-{n}");
        if catalog.sticker(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: &str, text: &str) -> GameItem {
        GameItem {
            id: id.into(),
            text: text.into(),
            phonetic: text.to_lowercase(),
            prompt: format!("La palabra {text}"),
            construction_parts: Some(text.chars().map(|c| c.to_string()).collect()),
            emoji: None,
        }
    }

    fn sticker(name: &str) -> Sticker {
        Sticker {
            id: "cualquiera".into(),
            emoji: "🐙".into(),
            name: name.into(),
            unlocked: true,
        }
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = load_catalog().expect("catálogo embebido válido");
        assert_eq!(catalog.levels.len(), 5);
        assert_eq!(catalog.stickers.len(), 10);
        let stories = catalog.level(7).expect("nivel de historias");
        assert_eq!(stories.level_type, LevelType::Stories);
        assert_eq!(stories.content[0].text, "EL OSO RIE");
    }

    #[test]
    fn every_construction_item_rebuilds_its_text() {
        let catalog = load_catalog().expect("catálogo");
        for level in &catalog.levels {
            for item in &level.content {
                if item.construction_parts.is_some() {
                    assert!(item.parts_match_text(), "{} en nivel {}", item.id, level.id);
                }
            }
        }
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        let yaml = r##"
levels:
  - id: 6
    title: "Palabras"
    icon: "📚"
    color: "#E9D5FF"
    type: words
    content:
      - { id: "sol", text: "SOL", constructionParts: ["S", "O"] }
      - { id: "sol", text: "PAN" }
stickers: []
"##;
        match parse_catalog(yaml) {
            Err(CatalogError::Invalid(issues)) => {
                assert_eq!(issues.len(), 4, "{issues:?}");
            }
            other => panic!("se esperaba catálogo inválido, llegó {other:?}"),
        }
    }

    #[test]
    fn merge_appends_by_type_and_mints_sticker_id() {
        let mut catalog = load_catalog().expect("catálogo");
        let words_before = catalog.level(6).map(|l| l.content.len()).unwrap_or(0);
        let stickers_before = catalog.stickers.len();

        let bundle = MagicBundle {
            syllables: vec![],
            words: vec![
                word("sol", "SOL"),
                word("rio", "RIO"),
                GameItem {
                    construction_parts: Some(vec!["M".into(), "A".into()]),
                    ..word("malo", "MALO")
                },
            ],
            stories: vec![],
            new_sticker: sticker("Pulpo"),
        };
        let report = merge_bundle(&mut catalog, bundle);

        assert_eq!(report.added_items, 2);
        assert_eq!(report.rejected_items, 1);
        let words = catalog.level(6).expect("nivel palabras");
        assert_eq!(words.content.len(), words_before + 2);
        // id repetido se renombra, no se pisa
        assert!(words.content.iter().any(|i| i.id == "sol-ai1"));

        assert_eq!(catalog.stickers.len(), stickers_before + 1);
        let added = catalog.sticker(&report.sticker_id).expect("pegatina nueva");
        assert_eq!(added.name, "Pulpo");
        assert!(!added.unlocked);
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn generated_items_without_id_get_one_from_text() {
        let mut catalog = load_catalog().expect("catálogo");
        let words_before = catalog.level(6).map(|l| l.content.len()).unwrap_or(0);

        let report = merge_bundle(
            &mut catalog,
            MagicBundle {
                words: vec![
                    GameItem {
                        id: String::new(),
                        ..word("rio", "RIO")
                    },
                    GameItem {
                        id: "  ".into(),
                        ..word("sol", "SOL")
                    },
                ],
                new_sticker: sticker("Río"),
                ..MagicBundle::default()
            },
        );

        assert_eq!(report.added_items, 2);
        assert_eq!(report.rejected_items, 0);
        let words = catalog.level(6).expect("nivel palabras");
        assert_eq!(words.content.len(), words_before + 2);
        assert!(words.content.iter().any(|i| i.id == "rio"));
        // "sol" ya existía en el catálogo
        assert!(words.content.iter().any(|i| i.id == "sol-ai1"));
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn minted_ids_stay_unique_across_merges() {
        let mut catalog = load_catalog().expect("catálogo");
        let first = merge_bundle(
            &mut catalog,
            MagicBundle {
                new_sticker: sticker("Uno"),
                ..MagicBundle::default()
            },
        );
        let second = merge_bundle(
            &mut catalog,
            MagicBundle {
                new_sticker: sticker("Dos"),
                ..MagicBundle::default()
            },
        );
        assert_ne!(first.sticker_id, second.sticker_id);
    }
}

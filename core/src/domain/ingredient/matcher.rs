use crate::domain::ingredient::{entities::Ingredient, value_objects::IngredientMatch};

/// Match a parsed ingredient name against the master ingredient list.
///
/// Tries progressively looser strategies and returns the first hit with its
/// confidence score: exact name, exact alias, partial name, per-word partial
/// name, then partial alias overlap. Returns `None` when nothing matches.
pub fn match_ingredient(name: &str, ingredients: &[Ingredient]) -> Option<IngredientMatch> {
    let name_lower = name.trim().to_lowercase();
    if name_lower.is_empty() {
        return None;
    }

    // 1. Exact name match
    if let Some(ing) = ingredients
        .iter()
        .find(|i| i.name.to_lowercase() == name_lower)
    {
        return Some(IngredientMatch {
            ingredient: ing.clone(),
            confidence: 1.0,
        });
    }

    // 2. Exact alias match
    if let Some(ing) = ingredients
        .iter()
        .find(|i| i.aliases_list().contains(&name_lower))
    {
        return Some(IngredientMatch {
            ingredient: ing.clone(),
            confidence: 0.95,
        });
    }

    // 3. Partial name match (contains)
    if let Some(ing) = ingredients
        .iter()
        .find(|i| i.name.to_lowercase().contains(&name_lower))
    {
        return Some(IngredientMatch {
            ingredient: ing.clone(),
            confidence: 0.7,
        });
    }

    // 4. Per-word match, skipping short words
    for word in name_lower.split_whitespace() {
        if word.len() > 3 {
            if let Some(ing) = ingredients
                .iter()
                .find(|i| i.name.to_lowercase().contains(word))
            {
                return Some(IngredientMatch {
                    ingredient: ing.clone(),
                    confidence: 0.5,
                });
            }
        }
    }

    // 5. Alias partial overlap
    for ing in ingredients {
        for alias in ing.aliases_list() {
            if name_lower.contains(&alias) || alias.contains(&name_lower) {
                return Some(IngredientMatch {
                    ingredient: ing.clone(),
                    confidence: 0.4,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn ingredient(name: &str, aliases: &str) -> Ingredient {
        Ingredient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: None,
            aliases: aliases.to_string(),
            description: String::new(),
        }
    }

    fn db() -> Vec<Ingredient> {
        vec![
            ingredient("Wheat Flour", "atta, maida"),
            ingredient("Basmati Rice", "rice, chawal"),
            ingredient("Refined Sunflower Oil", ""),
        ]
    }

    #[test]
    fn exact_name_match_has_full_confidence() {
        let m = match_ingredient("wheat flour", &db()).unwrap();
        assert_eq!(m.ingredient.name, "Wheat Flour");
        assert_eq!(m.confidence, 1.0);
    }

    #[test]
    fn alias_match_scores_095() {
        let m = match_ingredient("Atta", &db()).unwrap();
        assert_eq!(m.ingredient.name, "Wheat Flour");
        assert_eq!(m.confidence, 0.95);
    }

    #[test]
    fn partial_name_match_scores_07() {
        let m = match_ingredient("sunflower oil", &db()).unwrap();
        assert_eq!(m.ingredient.name, "Refined Sunflower Oil");
        assert_eq!(m.confidence, 0.7);
    }

    #[test]
    fn word_match_skips_short_words() {
        // "raw basmati" has no exact/partial hit, but "basmati" (>3 chars)
        // appears in "Basmati Rice".
        let m = match_ingredient("raw basmati", &db()).unwrap();
        assert_eq!(m.ingredient.name, "Basmati Rice");
        assert_eq!(m.confidence, 0.5);
    }

    #[test]
    fn alias_overlap_scores_04() {
        let m = match_ingredient("chawal long grain", &db()).unwrap();
        assert_eq!(m.ingredient.name, "Basmati Rice");
        assert_eq!(m.confidence, 0.4);
    }

    #[test]
    fn unknown_name_matches_nothing() {
        assert!(match_ingredient("dragonfruit", &db()).is_none());
        assert!(match_ingredient("   ", &db()).is_none());
    }
}

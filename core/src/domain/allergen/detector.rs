use std::collections::{BTreeMap, BTreeSet};

use crate::domain::allergen::entities::AllergenReport;

/// FSSAI allergen groups and the ingredient keywords that imply them.
/// Covers common English and Indian ingredient names.
const ALLERGEN_GROUPS: &[(&str, &[&str])] = &[
    (
        "Milk / Dairy",
        &[
            "milk", "cream", "butter", "ghee", "curd", "yogurt", "yoghurt", "paneer", "cheese",
            "khoya", "whey", "casein", "lactose", "buttermilk", "dahi", "malai", "dairy",
        ],
    ),
    (
        "Wheat / Gluten",
        &[
            "wheat", "maida", "atta", "flour", "gluten", "semolina", "suji", "sooji", "rawa",
            "barley", "rye", "oats", "bread", "pasta", "noodle", "biscuit",
        ],
    ),
    (
        "Nuts (Tree Nuts)",
        &[
            "almond", "badam", "cashew", "kaju", "walnut", "akhrot", "pistachio", "pista",
            "hazelnut", "macadamia", "pecan", "pine nut",
        ],
    ),
    ("Peanuts", &["peanut", "groundnut", "moongphali"]),
    (
        "Soy",
        &["soy", "soya", "tofu", "tempeh", "edamame", "soybean"],
    ),
    ("Eggs", &["egg", "anda", "albumin", "meringue", "mayonnaise"]),
    (
        "Fish",
        &["fish", "machli", "salmon", "tuna", "cod", "sardine", "anchovy", "mackerel", "pomfret"],
    ),
    (
        "Shellfish / Crustaceans",
        &["shrimp", "prawn", "crab", "lobster", "shellfish", "crustacean", "jhinga", "squid"],
    ),
    ("Sesame", &["sesame", "til", "gingelly", "tahini"]),
    ("Mustard", &["mustard", "sarson", "rai"]),
    ("Celery", &["celery", "ajmoda"]),
    ("Lupin", &["lupin", "lupine"]),
    (
        "Sulphites",
        &["sulphite", "sulfite", "sulphur dioxide", "sulfur dioxide", "metabisulphite"],
    ),
    ("Coconut", &["coconut", "nariyal", "copra"]),
];

/// Detect allergen groups from ingredient names by keyword containment.
/// An ingredient stops scanning a group's keywords at its first hit but
/// may still trigger other groups.
pub fn detect_allergens<S: AsRef<str>>(ingredient_names: &[S]) -> AllergenReport {
    let mut detected: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for name in ingredient_names {
        let name_lower = name.as_ref().trim().to_lowercase();

        for (group, keywords) in ALLERGEN_GROUPS {
            for keyword in *keywords {
                if name_lower.contains(keyword) {
                    detected
                        .entry((*group).to_string())
                        .or_default()
                        .insert(name.as_ref().to_string());
                    break;
                }
            }
        }
    }

    if detected.is_empty() {
        return AllergenReport {
            detected: Vec::new(),
            details: BTreeMap::new(),
            allergen_string: "No known allergens".to_string(),
        };
    }

    let groups: Vec<String> = detected.keys().cloned().collect();
    let allergen_string = format!("Contains: {}", groups.join(", "));
    let details = detected
        .into_iter()
        .map(|(group, names)| (group, names.into_iter().collect()))
        .collect();

    AllergenReport {
        detected: groups,
        details,
        allergen_string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_groups_from_keywords() {
        let report = detect_allergens(&["Wheat Flour", "Paneer", "Refined Oil"]);
        assert_eq!(report.detected, vec!["Milk / Dairy", "Wheat / Gluten"]);
        assert_eq!(
            report.allergen_string,
            "Contains: Milk / Dairy, Wheat / Gluten"
        );
        assert_eq!(report.details["Wheat / Gluten"], vec!["Wheat Flour"]);
    }

    #[test]
    fn one_ingredient_can_trigger_multiple_groups() {
        let report = detect_allergens(&["Peanut Butter"]);
        assert!(report.detected.contains(&"Peanuts".to_string()));
        assert!(report.detected.contains(&"Milk / Dairy".to_string()));
    }

    #[test]
    fn no_hits_yields_no_known_allergens() {
        let report = detect_allergens(&["Rice", "Salt", "Turmeric"]);
        assert!(report.detected.is_empty());
        assert_eq!(report.allergen_string, "No known allergens");
    }

    #[test]
    fn duplicate_ingredients_are_reported_once() {
        let report = detect_allergens(&["Milk", "Milk"]);
        assert_eq!(report.details["Milk / Dairy"], vec!["Milk"]);
    }
}

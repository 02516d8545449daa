use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ai::value_objects::ParsedIngredient;

/// Common kitchen-measure conversions to grams. Milliliter-based units
/// assume water-like density; count-based units use rough estimates.
const UNIT_TO_GRAMS: &[(&str, f64)] = &[
    ("g", 1.0),
    ("gm", 1.0),
    ("gms", 1.0),
    ("gram", 1.0),
    ("grams", 1.0),
    ("kg", 1000.0),
    ("kilogram", 1000.0),
    ("mg", 0.001),
    ("ml", 1.0),
    ("milliliter", 1.0),
    ("l", 1000.0),
    ("liter", 1000.0),
    ("litre", 1000.0),
    ("cup", 240.0),
    ("cups", 240.0),
    ("tbsp", 15.0),
    ("tablespoon", 15.0),
    ("tablespoons", 15.0),
    ("tsp", 5.0),
    ("teaspoon", 5.0),
    ("teaspoons", 5.0),
    ("oz", 28.35),
    ("ounce", 28.35),
    ("lb", 453.6),
    ("pound", 453.6),
    ("pinch", 0.5),
    ("dash", 0.5),
    ("piece", 50.0),
    ("pieces", 50.0),
    ("no", 50.0),
    ("nos", 50.0),
];

/// Weight assigned when a line carries no recognizable quantity.
const DEFAULT_WEIGHT_GRAMS: f64 = 10.0;

const UNITS_PATTERN: &str =
    "g|gm|gms|gram|grams|kg|mg|ml|l|cup|cups|tbsp|tablespoon|tablespoons|tsp|teaspoon|teaspoons|oz|lb|pinch|piece|pieces|no|nos";

// "100g wheat flour" / "100 g wheat flour"
static AMOUNT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\d+(?:\.\d+)?)\s*({UNITS_PATTERN})\s+(.+)"
    ))
    .expect("valid regex")
});

// "wheat flour - 100g" / "wheat flour: 100g"
static NAME_FIRST_SEPARATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(.+?)\s*[-–:]\s*(\d+(?:\.\d+)?)\s*({UNITS_PATTERN})"
    ))
    .expect("valid regex")
});

// "wheat flour 100g"
static NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(.+?)\s+(\d+(?:\.\d+)?)\s*({UNITS_PATTERN})\s*$"
    ))
    .expect("valid regex")
});

// "2 cups rice"
static COUNT_MEASURE_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+(?:\.\d+)?)\s+(cup|cups|tbsp|tablespoon|tablespoons|tsp|teaspoon|teaspoons|piece|pieces|pinch)\s+(.+)",
    )
    .expect("valid regex")
});

fn unit_to_grams(unit: &str) -> f64 {
    UNIT_TO_GRAMS
        .iter()
        .find(|(u, _)| *u == unit)
        .map(|(_, g)| *g)
        .unwrap_or(1.0)
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse structured ingredient lines without any model call.
///
/// Handles "100g wheat flour", "wheat flour - 100g", "salt 5g" and
/// "2 cups rice"; anything else becomes an ingredient with a default
/// weight. Comment lines starting with '#' are skipped.
pub fn parse_with_regex(text: &str) -> Vec<ParsedIngredient> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ParsedIngredient> {
    let line = line.trim().to_lowercase();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if let Some(caps) = AMOUNT_FIRST.captures(&line) {
        let amount: f64 = caps[1].parse().ok()?;
        let grams = amount * unit_to_grams(&caps[2]);
        return Some(ParsedIngredient {
            name: title_case(caps[3].trim().trim_end_matches([',', '.'])),
            weight_grams: (grams * 10.0).round() / 10.0,
        });
    }

    if let Some(caps) = NAME_FIRST_SEPARATED.captures(&line) {
        let amount: f64 = caps[2].parse().ok()?;
        let grams = amount * unit_to_grams(&caps[3]);
        return Some(ParsedIngredient {
            name: title_case(caps[1].trim().trim_end_matches([',', '.'])),
            weight_grams: (grams * 10.0).round() / 10.0,
        });
    }

    if let Some(caps) = NAME_FIRST.captures(&line) {
        let amount: f64 = caps[2].parse().ok()?;
        let grams = amount * unit_to_grams(&caps[3]);
        return Some(ParsedIngredient {
            name: title_case(caps[1].trim().trim_end_matches([',', '.'])),
            weight_grams: (grams * 10.0).round() / 10.0,
        });
    }

    if let Some(caps) = COUNT_MEASURE_FIRST.captures(&line) {
        let amount: f64 = caps[1].parse().ok()?;
        let grams = amount * unit_to_grams(&caps[2]);
        return Some(ParsedIngredient {
            name: title_case(caps[3].trim().trim_end_matches([',', '.'])),
            weight_grams: (grams * 10.0).round() / 10.0,
        });
    }

    Some(ParsedIngredient {
        name: title_case(&line),
        weight_grams: DEFAULT_WEIGHT_GRAMS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_first_format() {
        let parsed = parse_with_regex("100g wheat flour");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Wheat Flour");
        assert_eq!(parsed[0].weight_grams, 100.0);
    }

    #[test]
    fn name_first_with_separator() {
        let parsed = parse_with_regex("wheat flour - 100g\npaneer: 250 g");
        assert_eq!(parsed[0].weight_grams, 100.0);
        assert_eq!(parsed[1].name, "Paneer");
        assert_eq!(parsed[1].weight_grams, 250.0);
    }

    #[test]
    fn name_first_without_separator() {
        let parsed = parse_with_regex("salt 5g");
        assert_eq!(parsed[0].name, "Salt");
        assert_eq!(parsed[0].weight_grams, 5.0);
    }

    #[test]
    fn kitchen_measures_convert_to_grams() {
        let parsed = parse_with_regex("2 cups rice\n1 tbsp oil\n0.5 tsp turmeric");
        assert_eq!(parsed[0].weight_grams, 480.0);
        assert_eq!(parsed[1].weight_grams, 15.0);
        assert_eq!(parsed[2].weight_grams, 2.5);
    }

    #[test]
    fn kg_and_ml_units() {
        let parsed = parse_with_regex("1.5kg potatoes\n200ml milk");
        assert_eq!(parsed[0].weight_grams, 1500.0);
        assert_eq!(parsed[1].weight_grams, 200.0);
    }

    #[test]
    fn bare_name_gets_default_weight() {
        let parsed = parse_with_regex("a pinch of love\nturmeric");
        assert_eq!(parsed.last().unwrap().name, "Turmeric");
        assert_eq!(parsed.last().unwrap().weight_grams, DEFAULT_WEIGHT_GRAMS);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let parsed = parse_with_regex("# my recipe\n\n100g rice");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Rice");
    }
}

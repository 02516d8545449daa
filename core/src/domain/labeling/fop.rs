use std::collections::HashMap;

use crate::domain::labeling::entities::{FopIndicator, FopLevel};

/// Front-of-pack "high in" thresholds per 100g of finished product:
/// (nutrient name, threshold, unit). Fixed constants modeled on national
/// front-of-pack labelling guidance, not configurable per recipe.
pub const FOP_CHECKS: [(&str, f64, &str); 4] = [
    ("Total Fat", 17.5, "g"),
    ("Saturated Fat", 5.0, "g"),
    ("Total Sugars", 22.5, "g"),
    ("Sodium", 600.0, "mg"),
];

/// Classify the four key per-100g values into traffic-light tiers.
///
/// Output order is always Fat, Saturated Fat, Sugars, Sodium — stable, not
/// sorted by severity. A nutrient absent from the map reads as 0.
pub fn classify(per_100g: &HashMap<String, f64>) -> Vec<FopIndicator> {
    FOP_CHECKS
        .iter()
        .map(|&(name, threshold, unit)| {
            let value = per_100g.get(name).copied().unwrap_or(0.0);
            let level = if value > threshold {
                FopLevel::High
            } else if value > threshold * 0.5 {
                FopLevel::Medium
            } else {
                FopLevel::Low
            };

            FopIndicator {
                nutrient: name.to_string(),
                value,
                unit: unit.to_string(),
                level,
                color: level.color().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_100g(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn output_order_is_fixed() {
        let indicators = classify(&HashMap::new());
        let names: Vec<&str> = indicators.iter().map(|i| i.nutrient.as_str()).collect();
        assert_eq!(
            names,
            vec!["Total Fat", "Saturated Fat", "Total Sugars", "Sodium"]
        );
    }

    #[test]
    fn missing_values_read_as_zero_and_classify_low() {
        for ind in classify(&HashMap::new()) {
            assert_eq!(ind.value, 0.0);
            assert_eq!(ind.level, FopLevel::Low);
            assert_eq!(ind.color, "green");
        }
    }

    #[test]
    fn threshold_boundaries() {
        // Exactly at threshold stays MEDIUM; strictly above is HIGH.
        // Exactly at half the threshold stays LOW.
        let map = per_100g(&[("Total Fat", 17.5), ("Saturated Fat", 2.5), ("Sodium", 600.1)]);
        let indicators = classify(&map);

        assert_eq!(indicators[0].level, FopLevel::Medium);
        assert_eq!(indicators[1].level, FopLevel::Low);
        assert_eq!(indicators[3].level, FopLevel::High);
        assert_eq!(indicators[3].color, "red");
    }

    #[test]
    fn high_sodium_scenario() {
        let map = per_100g(&[("Sodium", 1845.62)]);
        let sodium = classify(&map).pop().unwrap();
        assert_eq!(sodium.level, FopLevel::High);
        assert_eq!(sodium.color, "red");
    }

    #[test]
    fn level_is_monotonic_in_value() {
        let steps: Vec<FopLevel> = [0.0, 2.5, 2.6, 5.0, 5.1, 50.0]
            .iter()
            .map(|&v| {
                let map = per_100g(&[("Saturated Fat", v)]);
                classify(&map)[1].level
            })
            .collect();

        for pair in steps.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}

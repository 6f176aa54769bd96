use std::collections::BTreeMap;

use serde::Serialize;

/// Maps the label text printed on the facts panel (trimmed, lowercased) to the
/// canonical key the output file uses. A label outside this vocabulary is
/// fatal; see [`crate::parse::Error::UnknownNutrient`].
pub fn canonical_key(label: &str) -> Option<&'static str> {
    Some(match label {
        "total fat" => "fat",
        "saturated fat" => "saturated-fat",
        "trans fat" => "trans-fat",
        "cholesterol" => "cholesterol",
        "sodium" => "sodium",
        "total carbohydrate" => "carbohydrates",
        "sugars" => "sugars",
        "dietary fiber" => "fiber",
        "protein" => "proteins",
        "calcium" => "calcium",
        "vitamin a" => "vitamin-a",
        "vitamin c" => "vitamin-c",
        "iron" => "iron",
        _ => return None,
    })
}

/// FDA reference daily intakes, used to turn a percent daily value into an
/// absolute amount.
/// https://www.fda.gov/food/new-nutrition-facts-label/daily-value-new-nutrition-and-supplement-facts-labels
pub fn daily_value(key: &str) -> Option<f64> {
    Some(match key {
        "calcium" => 1300.0,  // mg
        "vitamin-a" => 900.0, // µg retinol activity equivalent
        "vitamin-c" => 90.0,  // mg
        "iron" => 18.0,       // mg
        _ => return None,
    })
}

/// Nutrient values keep the shape the site publishes them in: calories and
/// percent-derived amounts as numbers, macro rows as the literal amount
/// string. Downstream consumers expect exactly this mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NutrientValue {
    Amount(f64),
    Literal(String),
}

pub type NutrientMap = BTreeMap<&'static str, NutrientValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_round_trip() {
        assert_eq!(canonical_key("total fat"), Some("fat"));
        assert_eq!(canonical_key("dietary fiber"), Some("fiber"));
        assert_eq!(canonical_key("potassium"), None);
    }

    #[test]
    fn test_daily_values_cover_vitamin_keys_only() {
        assert_eq!(daily_value("vitamin-c"), Some(90.0));
        assert_eq!(daily_value("fat"), None);
    }

    #[test]
    fn test_serialized_shape() {
        let mut map = NutrientMap::new();
        map.insert("calories", NutrientValue::Amount(210.0));
        map.insert("fat", NutrientValue::Literal("5.0".into()));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"calories":210.0,"fat":"5.0"}"#
        );
    }
}

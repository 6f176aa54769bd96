//! Final on-disk shape of a scrape run: `{"foodList": [...], "version": 1}`
//! written with sorted keys and 4-space indentation.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;

use crate::parse::{NutrientMap, RecipeInfo, RecipeRef};

pub const SNAPSHOT_VERSION: u32 = 1;

/// One fully assembled menu item. Fields are declared in sorted key order so
/// the serialized object's keys come out sorted without a custom serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    brand: String,
    name: String,
    nutrition: NutrientMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    portion: Option<f64>,
    #[serde(rename = "uniqueId")]
    unique_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl MenuItem {
    /// Merges a menu page entry with its recipe page data. `brand` is the
    /// synthesized "<hall> <station> <meal time>" label the downstream tracker
    /// files the item under.
    pub fn assemble(
        hall: &str,
        meal_time: &str,
        station: &str,
        recipe: &RecipeRef,
        info: RecipeInfo,
    ) -> Self {
        let (nutrition, portion, unit) = info.into_parts();
        Self {
            brand: format!("{hall} {station} {meal_time}"),
            name: recipe.name().to_owned(),
            nutrition,
            portion,
            unique_id: recipe.id().to_owned(),
            unit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSnapshot {
    #[serde(rename = "foodList")]
    food_list: Vec<MenuItem>,
    version: u32,
}

impl MenuSnapshot {
    pub fn new(food_list: Vec<MenuItem>) -> Self {
        Self {
            food_list,
            version: SNAPSHOT_VERSION,
        }
    }

    pub fn file_name(hall: &str) -> String {
        format!("ucla_menu_{hall}.json")
    }

    pub fn food_list(&self) -> &[MenuItem] {
        &self.food_list
    }

    /// Writes the snapshot, silently replacing whatever a previous run left at
    /// the same path.
    pub async fn save(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let f = fs::File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path.as_ref())
            .await?;
        let mut f = f.into_std().await;
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut f, formatter);
        self.serialize(&mut ser).map_err(From::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::HallMenu;
    use serde_json::json;
    use std::fs as std_fs;

    fn fixture_menu() -> HallMenu {
        let html =
            std_fs::read_to_string("./src/parse/html_examples/menu_page/menu.html").unwrap();
        let document = scraper::Html::parse_document(&html);
        HallMenu::from_html_element(document.root_element())
            .expect("The example html should be valid")
    }

    fn fixture_recipe() -> RecipeInfo {
        let html =
            std_fs::read_to_string("./src/parse/html_examples/recipe_page/recipe.html").unwrap();
        let document = scraper::Html::parse_document(&html);
        RecipeInfo::from_html_element(document.root_element())
            .expect("The example html should be valid")
    }

    #[test]
    fn test_assembled_item_serialization() {
        let menu = fixture_menu();
        let (meal_time, station, recipe) = menu
            .items()
            .last()
            .expect("the fixture menu should have items");
        let item = MenuItem::assemble("DeNeve", meal_time, station, recipe, fixture_recipe());
        assert_eq!(item.brand(), "DeNeve Harvest Lunch");

        let snapshot = MenuSnapshot::new(vec![item]);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "version": 1,
                "foodList": [{
                    "brand": "DeNeve Harvest Lunch",
                    "name": "Chicken Pot Pie",
                    "nutrition": {
                        "calories": 210.0,
                        "fat": "5.0",
                        "vitamin-c": 18.0,
                    },
                    "portion": 1.0,
                    "uniqueId": "141138",
                    "unit": "cup",
                }]
            })
        );
    }

    #[test]
    fn test_item_without_recipe_data_omits_portion_and_unit() {
        let menu = fixture_menu();
        let (meal_time, station, recipe) = menu.items().next().unwrap();
        let item = MenuItem::assemble(
            "DeNeve",
            meal_time,
            station,
            recipe,
            RecipeInfo::default(),
        );
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "brand": "DeNeve The Front Burner Breakfast",
                "name": "Scrambled Eggs",
                "nutrition": {},
                "uniqueId": "979326",
            })
        );
    }

    #[test]
    fn test_sorted_keys_and_indentation() {
        let menu = fixture_menu();
        let (meal_time, station, recipe) = menu.items().last().unwrap();
        let item = MenuItem::assemble("DeNeve", meal_time, station, recipe, fixture_recipe());
        let snapshot = MenuSnapshot::new(vec![item]);

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        snapshot.serialize(&mut ser).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("{\n    \"foodList\""));
        assert!(text.ends_with("\"version\": 1\n}"));
        let brand = text.find("\"brand\"").unwrap();
        let name = text.find("\"name\"").unwrap();
        let unique_id = text.find("\"uniqueId\"").unwrap();
        let unit = text.find("\"unit\"").unwrap();
        assert!(brand < name && name < unique_id && unique_id < unit);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_run() {
        let path = std::env::temp_dir().join("ucla_menu_save_test.json");
        let menu = fixture_menu();
        let (meal_time, station, recipe) = menu.items().last().unwrap();
        let item = MenuItem::assemble("DeNeve", meal_time, station, recipe, fixture_recipe());

        MenuSnapshot::new(vec![item]).save(&path).await.unwrap();
        MenuSnapshot::new(vec![]).save(&path).await.unwrap();

        let text = std_fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, json!({"foodList": [], "version": 1}));
        std_fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_name() {
        assert_eq!(MenuSnapshot::file_name("DeNeve"), "ucla_menu_DeNeve.json");
    }
}

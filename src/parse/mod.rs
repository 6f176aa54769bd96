mod error;
pub use error::Error;
mod menu_page;
mod recipe_page;
mod static_selector;
mod text;

pub use menu_page::{HallMenu, MealBlock, RecipeRef, Station};
pub use recipe_page::{NutrientMap, NutrientValue, RecipeInfo};
pub use text::remove_excess_whitespace;

//! Parsing for a recipe's nutrition detail page.

mod nutrients;
mod recipe_info;

pub use nutrients::{NutrientMap, NutrientValue};
pub use recipe_info::RecipeInfo;

//! Parsing for a dining hall's menu page: one `div.menu-block` per meal time,
//! stations inside each block, recipe links inside each station.

mod hall_menu;
mod recipe_ref;
mod station;

pub use hall_menu::{HallMenu, MealBlock};
pub use recipe_ref::RecipeRef;
pub use station::Station;

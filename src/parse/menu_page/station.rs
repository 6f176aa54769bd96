use super::RecipeRef;
use crate::parse::text::collect_text;
use crate::parse::{remove_excess_whitespace, Error};
use crate::static_selector;

/// A named serving line within a meal time, ex. "The Front Burner" or
/// "Flex Bar".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    recipes: Vec<RecipeRef>,
}

impl Station {
    /// Parses one `li.sect-item` element. The station name is the first
    /// non-empty line of the element's text; the item list sits below it.
    pub fn from_html_element(element: scraper::ElementRef) -> Result<Self, Error> {
        let text = collect_text(element);
        let name = text
            .trim()
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .ok_or_else(|| {
                Error::html_parse_error("Every station should have a name as its first line.")
            })?;
        let name = remove_excess_whitespace(name).into_owned();

        static_selector!(ITEM_LIST_SELECTOR <- "ul.item-list");
        let item_list = element.select(&ITEM_LIST_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Every station should have an item list.")
        })?;
        static_selector!(ITEM_SELECTOR <- "li.menu-item");
        let recipes = item_list
            .select(&ITEM_SELECTOR)
            .map(RecipeRef::from_html_element)
            .collect::<Result<_, Error>>()?;

        Ok(Self { name, recipes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn recipes(&self) -> &[RecipeRef] {
        &self.recipes
    }
}

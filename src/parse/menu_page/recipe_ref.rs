use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::parse::text::collect_text;
use crate::parse::{remove_excess_whitespace, Error};
use crate::static_selector;

/// One menu item as listed on the hall's menu page: the recipe name plus the
/// link to its nutrition detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRef {
    name: String,
    id: String, // numeric id from the url path, ex. 141138
    url: Url,
}

impl RecipeRef {
    /// Parses one `li.menu-item` element.
    pub fn from_html_element(element: scraper::ElementRef) -> Result<Self, Error> {
        static_selector!(LINK_SELECTOR <- "a.recipelink");
        let Some(link) = element.select(&LINK_SELECTOR).next() else {
            return Err(Error::html_parse_error(
                "Every menu item should have a recipe link.",
            ));
        };
        let href = link
            .attr("href")
            .ok_or_else(|| Error::html_parse_error("Recipe link does not have a href attr."))?;
        let url = Url::parse(href)
            .map_err(|_| Error::html_parse_error("Recipe link href is not a valid url."))?;
        let name = remove_excess_whitespace(collect_text(link).trim()).into_owned();
        Self::from_parts(name, url)
    }

    fn from_parts(name: String, url: Url) -> Result<Self, Error> {
        static ID_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"/Recipes/(\d+)/").expect("regex should be valid"));
        let id = ID_RE
            .captures(url.path())
            .ok_or_else(|| {
                Error::html_parse_error("Recipe url does not contain a numeric recipe id.")
            })?[1]
            .to_owned();
        Ok(Self { name, id, url })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_from_html_element() {
        let html =
            fs::read_to_string("./src/parse/html_examples/menu_page/menu_item.html").unwrap();
        let document = scraper::Html::parse_document(&html);
        let recipe = RecipeRef::from_html_element(document.root_element())
            .expect("The example html should be valid");
        assert_eq!(recipe.name(), "Chicken Pot Pie");
        assert_eq!(recipe.id(), "141138");
        assert_eq!(
            recipe.url().as_str(),
            "https://menu.dining.ucla.edu/Recipes/141138/1"
        );
    }

    #[test]
    fn test_id_requires_recipes_path() {
        let url: Url = "https://menu.dining.ucla.edu/Menus/DeNeve/".parse().unwrap();
        let err = RecipeRef::from_parts("Scrambled Eggs".into(), url).unwrap_err();
        assert!(matches!(err, Error::HtmlParse(_)));
    }
}

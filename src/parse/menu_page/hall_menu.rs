use super::{RecipeRef, Station};
use crate::parse::text::text_from_selection;
use crate::parse::Error;
use crate::static_selector;

/// One `div.menu-block`: every station served at a single meal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealBlock {
    meal_time: String,
    stations: Vec<Station>,
}

impl MealBlock {
    pub fn from_html_element(element: scraper::ElementRef) -> Result<Self, Error> {
        static_selector!(HEADER_SELECTOR <- "h3.col-header");
        let meal_time =
            text_from_selection(&HEADER_SELECTOR, element, "menu block", "meal time header")?
                .trim()
                .to_owned();

        static_selector!(SECT_LIST_SELECTOR <- "ul.sect-list");
        let sect_list = element.select(&SECT_LIST_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Every menu block should have a station list.")
        })?;
        static_selector!(STATION_SELECTOR <- "li.sect-item");
        let stations = sect_list
            .select(&STATION_SELECTOR)
            .map(Station::from_html_element)
            .collect::<Result<_, Error>>()?;

        Ok(Self {
            meal_time,
            stations,
        })
    }

    pub fn meal_time(&self) -> &str {
        &self.meal_time
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}

/// The full menu page for one dining hall on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallMenu {
    blocks: Vec<MealBlock>,
}

impl HallMenu {
    pub fn from_html_element(element: scraper::ElementRef) -> Result<Self, Error> {
        static_selector!(CONTENT_SELECTOR <- "#main-content");
        let content = element.select(&CONTENT_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Menu page should have a main content region.")
        })?;
        static_selector!(BLOCK_SELECTOR <- "div.menu-block");
        let blocks = content
            .select(&BLOCK_SELECTOR)
            .map(MealBlock::from_html_element)
            .collect::<Result<_, Error>>()?;

        Ok(Self { blocks })
    }

    pub fn blocks(&self) -> &[MealBlock] {
        &self.blocks
    }

    /// Page-order iteration over every (meal time, station, recipe) triple.
    /// The output file's item order comes straight from this.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str, &RecipeRef)> {
        self.blocks.iter().flat_map(|block| {
            block.stations().iter().flat_map(move |station| {
                station
                    .recipes()
                    .iter()
                    .map(move |recipe| (block.meal_time(), station.name(), recipe))
            })
        })
    }
}

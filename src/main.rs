#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod error;
mod fetch;
mod parse;
mod snapshot;

use chrono::NaiveDate;
use log::info;
use scraper::Html;

use crate::fetch::make_client;
use crate::parse::{HallMenu, RecipeInfo};
use crate::snapshot::{MenuItem, MenuSnapshot};

pub use error::Result;

/// Which hall to scrape and for which date. With `date: None` the menu server
/// resolves the empty date segment to today.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub dining_hall: String,
    pub date: Option<NaiveDate>,
}

const DINING_HALL: &str = "DeNeve";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let config = ScrapeConfig {
        dining_hall: DINING_HALL.to_owned(),
        date: None,
    };
    let client = make_client();
    let food_list = scrape_hall(&client, &config).await?;
    info!(
        "scraped {} menu items from {}",
        food_list.len(),
        config.dining_hall
    );
    let snapshot = MenuSnapshot::new(food_list);
    let path = MenuSnapshot::file_name(&config.dining_hall);
    snapshot.save(&path).await?;
    info!("wrote {path}");
    Ok(())
}

/// Fetches the hall's menu page, then every linked recipe page. Recipe fetches
/// stay sequential so the output list keeps page order; any fetch or parse
/// failure aborts the run and leaves no snapshot behind.
async fn scrape_hall(client: &reqwest::Client, config: &ScrapeConfig) -> Result<Vec<MenuItem>> {
    let page = fetch::menu_page(client, &config.dining_hall, config.date).await?;
    let menu = {
        let document = Html::parse_document(&page);
        HallMenu::from_html_element(document.root_element())?
    };

    let mut food_list = Vec::new();
    for (meal_time, station, recipe) in menu.items() {
        log::debug!("fetching recipe {} ({})", recipe.name(), recipe.id());
        let body = fetch::recipe_page(client, recipe.url()).await?;
        let info = {
            let document = Html::parse_document(&body);
            RecipeInfo::from_html_element(document.root_element())?
        };
        food_list.push(MenuItem::assemble(
            &config.dining_hall,
            meal_time,
            station,
            recipe,
            info,
        ));
    }
    Ok(food_list)
}

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use super::nutrients::{canonical_key, daily_value, NutrientMap, NutrientValue};
use crate::parse::text::{collect_text, text_from_selection};
use crate::parse::Error;
use crate::static_selector;

/// Everything the nutrition facts panel of one recipe page publishes. A page
/// without the panel parses to [`RecipeInfo::default`], which is a valid
/// outcome rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeInfo {
    nutrition: NutrientMap,
    portion: Option<f64>,
    unit: Option<String>,
}

impl RecipeInfo {
    pub fn from_html_element(element: ElementRef) -> Result<Self, Error> {
        static_selector!(CONTENT_SELECTOR <- "#main-content");
        let content = element.select(&CONTENT_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Recipe page should have a main content region.")
        })?;
        static_selector!(CONTAINER_SELECTOR <- "div.recipecontainer");
        let Some(container) = content.select(&CONTAINER_SELECTOR).next() else {
            // some recipes publish no facts panel at all
            return Ok(Self::default());
        };
        static_selector!(BOX_SELECTOR <- "div.nfbox");
        let nfbox = container.select(&BOX_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Recipe container should have a nutrition facts box.")
        })?;

        let mut nutrition = NutrientMap::new();

        static_selector!(CAL_SELECTOR <- "p.nfcal");
        let cal_line = nfbox.select(&CAL_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Nutrition facts box should have a calorie line.")
        })?;
        nutrition.insert(
            "calories",
            NutrientValue::Amount(parse_calories(&collect_text(cal_line))?),
        );

        static_selector!(SERV_SELECTOR <- "p.nfserv");
        let serv_line = nfbox.select(&SERV_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Nutrition facts box should have a serving size line.")
        })?;
        let (portion, unit) = parse_serving_size(&collect_text(serv_line))?;

        static_selector!(NUTRIENT_ROW_SELECTOR <- "p.nfnutrient");
        for row in nfbox.select(&NUTRIENT_ROW_SELECTOR) {
            let (key, amount) = parse_nutrient_row(&collect_text(row))?;
            nutrition.insert(key, NutrientValue::Literal(amount));
        }

        static_selector!(VITAMIN_SELECTOR <- "span.nfvitleft, span.nfvitright");
        for entry in nfbox.select(&VITAMIN_SELECTOR) {
            let (key, amount) = parse_vitamin_entry(entry)?;
            nutrition.insert(key, NutrientValue::Amount(amount));
        }

        Ok(Self {
            nutrition,
            portion: Some(portion),
            unit: Some(unit),
        })
    }

    pub const fn nutrition(&self) -> &NutrientMap {
        &self.nutrition
    }

    pub const fn portion(&self) -> Option<f64> {
        self.portion
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn into_parts(self) -> (NutrientMap, Option<f64>, Option<String>) {
        (self.nutrition, self.portion, self.unit)
    }
}

/// The first decimal number in the calorie line is the calorie count.
fn parse_calories(text: &str) -> Result<f64, Error> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("regex should be valid"));
    let found = RE
        .find(text)
        .ok_or_else(|| Error::number_parse_error("Calorie line has no number."))?;
    found
        .as_str()
        .parse()
        .map_err(|_| Error::number_parse_error("Calorie value is not a valid number."))
}

/// Matches `Serving Size <amount> <unit words>` where the amount is a decimal
/// or a fraction like `1/2`.
fn parse_serving_size(text: &str) -> Result<(f64, String), Error> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"Serving Size ([\.\d]+(?:/[\.\d]+)?)\s+([a-zA-Z][a-zA-Z\s]*)")
            .expect("regex should be valid")
    });
    let caps = RE.captures(text).ok_or_else(|| {
        Error::number_parse_error("Serving size line does not match the expected pattern.")
    })?;
    let portion = parse_portion(&caps[1])?;
    let unit = caps[2].trim_end().to_owned();
    Ok((portion, unit))
}

fn parse_portion(raw: &str) -> Result<f64, Error> {
    let err = || Error::number_parse_error("Serving size amount is not a valid number.");
    if let Some((numerator, denominator)) = raw.split_once('/') {
        let numerator: f64 = numerator.trim().parse().map_err(|_| err())?;
        let denominator: f64 = denominator.trim().parse().map_err(|_| err())?;
        Ok(numerator / denominator)
    } else {
        raw.parse().map_err(|_| err())
    }
}

/// A macro row's text looks like "Saturated Fat 3.4g 17%". The amount is kept
/// as the literal string the page printed.
fn parse_nutrient_row(text: &str) -> Result<(&'static str, String), Error> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"([a-zA-Z\s]+)(\d+(?:\.\d+)?)([^\d\s]?g)").expect("regex should be valid")
    });
    let caps = RE.captures(text).ok_or_else(|| {
        Error::number_parse_error("Nutrient row does not match the expected pattern.")
    })?;
    let label = caps[1].trim().to_lowercase();
    let key = canonical_key(&label).ok_or_else(|| Error::unknown_nutrient(&label))?;
    Ok((key, caps[2].trim().to_owned()))
}

/// Vitamin and mineral entries publish a percent daily value; the stored
/// amount is `pct / 100 * daily value`.
fn parse_vitamin_entry(entry: ElementRef) -> Result<(&'static str, f64), Error> {
    static_selector!(NAME_SELECTOR <- "span.nfvitname");
    static_selector!(PCT_SELECTOR <- "span.nfvitpct");
    let name = text_from_selection(&NAME_SELECTOR, entry, "vitamin entry", "name")?;
    let pct = text_from_selection(&PCT_SELECTOR, entry, "vitamin entry", "percentage")?;
    let label = name.trim().to_lowercase();
    let key = canonical_key(&label).ok_or_else(|| Error::unknown_nutrient(&label))?;
    let dv = daily_value(key).ok_or_else(|| Error::unknown_nutrient(&label))?;
    let pct: f64 = pct
        .trim()
        .trim_matches(['%', ' '])
        .parse()
        .map_err(|_| Error::number_parse_error("Vitamin percentage is not a valid number."))?;
    Ok((key, pct / 100.0 * dv))
}

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::Error;

/// Finds the first element matching `selector` under `element` and returns its
/// first text node. The labels only feed the error message.
pub fn text_from_selection<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
    parent_label: &str,
    child_label: &str,
) -> Result<&'a str, Error> {
    let child = element.select(selector).next().ok_or_else(|| {
        Error::html_parse_error(&format!(
            "Every {parent_label} element should have a {child_label}."
        ))
    })?;
    inner_text(child, child_label)
}

pub fn inner_text<'a>(element: ElementRef<'a>, text_label: &str) -> Result<&'a str, Error> {
    element
        .text()
        .next()
        .ok_or_else(|| Error::text_node_parse_error(&format!("{text_label} should have text inside.")))
}

/// Every text node of the element concatenated, for lines whose text is split
/// across child spans.
pub fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s\s+").expect("regex should be valid"));
    RE.replace_all(s, " ")
}

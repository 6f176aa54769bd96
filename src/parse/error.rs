use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    HtmlParse(String),
    TextNodeParse(String),
    NumberParse(String),
    UnknownNutrient(String),
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }
    pub fn text_node_parse_error(msg: &str) -> Self {
        Self::TextNodeParse(msg.to_string())
    }
    pub fn number_parse_error(msg: &str) -> Self {
        Self::NumberParse(msg.to_string())
    }
    /// A nutrient label on the facts panel that is outside the known
    /// vocabulary. Treated as fatal so a markup change shows up as a failed
    /// run instead of a silently thinner output file.
    pub fn unknown_nutrient(label: &str) -> Self {
        Self::UnknownNutrient(label.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {}", msg),
            Self::TextNodeParse(msg) => write!(f, "Text Node Parse Error: {}", msg),
            Self::NumberParse(msg) => write!(f, "Number Parse Error: {}", msg),
            Self::UnknownNutrient(label) => write!(f, "Unknown nutrient label: {label:?}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

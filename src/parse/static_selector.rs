/// Declares a lazily-parsed CSS selector as a static. The selector literal is
/// checked the first time it is used; an invalid literal is a programmer error
/// and panics.
#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: std::sync::LazyLock<scraper::Selector> = std::sync::LazyLock::new(|| {
            match scraper::Selector::parse($sel) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", $sel, e),
            }
        });
    };
}

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical offset (px) after which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of a section that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const CONTACT_EMAIL: &str = "fomus.official@gmail.com";

pub mod translate {
    pub const CALLBACK_NAME: &str = "initGoogleTranslate";
    pub const SCRIPT_URL: &str =
        "https://translate.google.com/translate_a/element.js?cb=initGoogleTranslate";
    pub const CONTAINER_ID: &str = "google_translate_element";
    pub const PAGE_LANGUAGE: &str = "ja";
    pub const INCLUDED_LANGUAGES: &str = "en,fr,ar";
}

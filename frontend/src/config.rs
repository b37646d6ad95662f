use log::Level;

/// Every call-to-action on the page scrolls to the closing section.
pub const PRIMARY_CTA_HREF: &str = "#final-cta";

pub const BRAND_NAME: &str = "Saramatic";
pub const PRODUCT_NAME: &str = "The Saramatic Affirmations Journal & Planner";

// Matches a "max-w-sm" column.
pub const DEFAULT_CAROUSEL_MAX_WIDTH: &str = "24rem";

// Header switches to its scrolled look past this many pixels.
pub const HEADER_SCROLL_THRESHOLD: i32 = 48;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose carousel transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

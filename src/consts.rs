//! Shared constants: storage keys, DOM hooks, and interaction tuning.
//!
//! These are the defaults behind [`crate::config::SiteConfig`]; a page can
//! override any of them through its inline config block.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the dark mode flag (`"true"` / `"false"`).
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Id of the theme toggle control.
pub const THEME_TOGGLE_ID: &str = "darkModeToggle";

/// Class placed on `<html>` while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Selector matching the two logo images (light first, dark second).
pub const LOGO_SELECTOR: &str = ".logo-image";

/// Class that hides a logo image.
pub const LOGO_HIDDEN_CLASS: &str = "dark-hidden";

/// Selector for the toggle's icon image.
pub const TOGGLE_ICON_SELECTOR: &str = ".toggle-icon-light";

/// Icon shown while the light theme is active.
pub const LIGHT_ICON_SRC: &str = "asset/icons/light_icon.png";

/// Icon shown while the dark theme is active.
pub const DARK_ICON_SRC: &str = "asset/icons/dark_icon.png";

// ── Carousels ───────────────────────────────────────────────────

/// Length of the transition lock after a slide change, in milliseconds.
pub const TRANSITION_MS: u32 = 600;

/// Horizontal travel a swipe must exceed before it navigates, in pixels.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Wrapper of the homepage carousel.
pub const PRIMARY_WRAPPER_SELECTOR: &str = ".carousel-wrapper";

/// Radio group name shared by the homepage slide inputs.
pub const PRIMARY_SLIDE_GROUP: &str = "carousel";

/// Selector for the homepage carousel's dot indicators.
pub const PRIMARY_DOT_SELECTOR: &str = ".control-dot";

/// Wrapper of each design carousel.
pub const DESIGN_WRAPPER_SELECTOR: &str = ".design-carousel-wrapper";

/// Radio group prefix for design carousels; instance `k` uses `{prefix}{k + 1}`.
pub const DESIGN_SLIDE_GROUP_PREFIX: &str = "design-carousel-";

/// Class of a design carousel's dot indicators.
pub const DESIGN_DOT_CLASS: &str = "design-control-dot";

//! Page-level configuration.
//!
//! Every field has a default matching the site's markup, so a page with no
//! config block behaves exactly like one with an empty `{}`. Pages that
//! deviate embed a `<script type="application/json" id="site-config">` block
//! overriding only the fields they need.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::SiteError;

/// Id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub carousel: CarouselConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub root_class: String,
    pub logo_selector: String,
    pub logo_hidden_class: String,
    pub icon_selector: String,
    pub light_icon_src: String,
    pub dark_icon_src: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            root_class: consts::DARK_MODE_CLASS.to_owned(),
            logo_selector: consts::LOGO_SELECTOR.to_owned(),
            logo_hidden_class: consts::LOGO_HIDDEN_CLASS.to_owned(),
            icon_selector: consts::TOGGLE_ICON_SELECTOR.to_owned(),
            light_icon_src: consts::LIGHT_ICON_SRC.to_owned(),
            dark_icon_src: consts::DARK_ICON_SRC.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Transition lock length in milliseconds.
    pub transition_ms: u32,
    /// Swipe/drag travel that must be exceeded to navigate, in pixels.
    pub swipe_threshold_px: f64,
    pub primary: PrimaryCarouselConfig,
    pub design: DesignCarouselConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: consts::TRANSITION_MS,
            swipe_threshold_px: consts::SWIPE_THRESHOLD_PX,
            primary: PrimaryCarouselConfig::default(),
            design: DesignCarouselConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrimaryCarouselConfig {
    pub wrapper_selector: String,
    pub slide_group: String,
    pub dot_selector: String,
    /// Evaluate mouse drag release against the swipe threshold. Off by
    /// default: the homepage carousel only tracks drags.
    pub drag_navigates: bool,
}

impl Default for PrimaryCarouselConfig {
    fn default() -> Self {
        Self {
            wrapper_selector: consts::PRIMARY_WRAPPER_SELECTOR.to_owned(),
            slide_group: consts::PRIMARY_SLIDE_GROUP.to_owned(),
            dot_selector: consts::PRIMARY_DOT_SELECTOR.to_owned(),
            drag_navigates: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesignCarouselConfig {
    pub wrapper_selector: String,
    pub slide_group_prefix: String,
    pub dot_class: String,
}

impl Default for DesignCarouselConfig {
    fn default() -> Self {
        Self {
            wrapper_selector: consts::DESIGN_WRAPPER_SELECTOR.to_owned(),
            slide_group_prefix: consts::DESIGN_SLIDE_GROUP_PREFIX.to_owned(),
            dot_class: consts::DESIGN_DOT_CLASS.to_owned(),
        }
    }
}

impl DesignCarouselConfig {
    /// Radio group name for the design carousel at `index` among matched wrappers.
    #[must_use]
    pub fn slide_group(&self, index: usize) -> String {
        format!("{}{}", self.slide_group_prefix, index + 1)
    }
}

impl SiteConfig {
    /// Parse a config block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the text is not valid JSON for this shape.
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Read the page's inline config block, falling back to defaults when it
    /// is absent or malformed.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document(doc: &web_sys::Document) -> Self {
        let Some(el) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let text = el.text_content().unwrap_or_default();
        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}

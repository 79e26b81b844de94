//! Dark mode initialization and toggle.
//!
//! Reads the stored preference from `localStorage`, applies the `.dark-mode`
//! class to `<html>`, and swaps the two logo images and the toggle icon to
//! match. A click on the toggle flips the class, persists the resulting state,
//! and reapplies the visuals.
//!
//! TRADE-OFFS
//! ==========
//! Visuals are always set explicitly rather than toggled, so reapplying the
//! same mode is a no-op. Every target element is optional; a page without a
//! toggle or icon still gets the stored theme applied.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::config::ThemeConfig;
use crate::error::SiteError;

/// Stored value meaning dark mode is on. Anything else reads as light.
const STORED_DARK: &str = "true";
const STORED_LIGHT: &str = "false";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Interpret a stored flag. Missing or unrecognised values mean light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_dark(value == Some(STORED_DARK))
    }

    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The string persisted for this mode.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() { STORED_DARK } else { STORED_LIGHT }
    }
}

/// Complete visual state for one theme mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeVisuals {
    /// Whether the root element carries the dark mode class.
    pub root_class_present: bool,
    /// Hidden flags for the light logo (index 0) and the dark logo (index 1).
    pub logo_hidden: [bool; 2],
    /// `src` for the toggle icon.
    pub icon_src: String,
}

impl ThemeVisuals {
    #[must_use]
    pub fn for_mode(mode: ThemeMode, config: &ThemeConfig) -> Self {
        let dark = mode.is_dark();
        let icon_src = if dark { &config.dark_icon_src } else { &config.light_icon_src };
        Self {
            root_class_present: dark,
            logo_hidden: [dark, !dark],
            icon_src: icon_src.clone(),
        }
    }
}

/// Key-value storage for the theme flag.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-memory store, used when browser storage is unavailable and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Theme state independent of the DOM: reads the stored flag on load and
/// persists the flag after each toggle.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    config: ThemeConfig,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, config: ThemeConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mode to apply when the page loads.
    #[must_use]
    pub fn initial_mode(&self) -> ThemeMode {
        ThemeMode::from_stored(self.store.load(&self.config.storage_key).as_deref())
    }

    #[must_use]
    pub fn visuals(&self, mode: ThemeMode) -> ThemeVisuals {
        ThemeVisuals::for_mode(mode, &self.config)
    }

    /// Record the root class state left by a toggle and return the mode it
    /// implies. A failed write is logged; the page still switches theme.
    pub fn commit(&mut self, root_has_class: bool) -> ThemeMode {
        let mode = ThemeMode::from_dark(root_has_class);
        if let Err(e) = self.store.save(&self.config.storage_key, mode.as_stored()) {
            log::warn!("theme preference not saved: {e}");
        }
        log::debug!("theme switched to {mode:?}");
        mode
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{LocalStorage, apply_visuals, init};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Event, Storage, Window};

    use super::{PreferenceStore, ThemeController, ThemeVisuals};
    use crate::config::ThemeConfig;
    use crate::dom;
    use crate::error::SiteError;

    /// `window.localStorage`, if the browser grants access to it.
    pub struct LocalStorage(Option<Storage>);

    impl LocalStorage {
        #[must_use]
        pub fn open(window: &Window) -> Self {
            match window.local_storage() {
                Ok(storage) => Self(storage),
                Err(e) => {
                    log::debug!("localStorage unavailable: {}", SiteError::from(e));
                    Self(None)
                }
            }
        }
    }

    impl PreferenceStore for LocalStorage {
        fn load(&self, key: &str) -> Option<String> {
            let storage = self.0.as_ref()?;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::debug!("localStorage read failed: {}", SiteError::from(e));
                    None
                }
            }
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
            let Some(storage) = self.0.as_ref() else {
                return Err(SiteError::Dom("localStorage unavailable".to_owned()));
            };
            storage.set_item(key, value)?;
            Ok(())
        }
    }

    /// Set the root class, logo visibility, and icon source for `visuals`.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is invalid or a DOM call throws.
    pub fn apply_visuals(doc: &Document, config: &ThemeConfig, visuals: &ThemeVisuals) -> Result<(), SiteError> {
        if let Some(root) = doc.document_element() {
            dom::set_class(&root, &config.root_class, visuals.root_class_present)?;
        }
        let logos = dom::elements(&doc.query_selector_all(&config.logo_selector)?);
        for (logo, hidden) in logos.iter().zip(visuals.logo_hidden) {
            dom::set_class(logo, &config.logo_hidden_class, hidden)?;
        }
        if let Some(icon) = doc.query_selector(&config.icon_selector)? {
            icon.set_attribute("src", &visuals.icon_src)?;
        }
        Ok(())
    }

    /// Apply the stored theme and wire the toggle control.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial apply fails or the listener cannot be attached.
    pub fn init(window: &Window, doc: &Document, config: &ThemeConfig) -> Result<(), SiteError> {
        let controller = ThemeController::new(LocalStorage::open(window), config.clone());
        let mode = controller.initial_mode();
        apply_visuals(doc, config, &controller.visuals(mode))?;

        let Some(toggle) = doc.get_element_by_id(&config.toggle_id) else {
            log::debug!("no #{} on page; theme toggle inactive", config.toggle_id);
            return Ok(());
        };

        let controller = Rc::new(RefCell::new(controller));
        let doc = doc.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            if let Err(e) = on_toggle(&doc, &controller) {
                log::warn!("theme toggle failed: {e}");
            }
        })
    }

    fn on_toggle(doc: &Document, controller: &RefCell<ThemeController<LocalStorage>>) -> Result<(), SiteError> {
        let root = doc.document_element().ok_or(SiteError::NoDocument)?;
        let mut controller = controller.borrow_mut();
        let now_dark = root.class_list().toggle(&controller.config().root_class)?;
        let mode = controller.commit(now_dark);
        let visuals = controller.visuals(mode);
        apply_visuals(doc, controller.config(), &visuals)
    }
}

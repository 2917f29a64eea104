//! Theme controller: pick the initial theme, apply it, flip it on click.
//!
//! DESIGN
//! ======
//! Storage, media query, and root element are constructor-injected so the
//! controller never reaches for page globals. Adapter failures never surface
//! to callers: they are logged and the controller falls back to light (for
//! reads) or carries on with the remaining side effect (for writes).

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::env::{ColorSchemeSignal, PreferenceStore, ThemeRoot, ToggleControl};
use crate::theme::Theme;

pub struct ThemeController<S, M, R> {
    config: ThemeConfig,
    store: S,
    scheme: M,
    root: R,
    toggle_wired: Cell<bool>,
}

impl<S, M, R> ThemeController<S, M, R>
where
    S: PreferenceStore,
    M: ColorSchemeSignal,
    R: ThemeRoot,
{
    pub fn new(store: S, scheme: M, root: R) -> Self {
        Self::with_config(ThemeConfig::default(), store, scheme, root)
    }

    pub fn with_config(config: ThemeConfig, store: S, scheme: M, root: R) -> Self {
        Self { config, store, scheme, root, toggle_wired: Cell::new(false) }
    }

    /// Theme to apply on first load.
    ///
    /// A stored `"dark"`/`"light"` wins. Anything else (missing key, other
    /// strings, unreadable storage) defers to the OS color scheme, and a
    /// missing media API means light.
    pub fn preferred_theme(&self) -> Theme {
        match self.store.load(&self.config.storage_key) {
            Ok(Some(raw)) => {
                if let Some(theme) = Theme::parse(&raw) {
                    return theme;
                }
                log::debug!("ignoring stored theme value {raw:?}");
            }
            Ok(None) => {}
            Err(err) => log::warn!("reading theme preference: {err}"),
        }

        match self.scheme.matches(&self.config.dark_query) {
            Ok(true) => Theme::Dark,
            Ok(false) => Theme::Light,
            Err(err) => {
                log::warn!("reading color scheme: {err}");
                Theme::Light
            }
        }
    }

    /// Set the root attribute and persist `theme`.
    ///
    /// Each step is attempted even if the other fails.
    pub fn set_theme(&self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(&self.config.attribute, theme.as_str()) {
            log::warn!("applying theme {theme}: {err}");
        }
        if let Err(err) = self.store.save(&self.config.storage_key, theme.as_str()) {
            log::warn!("persisting theme {theme}: {err}");
        }
        log::debug!("theme set to {theme}");
    }

    /// Theme currently on the root element, if it is a recognized value.
    pub fn current_theme(&self) -> Option<Theme> {
        self.root.attribute(&self.config.attribute).as_deref().and_then(Theme::parse)
    }

    /// Flip the root's current theme and apply the result.
    ///
    /// Only an explicit `"dark"` flips to light; a missing or unrecognized
    /// attribute flips to dark.
    pub fn toggle(&self) -> Theme {
        let next = self.current_theme().map_or(Theme::Dark, Theme::toggled);
        self.set_theme(next);
        next
    }

    /// Compute the preferred theme and apply it.
    pub fn apply_preferred(&self) -> Theme {
        let theme = self.preferred_theme();
        self.set_theme(theme);
        theme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }
}

impl<S, M, R> ThemeController<S, M, R>
where
    S: PreferenceStore + 'static,
    M: ColorSchemeSignal + 'static,
    R: ThemeRoot + 'static,
{
    /// Apply the preferred theme and, when a toggle control is present, wire
    /// its clicks to [`ThemeController::toggle`].
    ///
    /// The click listener is attached at most once per controller; later
    /// calls only re-apply the preferred theme. Returns the theme applied.
    pub fn init<T: ToggleControl>(self: &Rc<Self>, toggle: Option<&T>) -> Theme {
        let theme = self.apply_preferred();

        let Some(toggle) = toggle else {
            log::debug!("no theme toggle control; skipping click listener");
            return theme;
        };
        if self.toggle_wired.get() {
            log::debug!("theme toggle already wired");
            return theme;
        }

        let controller = Rc::clone(self);
        if let Err(err) = toggle.on_click(Box::new(move || {
            controller.toggle();
        })) {
            log::warn!("attaching theme toggle listener: {err}");
            return theme;
        }
        self.toggle_wired.set(true);
        theme
    }
}

//! `web-sys` adapters and the WASM entrypoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded as a module script on every page. `start` installs console logging,
//! waits for `DOMContentLoaded` if the document is still parsing, then builds
//! a [`ThemeController`] over the live `localStorage`, `matchMedia`, and
//! `<html>` handles and wires the `#theme-toggle` button if the page has one.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::env::{ColorSchemeSignal, PreferenceStore, ThemeRoot, ToggleControl};
use crate::error::ThemeError;
use crate::lifecycle::{DocumentPhase, claim_first_run, run_when_ready};

thread_local! {
    /// Set by the first entrypoint call on this page.
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, absent when the browser disables storage.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage access denied: {}", js_message(&err));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or_else(|| ThemeError::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?.get_item(key).map_err(|err| ThemeError::Storage(js_message(&err)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?.set_item(key, value).map_err(|err| ThemeError::Storage(js_message(&err)))
    }
}

/// `window.matchMedia`.
pub struct MediaScheme {
    window: Window,
}

impl MediaScheme {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorSchemeSignal for MediaScheme {
    fn matches(&self, query: &str) -> Result<bool, ThemeError> {
        match self.window.match_media(query) {
            Ok(Some(list)) => Ok(list.matches()),
            Ok(None) => Err(ThemeError::Dom(format!("matchMedia returned nothing for {query}"))),
            Err(err) => Err(ThemeError::Dom(js_message(&err))),
        }
    }
}

/// `document.documentElement`.
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    pub fn from_document(document: &Document) -> Option<Self> {
        document.document_element().map(|element| Self { element })
    }
}

impl ThemeRoot for DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element.set_attribute(name, value).map_err(|err| ThemeError::Dom(js_message(&err)))
    }
}

/// Toggle button looked up by id.
pub struct DomToggle {
    element: Element,
}

impl DomToggle {
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document.get_element_by_id(id).map(|element| Self { element })
    }
}

impl ToggleControl for DomToggle {
    fn on_click(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError> {
        let callback = Closure::wrap(handler);
        self.element
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|err| ThemeError::Dom(js_message(&err)))?;
        // The button lives as long as the page.
        callback.forget();
        Ok(())
    }
}

/// Controller over the live page handles.
pub type BrowserController = ThemeController<LocalStore, MediaScheme, DocumentRoot>;

/// Build the controller, apply the preferred theme, and wire the toggle.
///
/// Returns `None` when the document has no root element.
pub fn mount(
    window: &Window,
    document: &Document,
    config: ThemeConfig,
) -> Option<Rc<BrowserController>> {
    let Some(root) = DocumentRoot::from_document(document) else {
        log::warn!("document has no root element; theme not applied");
        return None;
    };
    let toggle = DomToggle::find(document, &config.toggle_id);
    let controller = Rc::new(ThemeController::with_config(
        config,
        LocalStore::from_window(window),
        MediaScheme::new(window.clone()),
        root,
    ));
    let theme = controller.init(toggle.as_ref());
    log::info!("theme initialized: {theme}");
    Some(controller)
}

fn install_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }
}

fn boot(config: ThemeConfig) {
    if !STARTED.with(claim_first_run) {
        log::warn!("theme controller already started on this page");
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let phase = DocumentPhase::parse(&document.ready_state());
    let listen_on = document.clone();
    run_when_ready(
        phase,
        move || {
            mount(&window, &document, config);
        },
        move |deferred| {
            let callback = Closure::once_into_js(deferred);
            if let Err(err) = listen_on
                .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            {
                log::warn!("deferring theme init failed: {}", js_message(&err));
            }
        },
    );
}

/// WASM entrypoint with the default page contract.
#[wasm_bindgen]
pub fn start() {
    install_logging();
    boot(ThemeConfig::default());
}

/// WASM entrypoint taking JSON overrides for [`ThemeConfig`].
///
/// Malformed overrides are logged and the defaults are used.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(overrides: &str) {
    install_logging();
    let config = ThemeConfig::from_json(overrides).unwrap_or_else(|err| {
        log::warn!("{err}; using default theme config");
        ThemeConfig::default()
    });
    boot(config);
}

use super::*;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::ThemeError;
use crate::memory::{FixedScheme, MemoryRoot, MemoryStore, MemoryToggle};

type MemoryController = ThemeController<MemoryStore, FixedScheme, MemoryRoot>;

fn controller(store: MemoryStore, scheme: FixedScheme) -> MemoryController {
    ThemeController::new(store, scheme, MemoryRoot::new())
}

fn stored(theme: &str) -> MemoryStore {
    MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, theme)
}

fn root_attr(ctl: &MemoryController) -> Option<String> {
    ctl.root().attribute("data-theme")
}

/// Toggle control that refuses listeners.
struct DetachedToggle;

impl ToggleControl for DetachedToggle {
    fn on_click(&self, _handler: Box<dyn Fn()>) -> Result<(), ThemeError> {
        Err(ThemeError::Dom("listener rejected".into()))
    }
}

/// Root element whose attribute writes always fail.
struct ReadOnlyRoot;

impl ThemeRoot for ReadOnlyRoot {
    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }

    fn set_attribute(&self, _name: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Dom("read-only root".into()))
    }
}

#[test]
fn preferred_theme_follows_os_dark_when_nothing_stored() {
    assert_eq!(controller(MemoryStore::new(), FixedScheme::dark()).preferred_theme(), Theme::Dark);
}

#[test]
fn preferred_theme_is_light_when_os_light_or_unavailable() {
    let os_light = controller(MemoryStore::new(), FixedScheme::light());
    assert_eq!(os_light.preferred_theme(), Theme::Light);
    let no_media = controller(MemoryStore::new(), FixedScheme::unavailable());
    assert_eq!(no_media.preferred_theme(), Theme::Light);
}

#[test]
fn stored_value_wins_over_os_signal() {
    assert_eq!(controller(stored("dark"), FixedScheme::light()).preferred_theme(), Theme::Dark);
    assert_eq!(controller(stored("light"), FixedScheme::dark()).preferred_theme(), Theme::Light);
}

#[test]
fn unrecognized_stored_value_falls_through_to_os_signal() {
    assert_eq!(controller(stored("DARK"), FixedScheme::dark()).preferred_theme(), Theme::Dark);
    assert_eq!(controller(stored("sepia"), FixedScheme::light()).preferred_theme(), Theme::Light);
}

#[test]
fn missing_storage_degrades_to_os_signal_then_light() {
    let no_storage = controller(MemoryStore::unavailable(), FixedScheme::dark());
    assert_eq!(no_storage.preferred_theme(), Theme::Dark);
    assert_eq!(
        controller(MemoryStore::unavailable(), FixedScheme::unavailable()).preferred_theme(),
        Theme::Light
    );
}

#[test]
fn set_theme_writes_root_attribute_and_storage() {
    let ctl = controller(MemoryStore::new(), FixedScheme::light());
    ctl.set_theme(Theme::Dark);
    assert_eq!(root_attr(&ctl).as_deref(), Some("dark"));
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(ctl.current_theme(), Some(Theme::Dark));
}

#[test]
fn set_theme_twice_matches_setting_once() {
    let once = controller(MemoryStore::new(), FixedScheme::light());
    once.set_theme(Theme::Dark);

    let twice = controller(MemoryStore::new(), FixedScheme::light());
    twice.set_theme(Theme::Dark);
    twice.set_theme(Theme::Dark);

    assert_eq!(root_attr(&once), root_attr(&twice));
    assert_eq!(once.store().get(DEFAULT_STORAGE_KEY), twice.store().get(DEFAULT_STORAGE_KEY));
    assert_eq!(twice.store().len(), 1);
}

#[test]
fn set_theme_still_applies_when_storage_is_missing() {
    let ctl = controller(MemoryStore::unavailable(), FixedScheme::light());
    ctl.set_theme(Theme::Dark);
    assert_eq!(ctl.current_theme(), Some(Theme::Dark));
    assert!(ctl.store().is_empty());
}

#[test]
fn set_theme_still_persists_when_root_rejects_write() {
    let ctl = ThemeController::new(MemoryStore::new(), FixedScheme::light(), ReadOnlyRoot);
    ctl.set_theme(Theme::Dark);
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(ctl.current_theme(), None);
}

#[test]
fn toggle_flips_dark_to_light_and_back() {
    let ctl = controller(MemoryStore::new(), FixedScheme::light());
    ctl.set_theme(Theme::Dark);
    assert_eq!(ctl.toggle(), Theme::Light);
    assert_eq!(root_attr(&ctl).as_deref(), Some("light"));
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn toggle_without_recognized_attribute_goes_dark() {
    let ctl = controller(MemoryStore::new(), FixedScheme::light());
    assert_eq!(ctl.toggle(), Theme::Dark);

    let odd = ThemeController::new(
        MemoryStore::new(),
        FixedScheme::light(),
        MemoryRoot::new().with_attribute("data-theme", "sepia"),
    );
    assert_eq!(odd.toggle(), Theme::Dark);
}

#[test]
fn init_applies_preferred_theme_and_persists_it() {
    let ctl = Rc::new(controller(MemoryStore::new(), FixedScheme::dark()));
    let applied = ctl.init::<MemoryToggle>(None);
    assert_eq!(applied, Theme::Dark);
    assert_eq!(root_attr(&ctl).as_deref(), Some("dark"));
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn init_wires_toggle_clicks() {
    let ctl = Rc::new(controller(stored("dark"), FixedScheme::light()));
    let toggle = MemoryToggle::new();
    ctl.init(Some(&toggle));
    assert_eq!(toggle.listener_count(), 1);

    toggle.click();
    assert_eq!(ctl.current_theme(), Some(Theme::Light));
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY).as_deref(), Some("light"));

    toggle.click();
    assert_eq!(ctl.current_theme(), Some(Theme::Dark));
}

#[test]
fn custom_config_names_are_used() {
    let config = ThemeConfig {
        storage_key: "k".into(),
        attribute: "data-mode".into(),
        ..ThemeConfig::default()
    };
    let ctl = ThemeController::with_config(
        config,
        MemoryStore::new(),
        FixedScheme::dark(),
        MemoryRoot::new(),
    );
    ctl.apply_preferred();
    assert_eq!(ctl.root().attribute("data-mode").as_deref(), Some("dark"));
    assert_eq!(ctl.store().get("k").as_deref(), Some("dark"));
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY), None);
    assert_eq!(ctl.config().attribute, "data-mode");
}

#[test]
fn repeated_init_wires_toggle_once() {
    let ctl = Rc::new(controller(stored("dark"), FixedScheme::light()));
    let toggle = MemoryToggle::new();
    ctl.init(Some(&toggle));
    ctl.init(Some(&toggle));
    assert_eq!(toggle.listener_count(), 1);

    toggle.click();
    assert_eq!(ctl.current_theme(), Some(Theme::Light));
}

#[test]
fn init_applies_theme_when_listener_cannot_attach() {
    let ctl = Rc::new(controller(MemoryStore::new(), FixedScheme::dark()));
    assert_eq!(ctl.init(Some(&DetachedToggle)), Theme::Dark);
    assert_eq!(root_attr(&ctl).as_deref(), Some("dark"));
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));

    let toggle = MemoryToggle::new();
    ctl.init(Some(&toggle));
    assert_eq!(toggle.listener_count(), 1);
}

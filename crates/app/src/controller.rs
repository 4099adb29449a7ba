//! Theme controller — keeps the saved preference and the page root in step.
//!
//! The controller has three entry points:
//!
//! - [`ThemeController::apply_saved`] copies a saved theme onto the root
//!   element. It runs once at boot, before content renders, and again when
//!   the content-loaded milestone fires, to pick up a theme another tab
//!   saved in the meantime.
//! - [`ThemeController::toggle`] flips the root attribute between dark and
//!   the default palette and saves the result.
//! - [`install`] wires both applies into a page lifecycle.
//!
//! Toggle reads the *root attribute*, not the store: the page currently on
//! screen is the source of truth when the user asks for a change.

use std::rc::Rc;

use themeswitch_domain::error::ThemeError;
use themeswitch_domain::theme::Theme;

use crate::config::ThemeConfig;
use crate::ports::{DocumentRoot, PageLifecycle, PreferenceStore};

/// Applies and toggles the theme of a single page.
pub struct ThemeController<S, D> {
    store: S,
    root: D,
    config: ThemeConfig,
}

impl<S: PreferenceStore, D: DocumentRoot> ThemeController<S, D> {
    /// Create a controller over the given store and root element.
    pub fn new(store: S, root: D, config: ThemeConfig) -> Self {
        Self {
            store,
            root,
            config,
        }
    }

    /// The names this controller reads and writes.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The theme saved in the store, if one is present.
    ///
    /// An empty saved value counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the store cannot be read.
    pub fn saved_theme(&self) -> Result<Option<Theme>, ThemeError> {
        let stored = self.store.get(&self.config.storage_key)?;
        Ok(Theme::from_stored(stored))
    }

    /// The theme currently set on the root element.
    ///
    /// Returns `None` when the attribute is not set at all; an attribute set
    /// to the empty string is the default theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] when the root cannot be read.
    pub fn current_theme(&self) -> Result<Option<Theme>, ThemeError> {
        let value = self.root.attribute(&self.config.attribute)?;
        Ok(value.map(Theme::from))
    }

    /// Copy the saved theme onto the root element.
    ///
    /// Leaves the root untouched when nothing is saved. Running it again
    /// without an intervening store change has no further effect.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the store or the root element fails.
    pub fn apply_saved(&self) -> Result<Option<Theme>, ThemeError> {
        let Some(theme) = self.saved_theme()? else {
            tracing::debug!(key = %self.config.storage_key, "no saved theme");
            return Ok(None);
        };
        self.root.set_attribute(&self.config.attribute, theme.as_str())?;
        tracing::debug!(theme = %theme, "applied saved theme");
        Ok(Some(theme))
    }

    /// Flip the root attribute between dark and the default theme and save it.
    ///
    /// The root is updated first, then the store receives the same value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the root element or the store fails.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let current = self.current_theme()?;
        let next = Theme::next(current.as_ref(), &self.config.dark);
        self.root.set_attribute(&self.config.attribute, next.as_str())?;
        self.store.set(&self.config.storage_key, next.as_str())?;
        tracing::debug!(theme = %next, "toggled theme");
        Ok(next)
    }
}

/// Boot a page: apply the saved theme now, then again once content is loaded.
///
/// The immediate apply happens before this function returns, so callers that
/// run it ahead of rendering avoid a flash of the wrong palette. The deferred
/// apply logs failures instead of returning them since nothing is left to
/// report to.
///
/// # Errors
///
/// Returns [`ThemeError`] when the immediate apply fails or the lifecycle
/// refuses the callback.
pub fn install<S, D, L>(
    controller: Rc<ThemeController<S, D>>,
    lifecycle: &L,
) -> Result<(), ThemeError>
where
    S: PreferenceStore + 'static,
    D: DocumentRoot + 'static,
    L: PageLifecycle + ?Sized,
{
    controller.apply_saved()?;
    lifecycle.on_content_loaded(Box::new(move || {
        if let Err(err) = controller.apply_saved() {
            tracing::warn!(error = %err, "unable to reapply saved theme");
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use crate::ports::ContentLoadedCallback;

    #[derive(Default)]
    struct InMemoryStore {
        slots: RefCell<HashMap<String, String>>,
        writes: Cell<usize>,
    }

    impl InMemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn value(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for InMemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
            self.writes.set(self.writes.get() + 1);
            self.slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryRoot {
        attributes: RefCell<HashMap<String, String>>,
        writes: Cell<usize>,
    }

    impl InMemoryRoot {
        fn with(name: &str, value: &str) -> Self {
            let root = Self::default();
            root.attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            root
        }

        fn value(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }
    }

    impl DocumentRoot for InMemoryRoot {
        fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
            Ok(self.value(name))
        }

        fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
            self.writes.set(self.writes.get() + 1);
            self.attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Err(ThemeError::storage("storage disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::storage("storage disabled"))
        }
    }

    struct ReadOnlyRoot;

    impl DocumentRoot for ReadOnlyRoot {
        fn attribute(&self, _name: &str) -> Result<Option<String>, ThemeError> {
            Ok(None)
        }

        fn set_attribute(&self, _name: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::document("attribute rejected"))
        }
    }

    #[derive(Default)]
    struct QueuedLifecycle {
        pending: RefCell<Vec<ContentLoadedCallback>>,
    }

    impl QueuedLifecycle {
        fn fire(&self) {
            let pending = std::mem::take(&mut *self.pending.borrow_mut());
            for callback in pending {
                callback();
            }
        }
    }

    impl PageLifecycle for QueuedLifecycle {
        fn on_content_loaded(&self, callback: ContentLoadedCallback) -> Result<(), ThemeError> {
            self.pending.borrow_mut().push(callback);
            Ok(())
        }
    }

    struct RefusingLifecycle;

    impl PageLifecycle for RefusingLifecycle {
        fn on_content_loaded(&self, _callback: ContentLoadedCallback) -> Result<(), ThemeError> {
            Err(ThemeError::lifecycle("no document"))
        }
    }

    fn controller(
        store: InMemoryStore,
        root: InMemoryRoot,
    ) -> ThemeController<Rc<InMemoryStore>, Rc<InMemoryRoot>> {
        ThemeController::new(Rc::new(store), Rc::new(root), ThemeConfig::default())
    }

    #[test]
    fn should_leave_root_unset_when_nothing_saved() {
        let ctrl = controller(InMemoryStore::default(), InMemoryRoot::default());
        assert_eq!(ctrl.apply_saved().unwrap(), None);
        assert_eq!(ctrl.root.value("data-theme"), None);
        assert_eq!(ctrl.root.writes.get(), 0);
    }

    #[test]
    fn should_leave_root_unset_when_saved_value_is_empty() {
        let ctrl = controller(InMemoryStore::with("theme", ""), InMemoryRoot::default());
        assert_eq!(ctrl.apply_saved().unwrap(), None);
        assert_eq!(ctrl.root.value("data-theme"), None);
    }

    #[test]
    fn should_apply_saved_dark_theme() {
        let ctrl = controller(
            InMemoryStore::with("theme", "dark"),
            InMemoryRoot::default(),
        );
        assert_eq!(ctrl.apply_saved().unwrap(), Some(Theme::dark()));
        assert_eq!(ctrl.root.value("data-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_apply_unknown_saved_value_verbatim() {
        let ctrl = controller(
            InMemoryStore::with("theme", "sepia"),
            InMemoryRoot::default(),
        );
        ctrl.apply_saved().unwrap();
        assert_eq!(ctrl.root.value("data-theme").as_deref(), Some("sepia"));
    }

    #[test]
    fn should_be_idempotent_when_applied_twice() {
        let ctrl = controller(
            InMemoryStore::with("theme", "dark"),
            InMemoryRoot::default(),
        );
        let first = ctrl.apply_saved().unwrap();
        let after_first = ctrl.root.value("data-theme");
        let second = ctrl.apply_saved().unwrap();
        assert_eq!(first, second);
        assert_eq!(ctrl.root.value("data-theme"), after_first);
    }

    #[test]
    fn should_never_write_store_when_applying() {
        let ctrl = controller(
            InMemoryStore::with("theme", "dark"),
            InMemoryRoot::default(),
        );
        ctrl.apply_saved().unwrap();
        assert_eq!(ctrl.store.writes.get(), 0);
    }

    #[test]
    fn should_toggle_unset_root_to_dark() {
        let ctrl = controller(InMemoryStore::default(), InMemoryRoot::default());
        assert_eq!(ctrl.toggle().unwrap(), Theme::dark());
        assert_eq!(ctrl.root.value("data-theme").as_deref(), Some("dark"));
        assert_eq!(ctrl.store.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_toggle_empty_root_to_dark() {
        let ctrl = controller(InMemoryStore::default(), InMemoryRoot::with("data-theme", ""));
        ctrl.toggle().unwrap();
        assert_eq!(ctrl.root.value("data-theme").as_deref(), Some("dark"));
        assert_eq!(ctrl.store.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_toggle_dark_root_to_empty() {
        let ctrl = controller(
            InMemoryStore::default(),
            InMemoryRoot::with("data-theme", "dark"),
        );
        let next = ctrl.toggle().unwrap();
        assert!(next.is_default());
        assert_eq!(ctrl.root.value("data-theme").as_deref(), Some(""));
        assert_eq!(ctrl.store.value("theme").as_deref(), Some(""));
    }

    #[test]
    fn should_read_root_not_store_when_toggling() {
        let ctrl = controller(
            InMemoryStore::with("theme", "dark"),
            InMemoryRoot::default(),
        );
        assert_eq!(ctrl.toggle().unwrap(), Theme::dark());
        assert_eq!(ctrl.store.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_return_to_start_after_two_toggles() {
        for start in ["dark", ""] {
            let ctrl = controller(
                InMemoryStore::default(),
                InMemoryRoot::with("data-theme", start),
            );
            ctrl.toggle().unwrap();
            ctrl.toggle().unwrap();
            assert_eq!(ctrl.root.value("data-theme").as_deref(), Some(start));
        }
    }

    #[test]
    fn should_keep_store_and_root_equal_after_toggle() {
        let ctrl = controller(InMemoryStore::default(), InMemoryRoot::default());
        for _ in 0..3 {
            ctrl.toggle().unwrap();
            assert_eq!(ctrl.store.value("theme"), ctrl.root.value("data-theme"));
        }
    }

    #[test]
    fn should_use_configured_names() {
        let config = ThemeConfig {
            storage_key: "site-theme".to_string(),
            attribute: "data-palette".to_string(),
            dark: Theme::new("night"),
        };
        let ctrl = ThemeController::new(InMemoryStore::default(), InMemoryRoot::default(), config);
        ctrl.toggle().unwrap();
        assert_eq!(ctrl.root.value("data-palette").as_deref(), Some("night"));
        assert_eq!(ctrl.store.value("site-theme").as_deref(), Some("night"));
        assert_eq!(ctrl.root.value("data-theme"), None);
    }

    #[test]
    fn should_report_current_theme() {
        let ctrl = controller(InMemoryStore::default(), InMemoryRoot::default());
        assert_eq!(ctrl.current_theme().unwrap(), None);
        ctrl.toggle().unwrap();
        assert_eq!(ctrl.current_theme().unwrap(), Some(Theme::dark()));
    }

    #[test]
    fn should_propagate_storage_failure_from_toggle() {
        let ctrl = ThemeController::new(BrokenStore, InMemoryRoot::default(), ThemeConfig::default());
        let err = ctrl.toggle().unwrap_err();
        assert!(matches!(err, ThemeError::Storage(_)));
    }

    #[test]
    fn should_not_save_when_root_rejects_toggle() {
        let store = Rc::new(InMemoryStore::default());
        let ctrl = ThemeController::new(Rc::clone(&store), ReadOnlyRoot, ThemeConfig::default());

        let err = ctrl.toggle().unwrap_err();
        assert!(matches!(err, ThemeError::Document(_)));
        assert_eq!(store.writes.get(), 0);
        assert_eq!(store.value("theme"), None);
    }

    #[test]
    fn should_propagate_document_failure_from_apply() {
        let ctrl = ThemeController::new(
            InMemoryStore::with("theme", "dark"),
            ReadOnlyRoot,
            ThemeConfig::default(),
        );
        assert!(matches!(ctrl.apply_saved(), Err(ThemeError::Document(_))));
    }

    #[test]
    fn should_apply_before_content_loaded_callback_runs() {
        let ctrl = Rc::new(controller(
            InMemoryStore::with("theme", "dark"),
            InMemoryRoot::default(),
        ));
        let lifecycle = QueuedLifecycle::default();

        install(Rc::clone(&ctrl), &lifecycle).unwrap();

        assert_eq!(ctrl.root.value("data-theme").as_deref(), Some("dark"));
        assert_eq!(ctrl.root.writes.get(), 1);
        assert_eq!(lifecycle.pending.borrow().len(), 1);

        lifecycle.fire();
        assert_eq!(ctrl.root.writes.get(), 2);
    }

    #[test]
    fn should_reapply_value_saved_by_another_tab_on_content_loaded() {
        let ctrl = Rc::new(controller(InMemoryStore::default(), InMemoryRoot::default()));
        let lifecycle = QueuedLifecycle::default();

        install(Rc::clone(&ctrl), &lifecycle).unwrap();
        assert_eq!(ctrl.root.value("data-theme"), None);

        ctrl.store
            .slots
            .borrow_mut()
            .insert("theme".to_string(), "dark".to_string());
        lifecycle.fire();

        assert_eq!(ctrl.root.value("data-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_propagate_lifecycle_refusal_from_install() {
        let ctrl = Rc::new(controller(InMemoryStore::default(), InMemoryRoot::default()));
        let err = install(ctrl, &RefusingLifecycle).unwrap_err();
        assert!(matches!(err, ThemeError::Lifecycle(_)));
    }

    #[test]
    fn should_fail_install_when_store_unreachable() {
        let ctrl = Rc::new(ThemeController::new(
            BrokenStore,
            InMemoryRoot::default(),
            ThemeConfig::default(),
        ));
        let lifecycle = QueuedLifecycle::default();
        assert!(install(ctrl, &lifecycle).is_err());
        assert!(lifecycle.pending.borrow().is_empty());
    }
}

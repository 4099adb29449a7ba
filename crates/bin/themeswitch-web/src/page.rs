//! The controller a page exposes to JavaScript once it has started.

use std::cell::RefCell;
use std::rc::Rc;

use themeswitch_app::controller::{ThemeController, install};
use themeswitch_app::ports::{DocumentRoot, PageLifecycle, PreferenceStore};
use themeswitch_domain::error::ThemeError;
use themeswitch_domain::theme::Theme;

/// Holds the page's controller, but only after [`ActivePage::activate`]
/// finished its boot sequence.
pub(crate) struct ActivePage<S, D> {
    controller: RefCell<Option<Rc<ThemeController<S, D>>>>,
}

impl<S, D> ActivePage<S, D>
where
    S: PreferenceStore + 'static,
    D: DocumentRoot + 'static,
{
    pub(crate) const fn new() -> Self {
        Self {
            controller: RefCell::new(None),
        }
    }

    /// Run `install` and keep the controller when it succeeds.
    ///
    /// On failure the page is left without a controller, even if an earlier
    /// activation succeeded.
    pub(crate) fn activate<L>(
        &self,
        controller: ThemeController<S, D>,
        lifecycle: &L,
    ) -> Result<(), ThemeError>
    where
        L: PageLifecycle + ?Sized,
    {
        *self.controller.borrow_mut() = None;
        let controller = Rc::new(controller);
        install(Rc::clone(&controller), lifecycle)?;
        *self.controller.borrow_mut() = Some(controller);
        Ok(())
    }

    /// Toggle the theme, or return `None` when no controller is active.
    pub(crate) fn toggle(&self) -> Option<Result<Theme, ThemeError>> {
        self.active().map(|controller| controller.toggle())
    }

    /// Read the root theme, or return `None` when no controller is active.
    pub(crate) fn current_theme(&self) -> Option<Result<Option<Theme>, ThemeError>> {
        self.active().map(|controller| controller.current_theme())
    }

    fn active(&self) -> Option<Rc<ThemeController<S, D>>> {
        self.controller.borrow().clone()
    }
}

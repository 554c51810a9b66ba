//! Light/dark theme: applied on load from storage, flipped by the toggle
//! button.

use std::cell::Cell;
use std::rc::Rc;

use super::Behavior;
use crate::config::ThemeConfig;
use crate::domain::{Theme, UiResult};
use crate::ports::{Page, Storage, UiEvent};

pub struct ThemeToggle<P: Page, S: Storage> {
    config: Rc<ThemeConfig>,
    storage: Rc<S>,
    shared: Option<Rc<Shared<P, S>>>,
    listeners: Vec<P::Listener>,
}

struct Shared<P: Page, S: Storage> {
    page: Rc<P>,
    storage: Rc<S>,
    config: Rc<ThemeConfig>,
    theme: Cell<Theme>,
}

impl<P: Page, S: Storage> ThemeToggle<P, S> {
    pub fn new(config: ThemeConfig, storage: Rc<S>) -> Self {
        Self {
            config: Rc::new(config),
            storage,
            shared: None,
            listeners: Vec::new(),
        }
    }

    /// Applied theme, once bound
    pub fn theme(&self) -> Option<Theme> {
        self.shared.as_ref().map(|s| s.theme.get())
    }
}

impl<P: Page, S: Storage> Behavior<P> for ThemeToggle<P, S> {
    fn name(&self) -> &'static str {
        "theme-toggle"
    }

    fn bind(&mut self, page: &Rc<P>) -> UiResult<()> {
        self.teardown();
        let stored = self
            .storage
            .get(&self.config.storage_key)
            .unwrap_or_else(|e| {
                log::warn!("[theme-toggle] cannot read stored theme: {}", e);
                None
            });
        let theme = Theme::from_stored(stored.as_deref());

        let shared = Rc::new(Shared {
            page: Rc::clone(page),
            storage: Rc::clone(&self.storage),
            config: Rc::clone(&self.config),
            theme: Cell::new(theme),
        });
        shared.apply(theme);

        match page.element_by_id(&self.config.button_id) {
            Some(button) => {
                let handler_state = Rc::clone(&shared);
                let listener = page.listen(
                    &button,
                    UiEvent::Click,
                    Rc::new(move || handler_state.toggle()),
                )?;
                self.listeners.push(listener);
            }
            None => log::debug!("[theme-toggle] no #{} button on page", self.config.button_id),
        }

        self.shared = Some(shared);
        Ok(())
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        self.shared = None;
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<P: Page, S: Storage> Shared<P, S> {
    /// Flip whatever the root currently carries, which other scripts may
    /// have changed since the last toggle
    fn toggle(&self) {
        let current = match self.page.document_element() {
            Some(root) => Theme::from_applied(self.page.attribute(&root, &self.config.attribute).as_deref()),
            None => self.theme.get(),
        };
        let next = current.toggled();
        self.apply(next);
        if let Err(e) = self.storage.set(&self.config.storage_key, next.as_str()) {
            log::warn!("[theme-toggle] cannot persist theme `{}`: {}", next, e);
        }
        self.theme.set(next);
        log::debug!("[theme-toggle] switched to {}", next);
    }

    fn apply(&self, theme: Theme) {
        match self.page.document_element() {
            Some(root) => {
                if let Err(e) = self.page.set_attribute(&root, &self.config.attribute, theme.as_str()) {
                    log::warn!("[theme-toggle] cannot set {}: {}", self.config.attribute, e);
                }
            }
            None => log::warn!("[theme-toggle] document has no root element"),
        }
        if let Some(icon) = self.page.element_by_id(&self.config.icon_id) {
            self.page.set_text(&icon, theme.icon());
        }
    }
}

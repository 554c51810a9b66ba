//! Page Behaviors
//!
//! Each behavior wires one kind of page element to its handler. Behaviors
//! do not know about each other; `BehaviorSet` only binds and tears them
//! down together.

mod file_name;
mod items_modal;
mod status_change;
mod theme_toggle;

use std::rc::Rc;

use crate::config::UiConfig;
use crate::domain::UiResult;
use crate::ports::{ItemsClient, Page, Storage};

pub use file_name::FileNameValidator;
pub use items_modal::ItemsModalController;
pub use status_change::StatusChangeConfirmer;
pub use theme_toggle::ThemeToggle;

/// A unit of page wiring that can be attached and detached
pub trait Behavior<P: Page> {
    fn name(&self) -> &'static str;

    /// Query the page once and register listeners.
    ///
    /// Missing elements are not an error: every page loads every behavior.
    fn bind(&mut self, page: &Rc<P>) -> UiResult<()>;

    /// Drop all listeners registered by `bind`
    fn teardown(&mut self);

    fn listener_count(&self) -> usize;
}

/// Behaviors bound and torn down together
pub struct BehaviorSet<P: Page> {
    behaviors: Vec<Box<dyn Behavior<P>>>,
    bound: bool,
}

impl<P: Page> Default for BehaviorSet<P> {
    fn default() -> Self {
        Self {
            behaviors: Vec::new(),
            bound: false,
        }
    }
}

impl<P: Page> BehaviorSet<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, behavior: impl Behavior<P> + 'static) -> Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Bind every behavior; returns how many bound without error
    pub fn bind_all(&mut self, page: &Rc<P>) -> usize {
        if self.bound {
            self.teardown_all();
        }
        self.bound = true;
        let mut bound = 0;
        for behavior in &mut self.behaviors {
            match behavior.bind(page) {
                Ok(()) => {
                    log::debug!(
                        "[{}] bound with {} listener(s)",
                        behavior.name(),
                        behavior.listener_count()
                    );
                    bound += 1;
                }
                Err(e) => {
                    log::error!("[{}] failed to bind: {}", behavior.name(), e);
                    behavior.teardown();
                }
            }
        }
        bound
    }

    pub fn teardown_all(&mut self) {
        for behavior in &mut self.behaviors {
            behavior.teardown();
        }
        self.bound = false;
        log::debug!("torn down {} behavior(s)", self.behaviors.len());
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// `pagehide`: a page kept in the back/forward cache (`persisted`)
    /// keeps its listeners, an unloading page releases them
    pub fn page_hidden(&mut self, persisted: bool) {
        if persisted {
            log::debug!("page cached, keeping listeners");
        } else {
            self.teardown_all();
        }
    }

    /// `pageshow`: rebind if the set was torn down; returns behaviors bound
    pub fn page_shown(&mut self, page: &Rc<P>) -> usize {
        if self.bound {
            return 0;
        }
        log::debug!("page shown after teardown, rebinding");
        self.bind_all(page)
    }

    pub fn listener_count(&self) -> usize {
        self.behaviors.iter().map(|b| b.listener_count()).sum()
    }
}

/// The four admin page behaviors configured from `config`
pub fn standard_behaviors<P, S, C>(config: &UiConfig, storage: Rc<S>, client: Rc<C>) -> BehaviorSet<P>
where
    P: Page,
    S: Storage,
    C: ItemsClient,
{
    BehaviorSet::new()
        .with(ItemsModalController::new(config.items_modal.clone(), client))
        .with(FileNameValidator::new(config.upload.clone()))
        .with(ThemeToggle::new(config.theme.clone(), storage))
        .with(StatusChangeConfirmer::new(config.status.clone()))
}

//! Admin Page Behaviors
//!
//! Layered like the rest of the admin frontend:
//! - domain: page state and pure updates (theme, status, items table, upload check)
//! - ports: what the host page must provide (DOM, storage, items endpoint)
//! - behaviors: event wiring for each page element, bound and torn down as a set

pub mod behaviors;
pub mod config;
pub mod domain;
pub mod messages;
pub mod ports;

#[cfg(test)]
mod testing;

pub use behaviors::{
    standard_behaviors, Behavior, BehaviorSet, FileNameValidator, ItemsModalController,
    StatusChangeConfirmer, ThemeToggle,
};
pub use config::{UiConfig, CONFIG_ELEMENT_ID};
pub use domain::{ItemRow, ItemsView, TableRow, Theme, UiError, UiResult};
pub use ports::{Handler, ItemsClient, MemoryStorage, Page, Storage, UiEvent};

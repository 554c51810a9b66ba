//! Ports Layer
//!
//! What the behaviors need from the host: the page, persistent storage and
//! the items endpoint. The wasm shell implements them with `web-sys`; tests
//! use in-memory fakes.

mod memory;
mod traits;

pub use memory::MemoryStorage;
pub use traits::{Handler, ItemsClient, Page, Storage, UiEvent};

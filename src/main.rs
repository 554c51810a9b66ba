//! Shipment Admin UI Entry Point
//!
//! Loaded by every admin page: reads the page config, starts logging and
//! binds the page behaviors to the server-rendered document.

mod bootstrap;
mod config;
mod http;
mod page;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use admin_behaviors::{standard_behaviors, BehaviorSet, UiConfig};
use leptos::ev;
use leptos::prelude::*;
use log::LevelFilter;

use http::FetchItemsClient;
use page::WebPage;
use storage::BrowserStorage;

thread_local! {
    static MOUNTED: RefCell<Option<(Rc<WebPage>, BehaviorSet<WebPage>)>> = const { RefCell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();

    let page = match WebPage::new() {
        Ok(page) => Rc::new(page),
        Err(e) => {
            web_sys::console::error_1(&e.into());
            return;
        }
    };

    let config_result = config::read(page.document());
    let config = config_result.clone().unwrap_or_default();
    init_logging(&config);
    if let Err(e) = config_result {
        log::error!("ignoring page config: {}", e);
    }

    let storage = Rc::new(BrowserStorage::local());
    let client = Rc::new(FetchItemsClient::new(config.items_modal.fetch_timeout_ms));
    let mut behaviors = standard_behaviors(&config, storage, client);
    let bound = behaviors.bind_all(&page);
    log::info!(
        "{}/{} behaviors bound, {} listener(s)",
        bound,
        behaviors.len(),
        behaviors.listener_count()
    );

    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some((page, behaviors)));

    // a page restored from the back/forward cache keeps running this module
    let _ = window_event_listener(ev::pagehide, |ev| {
        with_mounted(|_, behaviors| behaviors.page_hidden(ev.persisted()))
    });
    let _ = window_event_listener(ev::pageshow, |_| {
        with_mounted(|page, behaviors| {
            let rebound = behaviors.page_shown(page);
            if rebound > 0 {
                log::info!("{} behaviors rebound after page show", rebound);
            }
        })
    });
}

fn init_logging(config: &UiConfig) {
    let level = config.log_level_filter();
    if let Err(e) = rolling_logger::init(level.unwrap_or(LevelFilter::Info)) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
        return;
    }
    if level.is_none() {
        log::warn!("unknown log level `{}`, using info", config.log_level);
    }
}

fn with_mounted(f: impl FnOnce(&Rc<WebPage>, &mut BehaviorSet<WebPage>)) {
    MOUNTED.with(|mounted| {
        if let Some((page, behaviors)) = mounted.borrow_mut().as_mut() {
            f(page, behaviors);
        }
    });
}

//! Items Modal
//!
//! Clicking a "show items" trigger loads the inbound record's line items
//! into the shared modal table and opens the modal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::Behavior;
use crate::config::ItemsModalConfig;
use crate::domain::{ItemsView, UiError, UiResult};
use crate::ports::{ItemsClient, Page, UiEvent};

pub struct ItemsModalController<P: Page, C: ItemsClient> {
    config: Rc<ItemsModalConfig>,
    client: Rc<C>,
    shared: Option<Rc<Shared<P, C>>>,
    listeners: Vec<P::Listener>,
}

/// State captured by every trigger's click handler
struct Shared<P: Page, C: ItemsClient> {
    page: Rc<P>,
    client: Rc<C>,
    config: Rc<ItemsModalConfig>,
    view: RefCell<ItemsView>,
    /// Bumped per click; only the latest request may render
    generation: Cell<u64>,
}

impl<P: Page, C: ItemsClient> ItemsModalController<P, C> {
    pub fn new(config: ItemsModalConfig, client: Rc<C>) -> Self {
        Self {
            config: Rc::new(config),
            client,
            shared: None,
            listeners: Vec::new(),
        }
    }

    /// Current state of the table body
    pub fn view(&self) -> ItemsView {
        self.shared
            .as_ref()
            .map(|s| s.view.borrow().clone())
            .unwrap_or_default()
    }
}

impl<P: Page, C: ItemsClient> Behavior<P> for ItemsModalController<P, C> {
    fn name(&self) -> &'static str {
        "items-modal"
    }

    fn bind(&mut self, page: &Rc<P>) -> UiResult<()> {
        self.teardown();
        let triggers = page.query_all(&self.config.trigger_selector);
        if triggers.is_empty() {
            log::debug!("[items-modal] no `{}` triggers on page", self.config.trigger_selector);
            return Ok(());
        }

        let shared = Rc::new(Shared {
            page: Rc::clone(page),
            client: Rc::clone(&self.client),
            config: Rc::clone(&self.config),
            view: RefCell::new(ItemsView::Idle),
            generation: Cell::new(0),
        });

        for trigger in triggers {
            let handler_state = Rc::clone(&shared);
            let target = trigger.clone();
            let listener = page.listen(
                &trigger,
                UiEvent::Click,
                Rc::new(move || handler_state.open(&target)),
            )?;
            self.listeners.push(listener);
        }

        self.shared = Some(shared);
        Ok(())
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        if let Some(shared) = self.shared.take() {
            // invalidate any request still in flight
            shared.generation.set(shared.generation.get() + 1);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<P: Page, C: ItemsClient> Shared<P, C> {
    fn open(self: &Rc<Self>, trigger: &P::Element) {
        let Some(body) = self.page.element_by_id(&self.config.table_body_id) else {
            log::warn!("[items-modal] table body #{} not found", self.config.table_body_id);
            return;
        };

        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);

        self.render(&body, ItemsView::Loading);
        self.show_modal();

        let Some(url) = self.page.attribute(trigger, "data-url") else {
            let err = UiError::MissingAttribute {
                element: self.page.describe(trigger),
                attribute: "data-url".to_string(),
            };
            log::error!("[items-modal] {}", err);
            self.render(&body, ItemsView::from_result(Err(err)));
            return;
        };

        let inbound_id = self.page.attribute(trigger, "data-inbound-id");
        log::debug!("[items-modal] loading items for inbound {:?} from {}", inbound_id, url);

        let this = Rc::clone(self);
        self.page.spawn_local(Box::pin(async move {
            let result = this.client.fetch_items(&url).await;
            if this.generation.get() != ticket {
                log::debug!("[items-modal] dropping stale response from {}", url);
                return;
            }
            match &result {
                Ok(rows) => log::debug!("[items-modal] loaded {} item(s)", rows.len()),
                Err(e) => log::error!("[items-modal] failed to load {}: {}", url, e),
            }
            this.render(&body, ItemsView::from_result(result));
        }));
    }

    fn render(&self, body: &P::Element, view: ItemsView) {
        if let Err(e) = self.page.replace_rows(body, &view.rows()) {
            log::error!("[items-modal] failed to render rows: {}", e);
        }
        *self.view.borrow_mut() = view;
    }

    fn show_modal(&self) {
        let Some(modal) = self.page.element_by_id(&self.config.modal_id) else {
            log::warn!("[items-modal] modal #{} not found", self.config.modal_id);
            return;
        };
        if let Err(e) = self.page.show_modal(&modal) {
            log::warn!("[items-modal] failed to open modal: {}", e);
        }
    }
}

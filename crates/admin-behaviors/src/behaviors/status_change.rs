//! Outbound status selectors: confirm the new status, then submit the
//! record's status form; revert the selector on cancel.

use std::cell::RefCell;
use std::rc::Rc;

use super::Behavior;
use crate::config::StatusConfig;
use crate::domain::{StatusDecision, StatusSelection, UiError, UiResult};
use crate::messages;
use crate::ports::{Page, UiEvent};

const RECORD_ID_ATTR: &str = "data-id";
const PREVIOUS_ATTR: &str = "data-previous";

pub struct StatusChangeConfirmer<P: Page> {
    config: Rc<StatusConfig>,
    listeners: Vec<P::Listener>,
}

impl<P: Page> StatusChangeConfirmer<P> {
    pub fn new(config: StatusConfig) -> Self {
        Self {
            config: Rc::new(config),
            listeners: Vec::new(),
        }
    }
}

impl<P: Page> Behavior<P> for StatusChangeConfirmer<P> {
    fn name(&self) -> &'static str {
        "status-change"
    }

    fn bind(&mut self, page: &Rc<P>) -> UiResult<()> {
        self.teardown();
        for select in page.query_all(&self.config.selector) {
            let Some(record_id) = page.attribute(&select, RECORD_ID_ATTR) else {
                log::warn!(
                    "[status-change] {} has no {}, not wired",
                    page.describe(&select),
                    RECORD_ID_ATTR
                );
                continue;
            };

            let seed = page
                .attribute(&select, PREVIOUS_ATTR)
                .or_else(|| Some(page.value(&select)));
            let selection = RefCell::new(StatusSelection::new(record_id, seed));

            let page_ref = Rc::clone(page);
            let config = Rc::clone(&self.config);
            let target = select.clone();
            let listener = page.listen(
                &select,
                UiEvent::Change,
                Rc::new(move || on_change(&*page_ref, &config, &target, &selection)),
            )?;
            self.listeners.push(listener);
        }
        Ok(())
    }

    fn teardown(&mut self) {
        self.listeners.clear();
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn on_change<P: Page>(
    page: &P,
    config: &StatusConfig,
    select: &P::Element,
    selection: &RefCell<StatusSelection>,
) {
    let picked = page.value(select);
    let accepted = page.confirm(&messages::confirm_status_change(&picked));
    let (next, decision) = selection.borrow().decide(&picked, accepted);
    *selection.borrow_mut() = next;

    match decision {
        StatusDecision::Revert { to } => {
            log::debug!("[status-change] declined `{}`, back to `{}`", picked, to);
            page.set_value(select, &to);
        }
        StatusDecision::Submit { record_id, status } => {
            if let Err(e) = page.set_attribute(select, PREVIOUS_ATTR, &status) {
                log::warn!("[status-change] cannot record {}: {}", PREVIOUS_ATTR, e);
            }
            match submit_status(page, config, &record_id, &status) {
                Ok(()) => log::info!("[status-change] record {} -> `{}` submitted", record_id, status),
                Err(e) => {
                    log::error!("[status-change] record {} -> `{}` not submitted: {}", record_id, status, e);
                    page.alert(&messages::status_submit_failed(&e.to_string()));
                }
            }
        }
    }
}

/// Fill the record's hidden status field and submit its form
fn submit_status<P: Page>(page: &P, config: &StatusConfig, record_id: &str, status: &str) -> UiResult<()> {
    let form_id = format!("{}{}", config.form_id_prefix, record_id);
    let form = page
        .element_by_id(&form_id)
        .ok_or_else(|| UiError::MissingElement(format!("#{}", form_id)))?;

    let field_selector = format!("input[name=\"{}\"]", config.field_name);
    let field = page
        .query_within(&form, &field_selector)
        .ok_or_else(|| UiError::MissingElement(format!("#{} {}", form_id, field_selector)))?;

    page.set_value(&field, status);
    page.submit_form(&form)
}

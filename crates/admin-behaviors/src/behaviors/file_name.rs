//! Outbound form upload: only a file with the exact required name may stay
//! selected.

use std::rc::Rc;

use super::Behavior;
use crate::config::UploadConfig;
use crate::domain::{check_file_name, FileCheck, UiResult};
use crate::messages;
use crate::ports::{Page, UiEvent};

pub struct FileNameValidator<P: Page> {
    config: Rc<UploadConfig>,
    listeners: Vec<P::Listener>,
}

impl<P: Page> FileNameValidator<P> {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config: Rc::new(config),
            listeners: Vec::new(),
        }
    }
}

impl<P: Page> Behavior<P> for FileNameValidator<P> {
    fn name(&self) -> &'static str {
        "file-name"
    }

    fn bind(&mut self, page: &Rc<P>) -> UiResult<()> {
        self.teardown();
        let Some(input) = page.element_by_id(&self.config.input_id) else {
            log::debug!("[file-name] no #{} input on page", self.config.input_id);
            return Ok(());
        };

        let page_ref = Rc::clone(page);
        let config = Rc::clone(&self.config);
        let target = input.clone();
        let listener = page.listen(
            &input,
            UiEvent::Change,
            Rc::new(move || on_change(&*page_ref, &config, &target)),
        )?;
        self.listeners.push(listener);
        Ok(())
    }

    fn teardown(&mut self) {
        self.listeners.clear();
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn on_change<P: Page>(page: &P, config: &UploadConfig, input: &P::Element) {
    let chosen = page.selected_file_name(input);
    match check_file_name(&config.required_file_name, chosen.as_deref()) {
        FileCheck::NoFile | FileCheck::Accepted => {}
        FileCheck::Rejected { found } => {
            log::info!(
                "[file-name] rejected `{}`, expected `{}`",
                found,
                config.required_file_name
            );
            page.alert(&messages::wrong_file_name(&config.required_file_name));
            page.set_value(input, "");
        }
    }
}

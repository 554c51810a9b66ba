//! In-memory page, storage and items client for behavior tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::domain::{ItemRow, TableRow, UiError, UiResult};
use crate::ports::{Handler, ItemsClient, Page, UiEvent};

pub type NodeId = usize;

/// The `<html>` element
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub value: String,
    pub text: String,
    pub file_name: Option<String>,
    pub rows: Vec<TableRow>,
    pub parent: Option<NodeId>,
}

impl FakeNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            return self.classes.iter().any(|c| c == class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return self.id.as_deref() == Some(id);
        }
        // tag[name="value"]
        if let Some((tag, rest)) = selector.split_once('[') {
            let Some((name, value)) = rest.trim_end_matches(']').split_once('=') else {
                return false;
            };
            let value = value.trim_matches('"');
            return self.tag == tag && self.attributes.get(name).map(String::as_str) == Some(value);
        }
        self.tag == selector
    }
}

struct Registered {
    id: u64,
    node: NodeId,
    event: UiEvent,
    handler: Handler,
}

type Registry = RefCell<Vec<Registered>>;

pub struct FakeListener {
    registry: Weak<Registry>,
    id: u64,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().retain(|r| r.id != self.id);
        }
    }
}

#[derive(Default)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    registry: Rc<Registry>,
    next_listener: Cell<u64>,
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
    confirm_answers: RefCell<VecDeque<bool>>,
    pub submitted: RefCell<Vec<NodeId>>,
    pub shown_modals: RefCell<Vec<NodeId>>,
    tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl FakePage {
    pub fn new() -> Rc<Self> {
        let page = Self::default();
        page.nodes.borrow_mut().push(FakeNode::new("html"));
        Rc::new(page)
    }

    pub fn add(&self, node: FakeNode) -> NodeId {
        self.add_child(ROOT, node)
    }

    pub fn add_child(&self, parent: NodeId, mut node: FakeNode) -> NodeId {
        node.parent = Some(parent);
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> FakeNode {
        self.nodes.borrow()[id].clone()
    }

    /// Simulate the user picking a file
    pub fn choose_file(&self, input: NodeId, name: Option<&str>) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[input].file_name = name.map(str::to_string);
        nodes[input].value = name.map(|n| format!("C:\\fakepath\\{}", n)).unwrap_or_default();
    }

    /// Queue the answer to the next `confirm` call; unqueued calls answer yes
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answers.borrow_mut().push_back(answer);
    }

    pub fn fire(&self, node: NodeId, event: UiEvent) {
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .iter()
            .filter(|r| r.node == node && r.event == event)
            .map(|r| Rc::clone(&r.handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    /// Set a select's value and fire `change`
    pub fn select(&self, node: NodeId, value: &str) {
        self.nodes.borrow_mut()[node].value = value.to_string();
        self.fire(node, UiEvent::Change);
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Drive spawned tasks, in spawn order, until none are left
    pub fn run_tasks(&self) {
        loop {
            let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                futures::executor::block_on(task);
            }
        }
    }

    fn is_descendant(nodes: &[FakeNode], node: NodeId, ancestor: NodeId) -> bool {
        let mut current = nodes[node].parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }
}

impl Page for FakePage {
    type Element = NodeId;
    type Listener = FakeListener;

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.matches(selector))
            .map(|(id, _)| id)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
    }

    fn query_within(&self, parent: &NodeId, selector: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        nodes
            .iter()
            .enumerate()
            .find(|(id, n)| n.matches(selector) && Self::is_descendant(&nodes, *id, *parent))
            .map(|(id, _)| id)
    }

    fn document_element(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[*element].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> UiResult<()> {
        self.nodes.borrow_mut()[*element]
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn value(&self, element: &NodeId) -> String {
        self.nodes.borrow()[*element].value.clone()
    }

    fn set_value(&self, element: &NodeId, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*element].value = value.to_string();
        if value.is_empty() {
            nodes[*element].file_name = None;
        }
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.nodes.borrow_mut()[*element].text = text.to_string();
    }

    fn selected_file_name(&self, element: &NodeId) -> Option<String> {
        self.nodes.borrow()[*element].file_name.clone()
    }

    fn replace_rows(&self, body: &NodeId, rows: &[TableRow]) -> UiResult<()> {
        self.nodes.borrow_mut()[*body].rows = rows.to_vec();
        Ok(())
    }

    fn show_modal(&self, modal: &NodeId) -> UiResult<()> {
        self.shown_modals.borrow_mut().push(*modal);
        Ok(())
    }

    fn submit_form(&self, form: &NodeId) -> UiResult<()> {
        if self.nodes.borrow()[*form].tag != "form" {
            return Err(UiError::Js("not a form".to_string()));
        }
        self.submitted.borrow_mut().push(*form);
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answers.borrow_mut().pop_front().unwrap_or(true)
    }

    fn listen(&self, element: &NodeId, event: UiEvent, handler: Handler) -> UiResult<FakeListener> {
        let id = self.next_listener.get() + 1;
        self.next_listener.set(id);
        self.registry.borrow_mut().push(Registered {
            id,
            node: *element,
            event,
            handler,
        });
        Ok(FakeListener {
            registry: Rc::downgrade(&self.registry),
            id,
        })
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }

    fn describe(&self, element: &NodeId) -> String {
        let node = &self.nodes.borrow()[*element];
        match &node.id {
            Some(id) => format!("{}#{}", node.tag, id),
            None => node.tag.clone(),
        }
    }
}

/// Items endpoint answering from a fixed table, recording every request
#[derive(Default)]
pub struct FakeItemsClient {
    responses: RefCell<HashMap<String, UiResult<Vec<ItemRow>>>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeItemsClient {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, url: &str, response: UiResult<Vec<ItemRow>>) {
        self.responses.borrow_mut().insert(url.to_string(), response);
    }
}

#[async_trait(?Send)]
impl ItemsClient for FakeItemsClient {
    async fn fetch_items(&self, url: &str) -> UiResult<Vec<ItemRow>> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or(Err(UiError::Http { status: 404 }))
    }
}

pub fn item(code: &str, qty: &str, weight: &str, description: &str) -> ItemRow {
    ItemRow {
        item_code: code.to_string(),
        qty: qty.to_string(),
        weight: Some(weight.to_string()),
        description: Some(description.to_string()),
    }
}

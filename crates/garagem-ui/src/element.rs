//! Minimal element tree standing in for the browser DOM

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to an element
pub type ElementRef = Arc<Mutex<Element>>;

/// Lock an element, recovering the data if a previous holder panicked
pub fn lock(element: &ElementRef) -> MutexGuard<'_, Element> {
    element.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Events the helpers listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Input,
    Change,
    Click,
}

/// Ordered set of CSS classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add `class` when `force` is true, remove it otherwise
    pub fn toggle(&mut self, class: &str, force: bool) {
        if force {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    /// Replace every class with the whitespace-separated list in `value`
    pub fn set_class_name(&mut self, value: &str) {
        self.classes.clear();
        for class in value.split_whitespace() {
            self.add(class);
        }
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

type Callback = Box<dyn FnMut(&mut Element) + Send>;

struct Listener {
    event: EventType,
    once: bool,
    callback: Callback,
}

/// A node of the page: id, classes, text, `data-*` attributes, focus state,
/// event listeners and children.
#[derive(Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    class_list: ClassList,
    text: String,
    dataset: BTreeMap<String, String>,
    focused: bool,
    checked: bool,
    listeners: Vec<Listener>,
    children: Vec<ElementRef>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("id", &self.id)
            .field("class_list", &self.class_list)
            .field("text", &self.text)
            .field("dataset", &self.dataset)
            .field("focused", &self.focused)
            .field("checked", &self.checked)
            .field("listeners", &self.listeners.len())
            .field("children", &self.children.len())
            .finish()
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class_list.add(class);
        self
    }

    /// Set a `data-*` attribute (`key` without the `data-` prefix)
    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: ElementRef) -> Self {
        self.children.push(child);
        self
    }

    pub fn into_ref(self) -> ElementRef {
        Arc::new(Mutex::new(self))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn class_list(&self) -> &ClassList {
        &self.class_list
    }

    pub fn class_list_mut(&mut self) -> &mut ClassList {
        &mut self.class_list
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Checkbox state
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.dispatch(EventType::Change);
    }

    pub fn append_child(&mut self, child: ElementRef) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[ElementRef] {
        &self.children
    }

    /// Register a listener; a `once` listener is dropped after its first call
    pub fn add_event_listener(
        &mut self,
        event: EventType,
        once: bool,
        callback: impl FnMut(&mut Element) + Send + 'static,
    ) {
        self.listeners.push(Listener {
            event,
            once,
            callback: Box::new(callback),
        });
    }

    pub fn listener_count(&self, event: EventType) -> usize {
        self.listeners.iter().filter(|l| l.event == event).count()
    }

    /// Run every listener registered for `event`
    pub fn dispatch(&mut self, event: EventType) {
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.retain_mut(|listener| {
            if listener.event != event {
                return true;
            }
            (listener.callback)(self);
            !listener.once
        });
        // Listeners registered while dispatching go after the surviving ones
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }

    /// Store typed text and fire an `input` event, as a keystroke would
    pub fn type_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.dispatch(EventType::Input);
    }

    /// First element with the given id in this subtree, excluding `self`
    pub fn find_by_id(&self, id: &str) -> Option<ElementRef> {
        for child in &self.children {
            let guard = lock(child);
            if guard.id() == Some(id) {
                return Some(Arc::clone(child));
            }
            if let Some(found) = guard.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    /// Descendants carrying `class`, in document order
    pub fn descendants_with_class(&self, class: &str) -> Vec<ElementRef> {
        let mut found = Vec::new();
        for child in &self.children {
            let guard = lock(child);
            if guard.class_list.contains(class) {
                found.push(Arc::clone(child));
            }
            found.extend(guard.descendants_with_class(class));
        }
        found
    }

    /// Remove `class` from every descendant, returning how many had it
    pub fn remove_class_from_descendants(&self, class: &str) -> usize {
        let mut removed = 0;
        for child in &self.children {
            let mut guard = lock(child);
            if guard.class_list.contains(class) {
                guard.class_list.remove(class);
                removed += 1;
            }
            removed += guard.remove_class_from_descendants(class);
        }
        removed
    }
}

/// The page: a body element whose subtree is searched by id on every lookup
#[derive(Debug, Clone)]
pub struct Document {
    body: ElementRef,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::new("body").into_ref(),
        }
    }

    pub fn body(&self) -> &ElementRef {
        &self.body
    }

    /// Append `element` to the body and return a handle to it
    pub fn append(&self, element: Element) -> ElementRef {
        let element = element.into_ref();
        lock(&self.body).append_child(Arc::clone(&element));
        element
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementRef> {
        lock(&self.body).find_by_id(id)
    }

    /// Every element carrying `class`, in document order
    pub fn elements_by_class(&self, class: &str) -> Vec<ElementRef> {
        lock(&self.body).descendants_with_class(class)
    }

    /// Detach the body's direct child with the given id
    pub fn remove_element_by_id(&self, id: &str) -> Option<ElementRef> {
        let mut body = lock(&self.body);
        let index = body
            .children
            .iter()
            .position(|child| lock(child).id() == Some(id))?;
        Some(body.children.remove(index))
    }
}

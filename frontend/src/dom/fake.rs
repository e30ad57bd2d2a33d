//! In-memory stand-ins for the browser pieces the enhancements touch.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{Interaction, PageNode};
use crate::reveal::Observe;

#[derive(Default)]
struct NodeData {
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    inner_html: String,
    content_height: i32,
    // (name, value, default)
    fields: Vec<(String, String, String)>,
    scroll_calls: usize,
    parent: Weak<RefCell<NodeData>>,
    children: Vec<FakeNode>,
}

#[derive(Clone, Default)]
pub struct FakeNode(Rc<RefCell<NodeData>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("FakeNode")
            .field("id", &data.id)
            .field("classes", &data.classes)
            .finish()
    }
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.put_attribute(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_content_height(self, height: i32) -> Self {
        self.0.borrow_mut().content_height = height;
        self
    }

    pub fn with_field(self, name: &str, default: &str) -> Self {
        self.0
            .borrow_mut()
            .fields
            .push((name.to_string(), default.to_string(), default.to_string()));
        self
    }

    /// Appends `child` and returns it, so trees read top-down in tests.
    pub fn append(&self, child: FakeNode) -> FakeNode {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        child
    }

    pub fn find_by_id(&self, id: &str) -> Option<FakeNode> {
        self.query(&format!("#{}", id))
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn class_count(&self, class: &str) -> usize {
        self.0.borrow().classes.iter().filter(|c| *c == class).count()
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .fields
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, value, _)| value.clone())
    }

    pub fn fill(&self, name: &str, value: &str) {
        if let Some(field) = self.0.borrow_mut().fields.iter_mut().find(|(n, _, _)| n == name) {
            field.1 = value.to_string();
        }
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn scroll_calls(&self) -> usize {
        self.0.borrow().scroll_calls
    }

    fn parent(&self) -> Option<FakeNode> {
        self.0.borrow().parent.upgrade().map(FakeNode)
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            return self.has_class(class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return self.0.borrow().id.as_deref() == Some(id);
        }
        if let Some(inner) = selector.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return match inner.split_once('=') {
                Some((name, value)) => {
                    self.attribute(name).as_deref() == Some(value.trim_matches('"'))
                }
                None => self.attribute(inner).is_some(),
            };
        }
        false
    }

    fn collect(&self, selector: &str, found: &mut Vec<FakeNode>) {
        for child in self.0.borrow().children.iter() {
            if child.matches(selector) {
                found.push(child.clone());
            }
            child.collect(selector, found);
        }
    }
}

impl PageNode for FakeNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn put_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn content_height(&self) -> i32 {
        self.0.borrow().content_height
    }

    fn nearest(&self, selector: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.matches(selector) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let mut found = Vec::new();
        self.collect(selector, &mut found);
        found
    }

    /// Builds one flat child per opening tag, carrying its `id` and classes.
    fn replace_content(&self, html: &str) {
        {
            let mut data = self.0.borrow_mut();
            data.children.clear();
            data.inner_html = html.to_string();
        }
        for tag in opening_tags(html) {
            let mut node = FakeNode::new();
            if let Some(id) = attr_value(tag, "id") {
                node = node.with_id(id);
            }
            for class in attr_value(tag, "class").unwrap_or_default().split_whitespace() {
                node.add_class(class);
            }
            self.append(node);
        }
    }

    fn scroll_into_view_smooth(&self) {
        self.0.borrow_mut().scroll_calls += 1;
    }

    fn reset_fields(&self) {
        for field in self.0.borrow_mut().fields.iter_mut() {
            field.1 = field.2.clone();
        }
    }
}

fn opening_tags(html: &str) -> impl Iterator<Item = &str> {
    html.split('<')
        .skip(1)
        .filter_map(|chunk| chunk.split_once('>').map(|(tag, _)| tag))
        .filter(|tag| !tag.starts_with('/'))
}

fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    rest.find('"').map(|end| &rest[..end])
}

#[derive(Default)]
pub struct FakeEvent {
    prevented: Cell<bool>,
}

impl Interaction for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

/// Records which nodes are being watched, like an `IntersectionObserver`.
#[derive(Default)]
pub struct FakeObserver {
    watched: RefCell<Vec<FakeNode>>,
}

impl FakeObserver {
    pub fn is_watching(&self, node: &FakeNode) -> bool {
        self.watched.borrow().contains(node)
    }

    pub fn watched(&self) -> Vec<FakeNode> {
        self.watched.borrow().clone()
    }
}

impl Observe<FakeNode> for FakeObserver {
    fn observe(&self, target: &FakeNode) {
        if !self.is_watching(target) {
            self.watched.borrow_mut().push(target.clone());
        }
    }

    fn unobserve(&self, target: &FakeNode) {
        self.watched.borrow_mut().retain(|n| n != target);
    }
}

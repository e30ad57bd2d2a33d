use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions,
};

#[cfg(test)]
pub mod fake;

/// The slice of an element the enhancements read and write.
///
/// Every behaviour is written against this trait so it runs the same on a
/// live `web_sys::Element` and on the in-memory nodes used by the unit tests.
/// Writes are best-effort: a browser call that fails leaves the element as it
/// was, matching how the page degrades when markup is missing.
pub trait PageNode: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flips `class` and returns whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn put_attribute(&self, name: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);

    /// Height of the full content, including the part clipped by `max-height`.
    fn content_height(&self) -> i32;

    /// Nearest ancestor (or self) matching `selector`.
    fn nearest(&self, selector: &str) -> Option<Self>;
    fn query(&self, selector: &str) -> Option<Self>;
    fn query_all(&self, selector: &str) -> Vec<Self>;

    fn replace_content(&self, html: &str);
    fn scroll_into_view_smooth(&self);
    /// Restores form controls to their defaults. No-op on non-form elements.
    fn reset_fields(&self);
}

/// An event whose default browser action can be suppressed.
pub trait Interaction {
    fn prevent_default(&self);
    #[cfg(test)]
    fn default_prevented(&self) -> bool;
}

impl PageNode for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn put_attribute(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn content_height(&self) -> i32 {
        self.scroll_height()
    }

    fn nearest(&self, selector: &str) -> Option<Self> {
        self.closest(selector).ok().flatten()
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let Ok(list) = self.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn replace_content(&self, html: &str) {
        self.set_inner_html(html);
    }

    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn reset_fields(&self) {
        if let Some(form) = self.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

impl Interaction for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }

    #[cfg(test)]
    fn default_prevented(&self) -> bool {
        Event::default_prevented(self)
    }
}

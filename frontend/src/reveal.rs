use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config;
use crate::dom::PageNode;
use crate::error::Result;

/// Something that reports when watched nodes enter the viewport.
pub trait Observe<N> {
    fn observe(&self, target: &N);
    fn unobserve(&self, target: &N);
}

impl Observe<Element> for IntersectionObserver {
    fn observe(&self, target: &Element) {
        IntersectionObserver::observe(self, target);
    }

    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }
}

/// Owns the page's single viewport observer.
///
/// `observer` is `None` when the runtime has no `IntersectionObserver`; in
/// that case targets are revealed as soon as they are registered so nothing
/// stays hidden behind an animation that will never run.
pub struct ViewportRevealer<O> {
    observer: Option<O>,
}

impl<O> ViewportRevealer<O> {
    pub fn new(observer: Option<O>) -> Self {
        Self { observer }
    }

    pub fn is_animated(&self) -> bool {
        self.observer.is_some()
    }

    #[cfg(test)]
    pub fn observer(&self) -> Option<&O> {
        self.observer.as_ref()
    }

    pub fn register<N: PageNode>(&self, target: &N)
    where
        O: Observe<N>,
    {
        if target.has_class(config::IN_VIEW_CLASS) {
            return;
        }
        match &self.observer {
            Some(observer) => observer.observe(target),
            None => target.add_class(config::IN_VIEW_CLASS),
        }
    }

    pub fn register_all<N: PageNode>(&self, targets: impl IntoIterator<Item = N>) -> usize
    where
        O: Observe<N>,
    {
        let mut count = 0;
        for target in targets {
            self.register(&target);
            count += 1;
        }
        count
    }

    /// Section headings opt into the reveal animation by markup convention.
    pub fn prepare_section_title<N: PageNode>(&self, title: &N)
    where
        O: Observe<N>,
    {
        title.add_class(config::REVEAL_CLASS);
        self.register(title);
    }

    /// Registers every reveal target under `root`.
    pub fn scan<N: PageNode>(&self, root: &N) -> usize
    where
        O: Observe<N>,
    {
        for title in root.query_all(config::SECTION_TITLE) {
            self.prepare_section_title(&title);
        }
        let targets = self.register_all(root.query_all(config::REVEAL_TARGET));
        let features = self.register_all(root.query_all(config::FEATURE_TITLE));
        targets + features
    }
}

/// Applies one intersection report. Returns true when the target was revealed.
///
/// Once revealed the target is unobserved, so later reports for it never
/// arrive from a real observer; a stray one is still harmless here.
pub fn reveal_on_entry<N, O>(observer: &O, target: &N, is_intersecting: bool) -> bool
where
    N: PageNode,
    O: Observe<N>,
{
    if !is_intersecting {
        return false;
    }
    target.add_class(config::IN_VIEW_CLASS);
    observer.unobserve(target);
    true
}

impl ViewportRevealer<IntersectionObserver> {
    pub fn for_window(window: &Window) -> Result<Self> {
        let supported = Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            debug!("IntersectionObserver unavailable, revealing targets immediately");
            return Ok(Self::new(None));
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        reveal_on_entry(&observer, &entry.target(), entry.is_intersecting());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        // The observer lives as long as the page.
        callback.forget();

        Ok(Self::new(Some(observer)))
    }
}

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::PageNode;
use crate::error::Result;

type Handler<N, E> = Box<dyn Fn(&N, &E)>;

/// Routes events caught at one stable ancestor to handlers keyed by the
/// role marker of the element that triggered them.
///
/// Because matching happens at dispatch time, triggers added to the page
/// after the listener was installed are handled without re-registration.
pub struct Dispatcher<N, E> {
    routes: Vec<(&'static str, Handler<N, E>)>,
}

impl<N: PageNode, E> Dispatcher<N, E> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(mut self, marker: &'static str, handler: impl Fn(&N, &E) + 'static) -> Self {
        self.routes.push((marker, Box::new(handler)));
        self
    }

    /// Runs the first route whose marker encloses `target`, passing it the
    /// matched trigger element. Returns whether any route fired.
    pub fn dispatch(&self, target: &N, event: &E) -> bool {
        for (marker, handler) in self.routes.iter() {
            if let Some(trigger) = target.nearest(marker) {
                handler(&trigger, event);
                return true;
            }
        }
        false
    }
}

/// Installs the dispatcher as the document's single click listener.
pub fn listen(document: &Document, dispatcher: Dispatcher<Element, Event>) -> Result<()> {
    let routes = dispatcher.routes.len();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
        if let Some(target) = target {
            dispatcher.dispatch(&target, &event);
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    debug!("delegated click listener installed with {} routes", routes);
    Ok(())
}

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config;
use crate::dom::{Interaction, PageNode};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    Scrolled,
    PassThrough,
}

/// The element id an in-page link points at. A bare `#` points nowhere.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn handle_click<N, E, F>(href: &str, resolve: F, event: &E) -> AnchorOutcome
where
    N: PageNode,
    E: Interaction,
    F: FnOnce(&str) -> Option<N>,
{
    let Some(target) = fragment_id(href).and_then(resolve) else {
        return AnchorOutcome::PassThrough;
    };
    event.prevent_default();
    target.scroll_into_view_smooth();
    AnchorOutcome::Scrolled
}

/// Attaches a smooth-scroll click listener to every in-page link.
pub fn attach(document: &Document, root: &Element) -> Result<usize> {
    let links = root.query_all(config::ANCHOR_LINKS);
    for link in links.iter() {
        let document = document.clone();
        let anchor = link.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let outcome = handle_click(&href, |id| document.get_element_by_id(id), &event);
            debug!("anchor {} clicked: {:?}", href, outcome);
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    debug!("smooth scrolling enabled on {} anchors", links.len());
    Ok(links.len())
}

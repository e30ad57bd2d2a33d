use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::config;
use crate::dom::{Interaction, PageNode};
use crate::error::Result;

/// Acknowledges a contact form submission without sending anything.
pub fn handle_submit<N: PageNode, E: Interaction>(form: &N, alert: Option<&N>, event: &E) {
    event.prevent_default();
    if let Some(alert) = alert {
        alert.remove_class(config::HIDDEN_CLASS);
    }
    form.reset_fields();
}

/// Returns false when the page has no contact form.
pub fn attach(document: &Document) -> Result<bool> {
    let Some(form) = document.get_element_by_id(config::CONTACT_FORM_ID) else {
        debug!("no #{} on this page", config::CONTACT_FORM_ID);
        return Ok(false);
    };

    let document = document.clone();
    let submitted = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let alert = document.get_element_by_id(config::FORM_ALERT_ID);
        handle_submit(&submitted, alert.as_ref(), &event);
        info!("contact form acknowledged");
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(true)
}

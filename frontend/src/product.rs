use crate::config;
use crate::delegate::Dispatcher;
use crate::dom::{Interaction, PageNode};

/// Opens or closes the card that owns `button`.
///
/// Returns the card's new open state, or `None` when the button is not inside
/// a card with an expandable region. Every write is derived from the new
/// state alone, so rapid clicks need no debouncing.
pub fn toggle<N: PageNode, E: Interaction>(button: &N, event: &E) -> Option<bool> {
    event.prevent_default();
    let card = button.nearest(config::PRODUCT_CARD)?;
    let extra = card.query(config::PRODUCT_EXTRA)?;

    let open = card.toggle_class(config::OPEN_CLASS);
    if open {
        extra.set_style("max-height", &format!("{}px", extra.content_height()));
        extra.set_style("opacity", "1");
        button.put_attribute("aria-expanded", "true");
        if let Some(alt) = non_empty(button.attribute(config::ALT_LABEL_ATTR)) {
            button.put_attribute(config::CACHED_LABEL_ATTR, &button.text());
            button.set_text(&alt);
        }
    } else {
        extra.set_style("max-height", "0px");
        extra.set_style("opacity", "0");
        button.put_attribute("aria-expanded", "false");
        if let Some(label) = non_empty(button.attribute(config::CACHED_LABEL_ATTR)) {
            button.set_text(&label);
            button.put_attribute(config::CACHED_LABEL_ATTR, "");
        }
    }
    Some(open)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Adds the card toggle to a delegated dispatcher.
pub fn route<N, E>(dispatcher: Dispatcher<N, E>) -> Dispatcher<N, E>
where
    N: PageNode + 'static,
    E: Interaction + 'static,
{
    dispatcher.route(config::PRODUCT_TOGGLE, |button: &N, event: &E| {
        toggle(button, event);
    })
}

use log::warn;
use web_sys::IntersectionObserver;

use crate::delegate::{self, Dispatcher};
use crate::error::{EnhanceError, Result};
use crate::reveal::ViewportRevealer;
use crate::{anchor, contact, footer, product};

/// Wires every enhancement onto the current document, once per page load.
///
/// Each behaviour is independent: one that fails to install is logged and
/// the rest still run. Only a missing window or document stops everything.
pub struct PageEnhancer {
    revealer: ViewportRevealer<IntersectionObserver>,
    reveal_targets: usize,
}

impl PageEnhancer {
    pub fn attach() -> Result<Self> {
        let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
        let document = window.document().ok_or(EnhanceError::NoDocument)?;
        let root = document.document_element().ok_or(EnhanceError::NoDocument)?;

        let revealer = ViewportRevealer::for_window(&window).unwrap_or_else(|e| {
            warn!("Viewport observer unavailable: {}", e);
            ViewportRevealer::new(None)
        });
        let reveal_targets = revealer.scan(&root);

        if let Err(e) = anchor::attach(&document, &root) {
            warn!("Failed to enable smooth scrolling: {}", e);
        }
        if let Err(e) = contact::attach(&document) {
            warn!("Failed to attach contact form handler: {}", e);
        }
        footer::attach(&document, &revealer);
        if let Err(e) = delegate::listen(&document, product::route(Dispatcher::new())) {
            warn!("Failed to install product card toggle: {}", e);
        }

        Ok(Self { revealer, reveal_targets })
    }

    pub fn summary(&self) -> String {
        let mode = if self.revealer.is_animated() { "animated" } else { "static" };
        format!("{} reveal targets ({})", self.reveal_targets, mode)
    }
}

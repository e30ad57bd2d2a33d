use log::{error, info};

mod anchor;
mod config;
mod contact;
mod delegate;
mod dom;
mod enhancer;
mod error;
mod footer;
mod product;
mod reveal;

use enhancer::PageEnhancer;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Enhancing page");
    match PageEnhancer::attach() {
        Ok(enhancer) => info!("Page enhanced: {}", enhancer.summary()),
        Err(e) => error!("Page left unenhanced: {}", e),
    }
}

use chrono::{Datelike, Local};
use log::debug;
use web_sys::Document;

use crate::config;
use crate::dom::PageNode;
use crate::reveal::{Observe, ViewportRevealer};

pub fn current_year() -> i32 {
    Local::now().year()
}

/// The footer shared by every page. `year` is the only moving part.
pub fn render_footer(year: i32) -> String {
    format!(
        r##"
      <footer class="site-footer">
        <div class="container">
          <div class="row g-4">
            <div class="col-12 col-md-6 col-lg-3 reveal-up">
              <h6 class="footer-title">Corporate Office</h6>
              <ul class="contact-list">
                <li><i class="bi bi-geo-alt"></i><span>#1-76, Rajannapalem, Atchutapuram, Anakapalli</span></li>
                <li><i class="bi bi-telephone"></i><a href="tel:85407616"> 85--407616</a></li>
                <li><i class="bi bi-envelope"></i><a href="mailto:info@sharespace.com"> info@sharespace.com</a></li>
              </ul>
            </div>
            <div class="col-12 col-md-6 col-lg-3 reveal-up">
              <h6 class="footer-title">Branch Office</h6>
              <ul class="contact-list">
                <li><i class="bi bi-geo-alt"></i><span>#65-6-705, Beside Gousia Masjid, New Gajuwaka Vegetable Market, Gajuwaka - 530026</span></li>
                <li><i class="bi bi-telephone"></i><a href="tel:85407616"> 85--407616</a></li>
                <li><i class="bi bi-envelope"></i><a href="mailto:support@sharespace.com"> support@sharespace.com</a></li>
              </ul>
            </div>
            <div class="col-12 col-md-6 col-lg-3 reveal-up">
              <h6 class="footer-title">Quick Links</h6>
              <ul class="list-unstyled small">
                <li><a href="index.html">Home</a></li>
                <li><a href="about.html">About</a></li>
                <li><a href="services.html">Services</a></li>
                <li><a href="products.html">Products</a></li>
                <li><a href="clients.html">Clients</a></li>
                <li><a href="contact.html">Contact</a></li>
                <li><a href="#">Privacy Policy</a></li>
                <li><a href="#">Terms of Service</a></li>
              </ul>
            </div>
            <div class="col-12 col-md-6 col-lg-3 reveal-up">
              <h6 class="footer-title">Follow Us</h6>
              <div class="social d-flex gap-2">
                <a href="#" aria-label="Facebook" title="Facebook"><i class="bi bi-facebook"></i></a>
                <a href="#" aria-label="Twitter" title="Twitter"><i class="bi bi-twitter-x"></i></a>
                <a href="#" aria-label="Instagram" title="Instagram"><i class="bi bi-instagram"></i></a>
                <a href="#" aria-label="LinkedIn" title="LinkedIn"><i class="bi bi-linkedin"></i></a>
              </div>
            </div>
          </div>
          <hr class="my-4" />
          <div class="d-flex flex-column flex-md-row justify-content-between small">
            <div>&copy; <span id="{year_id}">{year}</span> Sharespace Technologies Pvt Ltd. All Rights Reserved.</div>
          </div>
        </div>
      </footer>
    "##,
        year_id = config::YEAR_ID,
        year = year,
    )
}

pub fn stamp_year<N: PageNode>(element: &N, year: i32) {
    element.set_text(&year.to_string());
}

/// Replaces the mount's content with the footer and hands its reveal
/// targets to the revealer. Returns how many targets were registered.
pub fn mount_footer<N, O>(mount: &N, year: i32, revealer: &ViewportRevealer<O>) -> usize
where
    N: PageNode,
    O: Observe<N>,
{
    mount.replace_content(&render_footer(year));
    revealer.register_all(mount.query_all(config::REVEAL_TARGET))
}

/// Stamps any pre-existing year element, then builds the footer if the page
/// has a mount for it. Returns false when there is no mount.
pub fn attach<O: Observe<web_sys::Element>>(
    document: &Document,
    revealer: &ViewportRevealer<O>,
) -> bool {
    let year = current_year();
    if let Some(element) = document.get_element_by_id(config::YEAR_ID) {
        stamp_year(&element, year);
    }

    let Some(mount) = document.get_element_by_id(config::FOOTER_MOUNT_ID) else {
        debug!("no #{} on this page", config::FOOTER_MOUNT_ID);
        return false;
    };
    let registered = mount_footer(&mount, year, revealer);
    debug!("footer mounted for {} with {} reveal targets", year, registered);
    true
}

//! Site footer.

use chrono::Datelike;
use leptos::prelude::*;

/// Footer link columns: heading and link labels.
pub const LINK_GROUPS: [(&str, [&str; 3]); 3] = [
    ("Company", ["About Us", "Careers", "Contact Us"]),
    ("Support", ["Help Center", "Returns", "Shipping Info"]),
    ("Legal", ["Privacy Policy", "Terms of Service", "Cookie Policy"]),
];

pub const SOCIAL_LINKS: [&str; 4] = ["facebook", "twitter", "instagram", "linkedin"];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Your Company Name. All rights reserved.", year)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                {LINK_GROUPS.iter().map(|(heading, links)| view! {
                    <div class="footer-section">
                        <h6>{*heading}</h6>
                        <ul>
                            {links.iter().map(|label| view! {
                                <li><a href="#">{*label}</a></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }).collect::<Vec<_>>()}
                <div class="footer-section">
                    <h6>"Connect With Us"</h6>
                    <div class="social">
                        {SOCIAL_LINKS.iter().map(|name| view! {
                            <a href="#" class=format!("social-{}", name) aria-label=name.to_string()></a>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
            <p class="copyright">{copyright_line(year)}</p>
        </footer>
    }
}

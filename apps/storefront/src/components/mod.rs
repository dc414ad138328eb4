//! Page and layout components.

mod footer;
mod main_section;
mod navbar;
mod not_found;
mod product_page;
mod search_bar;

pub use footer::{copyright_line, Footer, LINK_GROUPS, SOCIAL_LINKS};
pub use main_section::MainSection;
pub use navbar::NavBar;
pub use not_found::NotFound;
pub use product_page::ProductPage;
pub use search_bar::SearchBar;

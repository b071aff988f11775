pub mod error;
pub mod faq;
pub mod icons;
pub mod nav;
pub mod result_panel;
pub mod search_form;

pub use error::error_page;
pub use faq::faq_list;
pub use nav::{buy_smart_button, nav_bar};
pub use result_panel::{result_panel, result_panel_update};
pub use search_form::{priority_group, search_card, urgency_group};

// src/domain/landing.rs

use crate::domain::content::FAQS;

/// Per-visitor toggles on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingState {
    open_faq: Option<usize>,
    mobile_menu_open: bool,
}

impl LandingState {
    #[cfg(test)]
    pub fn open_faq(&self) -> Option<usize> {
        self.open_faq
    }

    pub fn is_faq_open(&self, index: usize) -> bool {
        self.open_faq == Some(index)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Opens `index`, closing whichever item was open. Selecting the open item closes it.
    ///
    /// Returns `false` (and changes nothing) when `index` is past the end of the FAQ list.
    pub fn toggle_faq(&mut self, index: usize) -> bool {
        if index >= FAQS.len() {
            return false;
        }
        self.open_faq = if self.open_faq == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

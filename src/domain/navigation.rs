// src/domain/navigation.rs

/// Which of the two top-level views a visitor is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Landing,
    Search,
}

impl NavigationState {
    /// "Buy Smart". There is no way back; the search view is terminal.
    pub fn activate_search(&mut self) {
        *self = NavigationState::Search;
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavigationState::Landing => "landing",
            NavigationState::Search => "search",
        }
    }
}

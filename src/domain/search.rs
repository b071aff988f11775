// src/domain/search.rs

use crate::domain::product::{ProductResult, SourceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// How soon the shopper needs the product. At most one is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    Standard,
    Flexible,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Urgent, Urgency::Standard, Urgency::Flexible];

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Standard => "standard",
            Urgency::Flexible => "flexible",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Urgent => "Urgent",
            Urgency::Standard => "Standard",
            Urgency::Flexible => "Flexible",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Urgency::Urgent => "Need it ASAP",
            Urgency::Standard => "Within a week",
            Urgency::Flexible => "No rush",
        }
    }
}

/// Independent decision factors; any number may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Price,
    Reviews,
    Retailer,
    Offers,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Price,
        Priority::Reviews,
        Priority::Retailer,
        Priority::Offers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Price => "price",
            Priority::Reviews => "reviews",
            Priority::Retailer => "retailer",
            Priority::Offers => "offers",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Price => "Lowest Price",
            Priority::Reviews => "Best Reviews",
            Priority::Retailer => "Trusted Retailer",
            Priority::Offers => "Best Offers",
        }
    }
}

/// Everything the shopper typed or picked, submitted together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchIntent {
    pub query: String,
    pub details: String,
    pub urgency: Option<Urgency>,
    pub priorities: BTreeSet<Priority>,
}

impl SearchIntent {
    #[cfg(test)]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please tell us what you want to buy!")]
    EmptyQuery,
    #[error("Sorry, we couldn't find results for your search. Please try again.")]
    Failed,
}

static FAILED: SearchError = SearchError::Failed;

/// Identifies one submission. Only the latest ticket may complete a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchRequestState {
    #[default]
    Idle,
    Loading(SearchTicket),
    /// Never empty.
    Completed(Vec<ProductResult>),
    Failed,
}

/// The single mode the result panel is in.
#[derive(Debug, PartialEq)]
pub enum ResultPanel<'a> {
    Prompt,
    Loading,
    Results(&'a [ProductResult]),
    Error(&'a SearchError),
}

/// Search view state for one visitor.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    intent: SearchIntent,
    request: SearchRequestState,
    error: Option<SearchError>,
    issued: u64,
}

impl SearchForm {
    pub fn intent(&self) -> &SearchIntent {
        &self.intent
    }

    #[cfg(test)]
    pub fn request(&self) -> &SearchRequestState {
        &self.request
    }

    /// Inline error under the form, if any.
    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, SearchRequestState::Loading(_))
    }

    #[cfg(test)]
    pub fn has_searched(&self) -> bool {
        !matches!(self.request, SearchRequestState::Idle)
    }

    #[cfg(test)]
    pub fn results(&self) -> &[ProductResult] {
        match &self.request {
            SearchRequestState::Completed(results) => results,
            _ => &[],
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.intent.query = query.into();
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.intent.details = details.into();
    }

    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.intent.urgency = Some(urgency);
    }

    pub fn toggle_priority(&mut self, priority: Priority) {
        if !self.intent.priorities.remove(&priority) {
            self.intent.priorities.insert(priority);
        }
    }

    /// Validates the query and moves to loading.
    ///
    /// An empty (or whitespace-only) query only sets the inline error; the request
    /// state is left exactly as it was. A valid submission supersedes any search
    /// still in flight.
    pub fn submit(&mut self) -> Result<SearchTicket, SearchError> {
        if self.intent.query.trim().is_empty() {
            self.error = Some(SearchError::EmptyQuery);
            return Err(SearchError::EmptyQuery);
        }

        self.issued += 1;
        let ticket = SearchTicket(self.issued);
        self.error = None;
        self.request = SearchRequestState::Loading(ticket);
        Ok(ticket)
    }

    /// Applies the outcome of the lookup started by `ticket`.
    ///
    /// Returns `false` when the ticket is stale (a newer submission replaced it) and
    /// the outcome was dropped. Results are always replaced, never merged.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<ProductResult>, SourceError>,
    ) -> bool {
        if self.request != SearchRequestState::Loading(ticket) {
            return false;
        }

        self.request = match outcome {
            Ok(results) if !results.is_empty() => SearchRequestState::Completed(results),
            _ => {
                self.error = Some(SearchError::Failed);
                SearchRequestState::Failed
            }
        };
        true
    }

    pub fn panel(&self) -> ResultPanel<'_> {
        match &self.request {
            SearchRequestState::Idle => ResultPanel::Prompt,
            SearchRequestState::Loading(_) => ResultPanel::Loading,
            SearchRequestState::Completed(results) => ResultPanel::Results(results),
            SearchRequestState::Failed => {
                ResultPanel::Error(self.error.as_ref().unwrap_or(&FAILED))
            }
        }
    }
}

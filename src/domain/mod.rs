pub mod content;
pub mod landing;
pub mod navigation;
pub mod product;
pub mod search;

pub use landing::LandingState;
pub use navigation::NavigationState;
pub use product::{ProductResult, ProductSource, SourceError};
pub use search::{
    Priority, ResultPanel, SearchError, SearchForm, SearchIntent, SearchTicket, Urgency,
};

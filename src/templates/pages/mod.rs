pub mod landing;
pub mod search;

pub use landing::landing_page;
pub use search::{search_page, search_workspace};

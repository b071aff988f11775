pub mod cookie;
pub mod store;

pub use store::{Session, SessionStore};

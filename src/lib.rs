pub mod catalogue;
pub mod config;
pub mod errors;
pub mod manager;
pub mod models;

pub use config::Config;
pub use manager::BookManager;
pub use models::{Book, NewBook};

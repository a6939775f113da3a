pub mod config;
pub mod error;
pub mod user_form;

pub use config::*;
pub use error::*;
pub use user_form::*;

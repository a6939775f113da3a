pub mod config;
pub mod users;

pub use users::UsersClient;

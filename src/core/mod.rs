pub mod catalog;
pub mod config;
pub mod init;
pub mod session;

pub use catalog::Catalog;
pub use session::Session;

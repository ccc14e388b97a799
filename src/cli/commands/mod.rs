pub mod catalog;
pub mod config;
pub mod export;
pub mod gui;
pub mod history;
pub mod init;
pub mod tally;

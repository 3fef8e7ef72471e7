pub mod config;
pub mod logging;

pub mod actions;
pub mod clipboard;
pub mod links;
pub mod page;
pub mod playlist;
pub mod save;

pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod logging;
pub mod monitor;
pub mod report;
pub mod scheduler;
pub mod system;
pub mod ui;

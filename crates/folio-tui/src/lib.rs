// ABOUTME: folio terminal workbench - login, gallery, simulated agent chat
// ABOUTME: Channel-based async architecture with Ratatui

pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod logging;
pub mod run;
pub mod theme;
pub mod ui;

//! Sectioned todo list: domain types, a client for the hosted sections API,
//! an in-memory reducer store, form validation and a terminal UI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

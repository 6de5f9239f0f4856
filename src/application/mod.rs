pub mod cache;
pub mod section_service;
mod section_service_tests;
pub mod store;
pub mod validation;
pub mod view;

//! Page views

pub mod edit_config;

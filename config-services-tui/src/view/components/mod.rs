//! Reusable widgets

pub mod modal;
pub mod statusbar;

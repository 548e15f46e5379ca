//! Helpers with no Leptos dependency

pub mod constants;
pub mod url;

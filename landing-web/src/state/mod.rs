//! Application contexts provided at the root of the view tree

pub mod i18n;
pub mod links;
pub mod theme;
pub mod viewport;

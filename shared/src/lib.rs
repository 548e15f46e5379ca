//! # Clover Landing Shared Library
//!
//! Host-testable building blocks for the landing page frontend. Nothing in this
//! crate touches the browser; `landing-web` wires these types into Leptos
//! contexts and components.
//!
//! ## Structure
//!
//! - **[`i18n`]**: Supported locales, the embedded translation table and the
//!   [`i18n::Translator`] used for key lookup
//! - **[`layout`]**: Viewport breakpoint, [`layout::LayoutMode`] and header toggles
//! - **[`links`]**: Outbound link catalogue and the [`links::LinkOpener`] seam
//! - **[`nav`]**: Header navigation tabs
//! - **[`theme`]**: Color tokens consumed by the views
//! - **[`error`]**: Crate error type
//!
//! ## Usage
//!
//! ```rust
//! use shared::i18n::{keys, Locale, Translator};
//!
//! let mut translator = Translator::builtin().unwrap();
//! assert_eq!(translator.translate(keys::WEB_WALLET), "Web Wallet");
//!
//! translator.set_locale(Locale::Zh);
//! assert_eq!(translator.translate(keys::WEB_WALLET), "网页钱包");
//! ```

pub mod error;
pub mod i18n;
pub mod layout;
pub mod links;
pub mod nav;
pub mod theme;

pub use error::{Result, SharedError};

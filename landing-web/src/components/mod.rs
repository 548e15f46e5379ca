//! UI Components

pub mod download;
pub mod header;
pub mod languages;
pub mod socials;
pub mod splash_section;
pub mod store_buttons;
pub mod why_clover_wallet;

pub use download::DownloadSection;
pub use header::Header;
pub use languages::Languages;
pub use socials::Socials;
pub use splash_section::SplashSection;
pub use store_buttons::StoreButtons;
pub use why_clover_wallet::WhyCloverWallet;

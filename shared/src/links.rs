//! # Outbound Links
//!
//! Every external destination on the page is a literal URL from this module.
//! Opening one goes through the [`LinkOpener`] trait so the browser call can
//! be swapped for a recorder in tests.

use crate::error::Result;

/// Fixed external destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundLink {
    AppStore,
    GooglePlay,
    ChromeWebStore,
    WebWallet,
    Twitter,
    Telegram,
    Medium,
    Github,
}

impl OutboundLink {
    /// Store badges shown next to the desktop navigation.
    pub const STORES: [OutboundLink; 3] = [
        OutboundLink::AppStore,
        OutboundLink::GooglePlay,
        OutboundLink::ChromeWebStore,
    ];

    pub const SOCIALS: [OutboundLink; 4] = [
        OutboundLink::Twitter,
        OutboundLink::Telegram,
        OutboundLink::Medium,
        OutboundLink::Github,
    ];

    pub fn url(self) -> &'static str {
        match self {
            OutboundLink::AppStore => "https://apps.apple.com/app/clover-wallet/id1570072858",
            OutboundLink::GooglePlay => {
                "https://play.google.com/store/apps/details?id=com.clover.finance.wallet&hl=en_US&gl=US"
            }
            OutboundLink::ChromeWebStore => {
                "https://chrome.google.com/webstore/detail/clover-wallet/nhnkbkgjikgcigadomkphalanndcapjk"
            }
            OutboundLink::WebWallet => "https://wallet.clover.finance/",
            OutboundLink::Twitter => "https://twitter.com/clover_finance",
            OutboundLink::Telegram => "https://t.me/clover_en",
            OutboundLink::Medium => "https://projectclover.medium.com/",
            OutboundLink::Github => "https://github.com/clover-network",
        }
    }

    /// Icon path for links rendered as images.
    pub fn icon(self) -> &'static str {
        match self {
            OutboundLink::AppStore => "images/apple_icon.svg",
            OutboundLink::GooglePlay => "images/google_play_icon.svg",
            OutboundLink::ChromeWebStore => "images/chrome_icon.svg",
            OutboundLink::WebWallet => "images/web_wallet_icon.svg",
            OutboundLink::Twitter => "images/twitter_icon.svg",
            OutboundLink::Telegram => "images/telegram_icon.svg",
            OutboundLink::Medium => "images/medium_icon.svg",
            OutboundLink::Github => "images/github_icon.svg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutboundLink::AppStore => "App Store",
            OutboundLink::GooglePlay => "Google Play",
            OutboundLink::ChromeWebStore => "Chrome Web Store",
            OutboundLink::WebWallet => "Web Wallet",
            OutboundLink::Twitter => "Twitter",
            OutboundLink::Telegram => "Telegram",
            OutboundLink::Medium => "Medium",
            OutboundLink::Github => "GitHub",
        }
    }
}

/// Opens a URL in a new browsing context.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Open `link` once. Failures are logged, not propagated: a blocked popup must
/// not break the page.
pub fn open_link<O: LinkOpener + ?Sized>(opener: &O, link: OutboundLink) {
    let url = link.url();
    log::debug!("Opening {} at {}", link.label(), url);
    if let Err(e) = opener.open(url) {
        log::error!("Failed to open {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SharedError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                return Err(SharedError::Navigation("popup blocked".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_app_store_opens_exact_url() {
        let opener = RecordingOpener::default();
        open_link(&opener, OutboundLink::AppStore);
        assert_eq!(
            *opener.opened.borrow(),
            vec!["https://apps.apple.com/app/clover-wallet/id1570072858".to_string()]
        );
    }

    #[test]
    fn test_each_link_opens_exactly_once() {
        let expected = [
            (OutboundLink::AppStore, "https://apps.apple.com/app/clover-wallet/id1570072858"),
            (
                OutboundLink::GooglePlay,
                "https://play.google.com/store/apps/details?id=com.clover.finance.wallet&hl=en_US&gl=US",
            ),
            (
                OutboundLink::ChromeWebStore,
                "https://chrome.google.com/webstore/detail/clover-wallet/nhnkbkgjikgcigadomkphalanndcapjk",
            ),
            (OutboundLink::WebWallet, "https://wallet.clover.finance/"),
        ];

        for (link, url) in expected {
            let opener = RecordingOpener::default();
            open_link(&opener, link);
            assert_eq!(*opener.opened.borrow(), vec![url.to_string()], "{link:?}");
        }
    }

    #[test]
    fn test_socials_open_https_urls() {
        for link in OutboundLink::SOCIALS {
            let opener = RecordingOpener::default();
            open_link(&opener, link);
            let opened = opener.opened.borrow();
            assert_eq!(opened.len(), 1);
            assert!(opened[0].starts_with("https://"));
        }
    }

    #[test]
    fn test_open_failure_is_swallowed() {
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        open_link(&opener, OutboundLink::WebWallet);
        assert_eq!(opener.opened.borrow().len(), 1);
    }
}

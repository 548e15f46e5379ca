//! Outbound link context
//!
//! Components open links through [`LinkContext`] rather than calling the
//! browser directly, so the opener can be replaced per view tree.

use std::sync::Arc;

use leptos::prelude::*;
use shared::links::{open_link, LinkOpener, OutboundLink};

use crate::services::browser::BrowserOpener;

#[derive(Clone, Copy)]
pub struct LinkContext {
    opener: StoredValue<Arc<dyn LinkOpener + Send + Sync>>,
}

impl LinkContext {
    pub fn new(opener: impl LinkOpener + Send + Sync + 'static) -> Self {
        let opener: Arc<dyn LinkOpener + Send + Sync> = Arc::new(opener);
        Self {
            opener: StoredValue::new(opener),
        }
    }

    /// Click handler body for an outbound link icon or button.
    pub fn open(&self, link: OutboundLink) {
        self.opener.with_value(|opener| open_link(opener.as_ref(), link));
    }
}

pub fn provide_link_context() -> LinkContext {
    let context = LinkContext::new(BrowserOpener);
    provide_context(context);
    context
}

pub fn use_link_context() -> LinkContext {
    expect_context::<LinkContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> shared::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn setup() -> (Owner, RecordingOpener, LinkContext) {
        let owner = Owner::new();
        owner.set();
        let opener = RecordingOpener::default();
        let context = LinkContext::new(opener.clone());
        (owner, opener, context)
    }

    #[test]
    fn test_store_icon_click_opens_exact_url_once() {
        let (_owner, opener, links) = setup();
        links.open(OutboundLink::AppStore);
        assert_eq!(
            *opener.opened.lock().unwrap(),
            vec!["https://apps.apple.com/app/clover-wallet/id1570072858".to_string()]
        );
    }

    #[test]
    fn test_every_icon_click_opens_once() {
        let links_under_test = OutboundLink::STORES
            .into_iter()
            .chain(OutboundLink::SOCIALS)
            .chain([OutboundLink::WebWallet]);

        for link in links_under_test {
            let (_owner, opener, links) = setup();
            links.open(link);
            assert_eq!(*opener.opened.lock().unwrap(), vec![link.url().to_string()], "{link:?}");
        }
    }

    #[test]
    fn test_contexts_do_not_share_openers() {
        let (_owner, first_opener, first) = setup();
        let second_opener = RecordingOpener::default();
        let second = LinkContext::new(second_opener.clone());

        first.open(OutboundLink::WebWallet);
        assert_eq!(first_opener.opened.lock().unwrap().len(), 1);
        assert!(second_opener.opened.lock().unwrap().is_empty());

        second.open(OutboundLink::Github);
        assert_eq!(first_opener.opened.lock().unwrap().len(), 1);
    }
}

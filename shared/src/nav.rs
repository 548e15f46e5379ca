//! Header navigation tabs.

use crate::i18n::keys;

/// Sections reachable from the header. Each tab scrolls to an anchor on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTab {
    #[default]
    Home,
    Features,
    Download,
}

impl NavTab {
    pub const ALL: [NavTab; 3] = [NavTab::Home, NavTab::Features, NavTab::Download];

    pub fn label_key(self) -> &'static str {
        match self {
            NavTab::Home => keys::NAV_HOME,
            NavTab::Features => keys::NAV_FEATURES,
            NavTab::Download => keys::NAV_DOWNLOAD,
        }
    }

    /// Element id of the section the tab scrolls to.
    pub fn anchor_id(self) -> &'static str {
        match self {
            NavTab::Home => "home",
            NavTab::Features => "components",
            NavTab::Download => "download",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys::ALL;

    #[test]
    fn test_tab_labels_are_known_keys() {
        for tab in NavTab::ALL {
            assert!(ALL.contains(&tab.label_key()), "{tab:?}");
        }
    }

    #[test]
    fn test_anchor_ids_unique() {
        let mut ids: Vec<_> = NavTab::ALL.iter().map(|tab| tab.anchor_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NavTab::ALL.len());
    }

    #[test]
    fn test_features_tab_targets_why_section() {
        assert_eq!(NavTab::Features.anchor_id(), "components");
        assert_eq!(NavTab::default(), NavTab::Home);
    }
}

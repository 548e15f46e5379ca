//! "Why Clover Wallet" feature grid

use leptos::prelude::*;
use shared::i18n::keys;
use shared::nav::NavTab;

use crate::components::SplashSection;
use crate::state::i18n::use_i18n_context;
use crate::state::theme::use_theme;

#[derive(Clone, Copy)]
struct FeatureItem {
    title_key: &'static str,
    body_key: &'static str,
    logo: &'static str,
}

const FEATURE_ITEMS: [FeatureItem; 4] = [
    FeatureItem {
        title_key: keys::SUPPORT_BLOCKCHAIN,
        body_key: keys::SUPPORT_BLOCKCHAIN_HINT,
        logo: "images/support_icon.svg",
    },
    FeatureItem {
        title_key: keys::MULTI_CHAIN_CONNECT,
        body_key: keys::MULTI_CHAIN_CONNECT_HINT,
        logo: "images/connect_icon.svg",
    },
    FeatureItem {
        title_key: keys::APP_STORE,
        body_key: keys::APP_STORE_HINT,
        logo: "images/app_store_icon.svg",
    },
    FeatureItem {
        title_key: keys::CROSS_CHAIN,
        body_key: keys::CROSS_CHAIN_HINT,
        logo: "images/cross_chain_icon.svg",
    },
];

#[component]
pub fn WhyCloverWallet() -> impl IntoView {
    let i18n = use_i18n_context();
    let theme = use_theme();
    let heading_style = format!("color: {}; text-transform: uppercase;", theme.background);
    let item_title_style = format!("color: {};", theme.background);
    let item_body_style = format!("color: {};", theme.body_text);

    view! {
        <SplashSection background_color=theme.title.clone()>
            <div class="why-container" id=NavTab::Features.anchor_id()>
                <div class="why-title" style=heading_style>
                    {move || i18n.t(keys::WHY)}
                    <span class="accent" style=format!("color: {};", theme.accent)>
                        {move || format!("\u{a0}{}\u{a0}", i18n.t(keys::CLOVER_WALLET))}
                    </span>
                </div>
                <div class="why-items">
                    {FEATURE_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="why-item">
                                    <img src=item.logo alt=""/>
                                    <div class="text-content">
                                        <h3 style=item_title_style.clone()>
                                            {move || i18n.t(item.title_key)}
                                        </h3>
                                        <span style=item_body_style.clone()>
                                            {move || i18n.t(item.body_key)}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </SplashSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_items_use_known_keys() {
        for item in FEATURE_ITEMS {
            assert!(keys::ALL.contains(&item.title_key));
            assert!(keys::ALL.contains(&item.body_key));
            assert!(item.logo.starts_with("images/"));
        }
    }
}

//! Landing page

use leptos::prelude::*;
use shared::nav::NavTab;

use crate::components::{DownloadSection, Header, WhyCloverWallet};
use crate::services::browser;

#[component]
pub fn LandingPage() -> impl IntoView {
    let current_tab = RwSignal::new(NavTab::default());

    let on_change = Callback::new(move |tab: NavTab| {
        current_tab.set(tab);
        browser::scroll_to_anchor(tab.anchor_id());
    });

    view! {
        <div class="landing" id=NavTab::Home.anchor_id()>
            <Header current_tab=current_tab on_change=on_change/>
            <WhyCloverWallet/>
            <DownloadSection/>
        </div>
    }
}

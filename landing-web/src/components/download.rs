//! Download band: store badges and socials, target of the Download tab

use leptos::prelude::*;
use shared::i18n::keys;
use shared::nav::NavTab;

use crate::components::{SplashSection, Socials, StoreButtons};
use crate::state::i18n::use_i18n_context;
use crate::state::theme::use_theme;

#[component]
pub fn DownloadSection() -> impl IntoView {
    let i18n = use_i18n_context();
    let theme = use_theme();

    view! {
        <SplashSection background_color=theme.neutral.clone()>
            <div class="download-container" id=NavTab::Download.anchor_id()>
                <h2 style=format!("color: {};", theme.background)>
                    {move || i18n.t(keys::NAV_DOWNLOAD)}
                </h2>
                <StoreButtons/>
                <Socials/>
            </div>
        </SplashSection>
    }
}

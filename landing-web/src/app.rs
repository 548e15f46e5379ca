//! Clover Wallet landing page - Leptos frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use shared::i18n::keys;

use crate::config::site_config;
use crate::pages::LandingPage;
use crate::services::browser;
use crate::state::i18n::{provide_i18n_context, use_i18n_context};
use crate::state::links::provide_link_context;
use crate::state::theme::provide_theme;
use crate::state::viewport::provide_viewport_context;

#[component]
pub fn App() -> impl IntoView {
    let config = site_config();
    provide_theme(config.theme.clone());
    provide_i18n_context(config.default_locale);
    provide_viewport_context(config.breakpoint_px);
    provide_link_context();

    // Fires once the app is in the DOM
    Effect::new(move |_| browser::hide_loading_screen());

    view! {
        <Router>
            <main class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_i18n_context();

    view! {
        <div class="not-found" style="display: flex; justify-content: center; align-items: center; min-height: 100vh;">
            <div style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">
                    {move || i18n.t(keys::NOT_FOUND_TITLE)}
                </h1>
                <p style="margin-bottom: 24px;">{move || i18n.t(keys::NOT_FOUND_BODY)}</p>
                <A href="/">
                    <span class="btn" style="display: inline-block;">
                        {move || i18n.t(keys::GO_HOME)}
                    </span>
                </A>
            </div>
        </div>
    }
}

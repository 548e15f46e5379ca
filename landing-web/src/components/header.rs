//! Page header
//!
//! Desktop: logo, nav tabs, store badges, web wallet button and language
//! dropdown. Mobile: language icon, logo and a menu button that opens a
//! vertical nav list with the social icons underneath.

use leptos::prelude::*;
use shared::i18n::keys;
use shared::layout::HeaderMenus;
use shared::links::OutboundLink;
use shared::nav::NavTab;

use crate::components::{Languages, Socials, StoreButtons};
use crate::state::i18n::use_i18n_context;
use crate::state::links::use_link_context;
use crate::state::theme::use_theme;
use crate::state::viewport::use_viewport_context;
use crate::utils::constants::{LANGUAGE_ICON_PATH, LOGO_PATH};

#[component]
pub fn Header(
    #[prop(into)] current_tab: Signal<NavTab>,
    #[prop(into)] on_change: Callback<NavTab>,
) -> impl IntoView {
    let i18n = use_i18n_context();
    let viewport = use_viewport_context();
    let theme = use_theme();
    let links = use_link_context();
    let menus = RwSignal::new(HeaderMenus::default());

    let close_languages = Callback::new(move |_: ()| menus.update(HeaderMenus::close_languages));
    let text_color = theme.background.clone();
    let bar_color = theme.bar.clone();

    view! {
        <header class="header" style=format!("width: 100%; background: {};", theme.neutral)>
            <div class="header-content">
                {move || {
                    if viewport.is_mobile() {
                        view! {
                            <img
                                class="header-icon"
                                src=LANGUAGE_ICON_PATH
                                alt=""
                                on:click=move |_| menus.update(HeaderMenus::toggle_languages)
                            />
                            <div class="header-logo">
                                <img src=LOGO_PATH alt="Clover Wallet"/>
                            </div>
                            <img
                                class="header-icon menu-toggle"
                                src=move || menus.with(HeaderMenus::menu_icon)
                                alt=""
                                on:click=move |_| menus.update(HeaderMenus::toggle_menu)
                            />
                        }
                            .into_any()
                    } else {
                        let text_color = text_color.clone();
                        let bar_color = bar_color.clone();
                        view! {
                            <div class="header-logo">
                                <img src=LOGO_PATH alt="Clover Wallet"/>
                            </div>
                            <div class="header-right">
                                <NavLinks
                                    current_tab=current_tab
                                    on_change=on_change
                                    text_color=text_color.clone()
                                    bar_color=bar_color
                                />
                                <StoreButtons/>
                                <div
                                    class="web-wallet"
                                    style=format!("color: {text_color};")
                                    on:click=move |_| links.open(OutboundLink::WebWallet)
                                >
                                    {move || i18n.t(keys::WEB_WALLET)}
                                </div>
                                <div class="language">
                                    <img
                                        src=LANGUAGE_ICON_PATH
                                        alt=""
                                        on:click=move |_| menus.update(HeaderMenus::toggle_languages)
                                    />
                                    <Show when=move || menus.with(|m| m.language_open)>
                                        <Languages on_close=close_languages/>
                                    </Show>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || viewport.is_mobile() && menus.with(|m| m.language_open)>
                <Languages on_close=close_languages/>
            </Show>

            <Show when=move || viewport.is_mobile() && menus.with(|m| m.menu_open)>
                <div class="navs">
                    {NavTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <div on:click=move |_| {
                                    on_change.run(tab);
                                    menus.update(HeaderMenus::close_menu);
                                }>
                                    {move || i18n.t(tab.label_key())}
                                </div>
                            }
                        })
                        .collect_view()}
                    <Socials vertical=true/>
                </div>
            </Show>
        </header>
    }
}

/// Horizontal tab list; the current tab gets the `active` class and an underline.
#[component]
fn NavLinks(
    current_tab: Signal<NavTab>,
    on_change: Callback<NavTab>,
    text_color: String,
    bar_color: String,
) -> impl IntoView {
    let i18n = use_i18n_context();

    view! {
        <nav class="nav-bar">
            {NavTab::ALL
                .into_iter()
                .map(|tab| {
                    let text_color = text_color.clone();
                    let bar_color = bar_color.clone();
                    let style = move || {
                        let underline = if current_tab.get() == tab {
                            format!("3px solid {bar_color}")
                        } else {
                            "none".to_string()
                        };
                        format!("color: {text_color}; border-bottom: {underline};")
                    };
                    view! {
                        <a
                            class="nav-link"
                            class:active=move || current_tab.get() == tab
                            href=format!("#{}", tab.anchor_id())
                            style=style
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_change.run(tab);
                            }
                        >
                            {move || i18n.t(tab.label_key())}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

//! Language dropdown

use leptos::prelude::*;
use shared::i18n::Locale;

use crate::state::i18n::use_i18n_context;
use crate::state::theme::use_theme;

/// One entry per supported locale, labelled in its own language. Choosing an
/// entry runs `on_close` and switches the locale.
#[component]
pub fn Languages(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n_context();
    let theme = use_theme();

    view! {
        <div
            class="language-list"
            style=format!("color: {}; background-color: {};", theme.background, theme.title)
        >
            {Locale::ALL
                .into_iter()
                .map(|locale| {
                    view! {
                        <div
                            class="language-option"
                            class:selected=move || i18n.locale() == locale
                            on:click=move |_| {
                                on_close.run(());
                                i18n.set_locale(locale);
                            }
                        >
                            {locale.native_name()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

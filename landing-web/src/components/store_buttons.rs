//! App Store / Google Play / Chrome Web Store badges

use leptos::prelude::*;
use shared::links::OutboundLink;

use crate::state::links::use_link_context;

#[component]
pub fn StoreButtons() -> impl IntoView {
    let links = use_link_context();

    view! {
        <div class="button-icon">
            {OutboundLink::STORES
                .into_iter()
                .map(|link| {
                    view! {
                        <img
                            src=link.icon()
                            alt=link.label()
                            on:click=move |_| links.open(link)
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

//! Social network icons

use leptos::prelude::*;
use shared::links::OutboundLink;

use crate::state::links::use_link_context;

/// Row of social icons. `vertical` stacks them for the mobile menu.
#[component]
pub fn Socials(#[prop(optional)] vertical: bool) -> impl IntoView {
    let links = use_link_context();

    view! {
        <div class="socials" class:vertical=vertical>
            {OutboundLink::SOCIALS
                .into_iter()
                .map(|link| {
                    view! {
                        <img
                            src=link.icon()
                            alt=link.label()
                            style="cursor: pointer;"
                            on:click=move |_| links.open(link)
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

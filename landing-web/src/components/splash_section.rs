//! Full-width content band

use leptos::prelude::*;

#[component]
pub fn SplashSection(#[prop(into)] background_color: String, children: Children) -> impl IntoView {
    view! {
        <section
            class="splash-section"
            style=format!("width: 100%; background-color: {background_color};")
        >
            <div class="splash-content" style="max-width: 1440px; margin: 0 auto; padding: 0 128px;">
                {children()}
            </div>
        </section>
    }
}

//! Theme context

use leptos::prelude::*;
use shared::theme::Theme;

pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

pub fn use_theme() -> Theme {
    expect_context::<Theme>()
}

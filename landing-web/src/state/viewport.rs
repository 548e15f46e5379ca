//! Viewport width tracking

use leptos::ev;
use leptos::prelude::*;
use shared::layout::LayoutMode;

use crate::services::browser;

#[derive(Clone, Copy)]
pub struct ViewportContext {
    width: RwSignal<f64>,
    layout: Memo<LayoutMode>,
}

impl ViewportContext {
    pub fn new(width: f64, breakpoint_px: u32) -> Self {
        let width = RwSignal::new(width);
        let layout = Memo::new(move |_| LayoutMode::for_width_with(width.get(), breakpoint_px));
        Self { width, layout }
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout.get()
    }

    /// Selects the header's mobile branch over the desktop one.
    pub fn is_mobile(&self) -> bool {
        self.layout().is_mobile()
    }
}

/// Track `window.innerWidth` and derive the layout mode on every resize.
pub fn provide_viewport_context(breakpoint_px: u32) -> ViewportContext {
    let initial = browser::viewport_width().unwrap_or(f64::from(breakpoint_px));
    let context = ViewportContext::new(initial, breakpoint_px);

    // Page-lifetime listener, never removed.
    let _listener = window_event_listener(ev::resize, move |_| {
        if let Some(current) = browser::viewport_width() {
            context.set_width(current);
        }
    });

    provide_context(context);
    context
}

pub fn use_viewport_context() -> ViewportContext {
    expect_context::<ViewportContext>()
}

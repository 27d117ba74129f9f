//! Custom cursor: a ring and a dot mirroring the pointer.
//!
//! Both markers are purely visual overlays; `pointer-events: none` in the
//! stylesheet keeps them from ever capturing input.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Cursor mode toggled by interactive regions on pointer enter/leave.
/// Last write wins when regions overlap; cards on this page never nest,
/// so the inherited behavior is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Default,
    Hover,
}

impl CursorMode {
    /// Visual scale of the ring marker.
    pub fn ring_scale(self) -> f64 {
        match self {
            CursorMode::Default => 1.0,
            CursorMode::Hover => 1.5,
        }
    }
}

#[component]
pub fn CursorOverlay(
    pointer: ReadSignal<(f64, f64)>,
    mode: ReadSignal<CursorMode>,
    set_pointer: WriteSignal<(f64, f64)>,
) -> impl IntoView {
    Effect::new(move || {
        if let Some(window) = web_sys::window() {
            let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                set_pointer.set((event.client_x() as f64, event.client_y() as f64));
            }) as Box<dyn FnMut(_)>);

            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget(); // the overlay lives as long as the page
        }
    });

    let ring_style = move || {
        let (x, y) = pointer.get();
        format!(
            "left: {x}px; top: {y}px; transform: translate(-50%, -50%) scale({})",
            mode.get().ring_scale()
        )
    };
    let dot_style = move || {
        let (x, y) = pointer.get();
        format!("left: {x}px; top: {y}px; transform: translate(-50%, -50%)")
    };

    view! {
        <div class="cursor-ring" style=ring_style></div>
        <div class="cursor-dot" style=dot_style></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_scale_follows_mode() {
        assert_eq!(CursorMode::Default.ring_scale(), 1.0);
        assert_eq!(CursorMode::Hover.ring_scale(), 1.5);
    }

    #[test]
    fn default_mode_is_default() {
        assert_eq!(CursorMode::default(), CursorMode::Default);
    }
}

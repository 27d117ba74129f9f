// DexoFlux landing page — Leptos 0.8 Edition

mod actions;
mod backdrop;
mod console_art;
mod content;
mod cursor;
mod sections;

use leptos::prelude::*;

use backdrop::Backdrop;
use cursor::{CursorMode, CursorOverlay};
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Pointer position and cursor mode are the only page-wide state.
    // Owned here, handed down as plain signals.
    let (pointer, set_pointer) = signal((0.0f64, 0.0f64));
    let (cursor_mode, set_cursor_mode) = signal(CursorMode::Default);

    Effect::new(move || {
        console_art::print_console_brand();
    });

    view! {
        <Backdrop />
        <CursorOverlay pointer=pointer mode=cursor_mode set_pointer=set_pointer />
        <Nav />
        <main>
            <Hero />
            <Courses set_cursor=set_cursor_mode />
            <Stats set_cursor=set_cursor_mode />
            <Journey set_cursor=set_cursor_mode />
            <WhyUs set_cursor=set_cursor_mode />
            <Testimonials set_cursor=set_cursor_mode />
            <Contact set_cursor=set_cursor_mode />
        </main>
        <Footer />
    }
}

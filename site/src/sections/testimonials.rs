use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::cursor::CursorMode;

#[component]
pub fn Testimonials(set_cursor: WriteSignal<CursorMode>) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">"Student Success Stories"</h3>
                    <p class="section-description">"Hear from our successful graduates"</p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            let initial = t.name.chars().next().map(String::from).unwrap_or_default();
                            view! {
                                <div
                                    class="testimonial-card"
                                    on:mouseenter=move |_| set_cursor.set(CursorMode::Hover)
                                    on:mouseleave=move |_| set_cursor.set(CursorMode::Default)
                                >
                                    <div class="testimonial-stars">
                                        {"★".repeat(t.rating as usize)}
                                    </div>
                                    <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                                    <div class="testimonial-author">
                                        <div class="testimonial-avatar">{initial}</div>
                                        <div>
                                            <p class="testimonial-name">{t.name}</p>
                                            <p class="testimonial-role">{t.role}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

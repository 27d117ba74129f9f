use leptos::prelude::*;

use crate::content::FEATURES;
use crate::cursor::CursorMode;

#[component]
pub fn WhyUs(set_cursor: WriteSignal<CursorMode>) -> impl IntoView {
    view! {
        <section id="why-us" class="section">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">"Why Choose DexoFlux?"</h3>
                    <p class="section-description">
                        "Where innovation meets excellence in education"
                    </p>
                </div>
                <div class="why-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div
                                    class="why-item"
                                    on:mouseenter=move |_| set_cursor.set(CursorMode::Hover)
                                    on:mouseleave=move |_| set_cursor.set(CursorMode::Default)
                                >
                                    <span class="why-dot"></span>
                                    <span class="why-text">{*feature}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="fresher-banner">
                    <div class="fresher-icon">"👨‍🎓"</div>
                    <div>
                        <h4 class="fresher-title">"Special Support for Freshers"</h4>
                        <p class="fresher-text">
                            "We guide students step-by-step to achieve their first IT job with "
                            "confidence — from skills training to interview success. Our "
                            "comprehensive mentorship program ensures you're industry-ready "
                            "from day one."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

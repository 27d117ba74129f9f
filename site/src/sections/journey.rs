use leptos::prelude::*;

use crate::content::JOURNEY;
use crate::cursor::CursorMode;

#[component]
pub fn Journey(set_cursor: WriteSignal<CursorMode>) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">"Your Learning Journey"</h3>
                    <p class="section-description">
                        "A structured path from beginner to job-ready professional"
                    </p>
                </div>
                <div class="journey-grid">
                    {JOURNEY
                        .iter()
                        .map(|step| {
                            view! {
                                <div
                                    class="journey-card"
                                    on:mouseenter=move |_| set_cursor.set(CursorMode::Hover)
                                    on:mouseleave=move |_| set_cursor.set(CursorMode::Default)
                                >
                                    <div class="journey-head">
                                        <div class="card-icon">{step.icon}</div>
                                        <div class="journey-step">{step.step}</div>
                                    </div>
                                    <h4 class="card-title">{step.title}</h4>
                                    <p class="card-blurb">{step.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

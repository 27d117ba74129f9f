use leptos::prelude::*;

use crate::content::STATS;
use crate::cursor::CursorMode;

#[component]
pub fn Stats(set_cursor: WriteSignal<CursorMode>) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div
                                    class="stat-card"
                                    on:mouseenter=move |_| set_cursor.set(CursorMode::Hover)
                                    on:mouseleave=move |_| set_cursor.set(CursorMode::Default)
                                >
                                    <div class="stat-icon">{stat.icon}</div>
                                    <div class="stat-number">{stat.number}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

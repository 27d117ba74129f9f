use leptos::prelude::*;

use crate::content::COURSES;
use crate::cursor::CursorMode;

#[component]
pub fn Courses(set_cursor: WriteSignal<CursorMode>) -> impl IntoView {
    view! {
        <section id="courses" class="section">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">"Courses Offered"</h3>
                    <p class="section-description">
                        "Industry-relevant programs designed for your success"
                    </p>
                </div>
                <div class="courses-grid">
                    {COURSES
                        .iter()
                        .map(|course| {
                            view! {
                                <div
                                    class="course-card"
                                    on:mouseenter=move |_| set_cursor.set(CursorMode::Hover)
                                    on:mouseleave=move |_| set_cursor.set(CursorMode::Default)
                                >
                                    <div class="card-icon">{course.icon}</div>
                                    <h4 class="card-title">{course.name}</h4>
                                    <p class="card-blurb">{course.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

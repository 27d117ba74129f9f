use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <h1 class="nav-title">"DexoFlux"</h1>
                    <p class="nav-tagline">"Institute of Technology & Skills"</p>
                </div>
                <div class="nav-links">
                    <a href="#courses" class="nav-link">"Courses"</a>
                    <a href="#why-us" class="nav-link">"Why Us"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </div>
            </div>
        </nav>
    }
}

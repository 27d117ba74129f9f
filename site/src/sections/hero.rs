use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-badge">
                    "🚀 Admissions Open - Limited Seats Available"
                </div>
                <h2 class="hero-title">
                    "Your Gateway to a"
                    <br />
                    <span class="hero-title-accent">"Successful IT Career"</span>
                </h2>
                <p class="hero-description">
                    "Transform your passion into profession with industry-leading training, "
                    "real-world projects, and guaranteed placement assistance"
                </p>
                <div class="hero-actions">
                    <a href="#courses" class="btn btn-primary">"Explore Courses"</a>
                    <a href="#contact" class="btn btn-secondary">"Get Started"</a>
                </div>
            </div>
        </section>
    }
}

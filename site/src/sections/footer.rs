use leptos::prelude::*;

use crate::actions;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">
                    "© 2026 DexoFlux Institute of Technology & Skills"
                </p>
                <p class="footer-motto">"Where Innovation Begins"</p>
                <div class="footer-links">
                    <button class="footer-link" on:click=move |_| actions::open_dialer()>
                        {format!("📞 {}", actions::CONTACT_PHONE)}
                    </button>
                    <button class="footer-link" on:click=move |_| actions::open_email()>
                        {format!("📧 {}", actions::CONTACT_EMAIL)}
                    </button>
                </div>
            </div>
        </footer>
    }
}

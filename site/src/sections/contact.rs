use leptos::prelude::*;

use crate::actions;
use crate::cursor::CursorMode;

#[component]
pub fn Contact(set_cursor: WriteSignal<CursorMode>) -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <div class="container">
                <div class="section-header">
                    <h3 class="section-title">"Get In Touch"</h3>
                    <p class="section-description">"Start your journey with us today"</p>
                </div>

                <div class="contact-grid">
                    <ContactCard
                        icon="📞"
                        title="Call Us"
                        value=actions::CONTACT_PHONE
                        hint="Click to call directly"
                        cta="Tap to Call"
                        on_activate=actions::open_dialer
                        set_cursor=set_cursor
                    />
                    <ContactCard
                        icon="📧"
                        title="Email Us"
                        value=actions::CONTACT_EMAIL
                        hint="Click to send email"
                        cta="Send Email"
                        on_activate=actions::open_email
                        set_cursor=set_cursor
                    />
                    <ContactCard
                        icon="💬"
                        title="WhatsApp"
                        value=actions::CONTACT_PHONE
                        hint="Click to message on WhatsApp"
                        cta="Message Now"
                        on_activate=actions::open_whatsapp
                        set_cursor=set_cursor
                    />
                </div>

                <div class="cta-banner">
                    <div class="cta-copy">
                        <div class="cta-tag">"🚀 Limited Seats Available"</div>
                        <h4 class="cta-title">"Start Your Tech Journey Today!"</h4>
                        <p class="cta-text">
                            "Join 500+ successful graduates and transform your career"
                        </p>
                    </div>
                    <div class="cta-actions">
                        <button class="btn btn-primary" on:click=move |_| actions::open_dialer()>
                            "Call Now"
                        </button>
                        <button class="btn btn-whatsapp" on:click=move |_| actions::open_whatsapp()>
                            "WhatsApp"
                        </button>
                    </div>
                </div>
                <p class="cta-motto">"Where Innovation Begins"</p>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    hint: &'static str,
    cta: &'static str,
    on_activate: fn(),
    set_cursor: WriteSignal<CursorMode>,
) -> impl IntoView {
    view! {
        <div
            class="contact-card"
            on:click=move |_| on_activate()
            on:mouseenter=move |_| set_cursor.set(CursorMode::Hover)
            on:mouseleave=move |_| set_cursor.set(CursorMode::Default)
        >
            <div class="contact-icon">{icon}</div>
            <h4 class="contact-title">{title}</h4>
            <p class="contact-value">{value}</p>
            <p class="contact-hint">{hint}</p>
            <span class="contact-cta">{cta}" →"</span>
        </div>
    }
}

//! Outbound contact actions.
//!
//! Each action builds one deep-link URI and hands it to the platform's
//! handler. Fire-and-forget: what the mail client, dialer, or chat app
//! does with it afterwards is not this page's business.

use urlencoding::encode;

/// Fixed destination address for email inquiries.
pub const CONTACT_EMAIL: &str = "Dexoflux@gmail.com";

/// Fixed institute number, digits only.
pub const CONTACT_PHONE: &str = "8801659042";

const EMAIL_SUBJECT: &str = "Inquiry about DexoFlux Courses";

const EMAIL_BODY: &str = "Hello DexoFlux Team,\n\nI am interested in learning more about your courses.\n\nPlease send me more information.\n\nRegards,\n[Your Name]";

const WHATSAPP_MESSAGE: &str =
    "Hello DexoFlux Team, I am interested in learning more about your courses.";

/// `mailto:` draft with the fixed subject and body template.
pub fn email_uri() -> String {
    format!(
        "mailto:{CONTACT_EMAIL}?subject={}&body={}",
        encode(EMAIL_SUBJECT),
        encode(EMAIL_BODY)
    )
}

/// `tel:` dial intent.
pub fn dial_uri() -> String {
    format!("tel:{CONTACT_PHONE}")
}

/// WhatsApp deep link carrying the fixed greeting.
pub fn whatsapp_uri() -> String {
    format!(
        "https://wa.me/{CONTACT_PHONE}?text={}",
        encode(WHATSAPP_MESSAGE)
    )
}

/// Navigates the current context to the email draft.
pub fn open_email() {
    navigate(&email_uri());
}

/// Navigates the current context to the dialer.
pub fn open_dialer() {
    navigate(&dial_uri());
}

/// Opens the WhatsApp conversation in a new browsing context.
pub fn open_whatsapp() {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&whatsapp_uri(), "_blank");
    }
}

fn navigate(uri: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dial_uri_is_digits_only() {
        assert_eq!(dial_uri(), "tel:8801659042");
    }

    #[test]
    fn email_uri_carries_an_encoded_subject_and_body() {
        let uri = email_uri();
        assert!(uri.starts_with("mailto:Dexoflux@gmail.com?subject="));

        let body = uri.split("&body=").nth(1).expect("body parameter present");
        assert!(!body.is_empty());
        assert_eq!(urlencoding::decode(body).expect("valid encoding"), EMAIL_BODY);
    }

    #[test]
    fn email_subject_is_the_fixed_inquiry_line() {
        let uri = email_uri();
        let subject = uri
            .split("subject=")
            .nth(1)
            .and_then(|rest| rest.split('&').next())
            .expect("subject parameter present");
        assert_eq!(subject, "Inquiry%20about%20DexoFlux%20Courses");
    }

    #[test]
    fn whatsapp_uri_round_trips_the_message() {
        let uri = whatsapp_uri();
        assert_eq!(
            uri,
            "https://wa.me/8801659042?text=Hello%20DexoFlux%20Team%2C%20I%20am%20interested%20in%20learning%20more%20about%20your%20courses."
        );

        let text = uri.split("?text=").nth(1).expect("text parameter present");
        assert_eq!(
            urlencoding::decode(text).expect("valid encoding"),
            WHATSAPP_MESSAGE
        );
    }
}

use crate::models::template::Template;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Checkout form on a template's detail page.
#[derive(Debug, Clone, Default, FromForm)]
pub struct CheckoutRequest {
    #[field(default = String::new())]
    pub name: String,
    #[field(default = String::new())]
    pub email: String,
    #[field(default = String::new())]
    pub notes: String,
}

/// Site-wide contact form.
#[derive(Debug, Clone, Default, FromForm)]
pub struct ContactRequest {
    #[field(default = String::new())]
    pub name: String,
    #[field(default = String::new())]
    pub email: String,
    #[field(default = String::new())]
    pub message: String,
}

/// `https://wa.me/<digits>?text=<message>`. Non-digits in the configured
/// number (spaces, `+`, dashes) are dropped.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let text: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("{}{}?text={}", WHATSAPP_BASE, digits, text)
}

pub fn checkout_message(t: &Template, req: &CheckoutRequest) -> String {
    format!(
        "I'm interested in {} ({}). Details: Name: {}, Email: {}, Notes: {}. Template description: {}",
        t.name, t.price, req.name, req.email, req.notes, t.description
    )
}

pub fn contact_message(req: &ContactRequest) -> String {
    format!("Message from {} ({}): {}", req.name, req.email, req.message)
}

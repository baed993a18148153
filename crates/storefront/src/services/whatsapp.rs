//! WhatsApp deep-link generation.

/// Build a `https://wa.me/<digits>` deep link for `phone`.
///
/// Every non-digit character is stripped from the phone number (merchants
/// enter numbers with spaces, dashes, and a leading `+`). Returns `None`
/// when no digits remain, which consumers treat as "not configured". A
/// non-empty `message` is attached as a URL-encoded `text` parameter.
#[must_use]
pub fn whatsapp_link(phone: &str, message: Option<&str>) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let mut url = format!("https://wa.me/{digits}");
    if let Some(text) = message.filter(|text| !text.is_empty()) {
        url.push_str("?text=");
        url.push_str(&urlencoding::encode(text));
    }
    Some(url)
}

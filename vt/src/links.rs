//! Link builders for the presentation boundary
//!
//! Pure string helpers the rendering layer uses for booking buttons and
//! the hero banner image. Punctuation is stripped before the terms are
//! joined, so the output needs no further escaping.

use std::sync::OnceLock;

use regex::Regex;

/// Matches everything except word characters and whitespace
fn punctuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"))
}

/// Build a web-search booking link for a transport or stay option
pub fn booking_search_url(query: &str) -> String {
    let clean = punctuation_re().replace_all(query, "");
    let terms = clean.split_whitespace().collect::<Vec<_>>().join("+");
    format!("https://www.google.com/search?q={}", terms)
}

/// Build the hero banner image URL for a destination
pub fn hero_image_url(destination: &str) -> String {
    let styled = format!("{} cinematic travel 4k aesthetic", destination);
    let clean = punctuation_re().replace_all(&styled, "");
    let encoded = clean.split_whitespace().collect::<Vec<_>>().join("%20");
    format!(
        "https://image.pollinations.ai/prompt/{}?width=1200&height=600&nologo=true",
        encoded
    )
}

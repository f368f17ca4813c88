//! Total selector helpers
//!
//! Every helper here turns "no element matched" (or an unparsable selector)
//! into an empty result instead of an error, so extraction code can read a
//! field in a single expression.

use scraper::{ElementRef, Selector};

/// Parses a selector, logging and returning None if it is invalid
fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(compiled) => Some(compiled),
        Err(e) => {
            tracing::debug!("Invalid CSS selector '{}': {:?}", selector, e);
            None
        }
    }
}

/// Returns the first element under `root` matching `selector`
fn select_first<'a>(root: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let compiled = compile(selector)?;
    let first = root.select(&compiled).next();
    first
}

/// Text of the first match with surrounding whitespace removed, or ""
pub fn select_first_text(root: ElementRef<'_>, selector: &str) -> String {
    select_first_text_raw(root, selector).trim().to_string()
}

/// Text of the first match exactly as it appears in the markup, or ""
pub fn select_first_text_raw(root: ElementRef<'_>, selector: &str) -> String {
    select_first(root, selector)
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

/// Value of `attr` on the first match, or "" if there is no match or no attribute
pub fn select_first_attr(root: ElementRef<'_>, selector: &str, attr: &str) -> String {
    select_first(root, selector)
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Outer HTML of every match, in document order
pub fn select_all_html(root: ElementRef<'_>, selector: &str) -> Vec<String> {
    match compile(selector) {
        Some(compiled) => root.select(&compiled).map(|element| element.html()).collect(),
        None => Vec::new(),
    }
}

/// Returns true if at least one element under `root` matches `selector`
pub fn has_match(root: ElementRef<'_>, selector: &str) -> bool {
    select_first(root, selector).is_some()
}

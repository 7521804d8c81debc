//! Display Formatting
//!
//! Text helpers for Pokémon cards.

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalized type names joined with ", ", in source order
pub fn format_types(types: &[String]) -> String {
    types
        .iter()
        .map(|t| capitalize(t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 1-based position badge for the card at `index`
pub fn position_badge(index: usize) -> String {
    format!("#{}", index + 1)
}

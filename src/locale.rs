// 🌍 Locale - Deriving the preferred display country
//
// Parses `language` or `language-REGION` identifiers ("en", "de-DE",
// "fr-BE"). The result only biases country-section order, never filters
// data, and a None degrades to plain alphabetical order.

/// Extract an uppercased 2-letter country code from a locale identifier,
/// or None when there is no confident match.
pub fn derive_user_country(locale: Option<&str>) -> Option<String> {
    let locale = locale?;
    let parts: Vec<&str> = locale.split('-').collect();

    if parts.len() == 1 && parts[0].chars().count() == 2 {
        return Some(parts[0].to_uppercase());
    }
    if parts.len() > 1 && parts[1].chars().count() == 2 {
        return Some(parts[1].to_uppercase());
    }
    None
}

/// Category slugs with a fixed display label.
const CATEGORY_LABELS: &[(&str, &str)] = &[("tops_sweaters", "Tops/Sweaters"), ("t-shirts", "T-Shirts")];

/// Lowercased size tokens and their labels. `ランダム` marks a size the buyer
/// accepts at random; it collapses onto the plain size.
const SIZE_LABELS: &[(&str, &str)] = &[
    ("", "Random"),
    ("s", "Small"),
    ("sランダム", "Small"),
    ("m", "Medium"),
    ("mランダム", "Medium"),
    ("l", "Large"),
    ("lランダム", "Large"),
    ("xl", "XLarge"),
    ("xlランダム", "XLarge"),
    ("s/m", "S/M"),
    ("l/xl", "L/XL"),
];

/// Maps a category slug to its label, otherwise capitalizes the first character only.
pub fn normalize_category(raw: &str) -> String {
    if let Some((_, label)) = CATEGORY_LABELS.iter().find(|(slug, _)| *slug == raw) {
        return label.to_string();
    }

    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Looks up the label for a size token, ignoring case.
///
/// Returns `None` for tokens outside the table; the caller keeps the raw value.
pub fn normalize_size(raw: &str) -> Option<&'static str> {
    let token = raw.to_lowercase();
    SIZE_LABELS
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, label)| *label)
}

/// Full country names as WeatherAPI.com spells them.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("Brazil", "BR"),
    ("United States of America", "US"),
    ("United Kingdom", "GB"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Japan", "JP"),
    ("China", "CN"),
    ("Italy", "IT"),
    ("Spain", "ES"),
    ("Portugal", "PT"),
    ("Argentina", "AR"),
    ("Mexico", "MX"),
    ("Canada", "CA"),
    ("Australia", "AU"),
];

/// Resolve a provider country name to a two-letter code.
///
/// Names of at most two characters are returned unchanged. Unknown names
/// fall back to their first two characters upper-cased, which is only an
/// approximation (e.g. "Chile" becomes "CH").
pub fn resolve_country_code(name: &str) -> String {
    if name.chars().count() <= 2 {
        return name.to_string();
    }

    if let Some((_, code)) = COUNTRY_CODES.iter().find(|(full, _)| *full == name) {
        return (*code).to_string();
    }

    let fallback: String = name.chars().take(2).collect::<String>().to_uppercase();
    tracing::debug!(country = name, code = %fallback, "country not in table, using prefix");
    fallback
}

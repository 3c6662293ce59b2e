use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for gallery language labels
///
/// Demo files carry language tags such as `zh-CN` or `pt-BR`. This module
/// resolves the base ISO 639 code of such a tag and renders the native and
/// English labels shown next to each demo.

/// Map an ISO 639-2/B code to its ISO 639-2/T equivalent
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"),
        "ger" => Some("deu"),
        "dut" => Some("nld"),
        "gre" => Some("ell"),
        "chi" => Some("zho"),
        "cze" => Some("ces"),
        "ice" => Some("isl"),
        "alb" => Some("sqi"),
        "arm" => Some("hye"),
        "baq" => Some("eus"),
        "bur" => Some("mya"),
        "per" => Some("fas"),
        "geo" => Some("kat"),
        "may" => Some("msa"),
        "mac" => Some("mkd"),
        "rum" => Some("ron"),
        "slo" => Some("slk"),
        "wel" => Some("cym"),
        _ => None,
    }
}

/// Region a language is assumed to be spoken in when a tag names it;
/// such tags are labelled with the plain language name
fn home_region(base: &str) -> Option<&'static str> {
    match base {
        "en" => Some("US"),
        "zh" => Some("CN"),
        "de" => Some("DE"),
        "es" => Some("ES"),
        "fr" => Some("FR"),
        "it" => Some("IT"),
        "ru" => Some("RU"),
        "ja" => Some("JP"),
        "ko" => Some("KR"),
        "pt" => Some("PT"),
        "nl" => Some("NL"),
        "ar" => Some("SA"),
        "hi" => Some("IN"),
        _ => None,
    }
}

/// English name of an ISO 3166-1 alpha-2 region code
fn region_name(region: &str) -> Option<&'static str> {
    match region {
        "AR" => Some("Argentina"),
        "AT" => Some("Austria"),
        "AU" => Some("Australia"),
        "BE" => Some("Belgium"),
        "BR" => Some("Brazil"),
        "CA" => Some("Canada"),
        "CH" => Some("Switzerland"),
        "CN" => Some("China"),
        "GB" => Some("United Kingdom"),
        "HK" => Some("Hong Kong"),
        "IE" => Some("Ireland"),
        "IN" => Some("India"),
        "MX" => Some("Mexico"),
        "NZ" => Some("New Zealand"),
        "PT" => Some("Portugal"),
        "SG" => Some("Singapore"),
        "TW" => Some("Taiwan"),
        "US" => Some("United States"),
        "ZA" => Some("South Africa"),
        _ => None,
    }
}

/// Name of a region in the tag's own language, where it differs from
/// the English one
fn native_region_name(base: &str, region: &str) -> Option<&'static str> {
    match (base, region) {
        ("pt", "BR") => Some("Brasil"),
        ("es", "MX") => Some("México"),
        ("es", "AR") => Some("Argentina"),
        ("de", "AT") => Some("Österreich"),
        ("de", "CH") => Some("Schweiz"),
        ("fr", "CA") => Some("Canada"),
        ("fr", "BE") => Some("Belgique"),
        ("fr", "CH") => Some("Suisse"),
        ("zh", "TW") => Some("台灣"),
        ("zh", "HK") => Some("香港"),
        ("en", region) => region_name(region),
        _ => None,
    }
}

/// Split a tag like `pt-BR` or `en_us` into its base code and region
pub fn split_language_tag(tag: &str) -> (String, Option<String>) {
    let tag = tag.trim();
    match tag.split_once(['-', '_']) {
        Some((base, region)) if !region.trim().is_empty() => {
            (base.trim().to_lowercase(), Some(region.trim().to_uppercase()))
        }
        Some((base, _)) => (base.trim().to_lowercase(), None),
        None => (tag.to_lowercase(), None),
    }
}

/// Resolve the base code of a language tag (ISO 639-1, 639-2/T or 639-2/B)
pub fn resolve_language(tag: &str) -> Result<Language> {
    let (base, _) = split_language_tag(tag);

    let language = match base.len() {
        2 => Language::from_639_1(&base),
        3 => Language::from_639_3(part2b_to_part2t(&base).unwrap_or(&base)),
        _ => None,
    };

    language.ok_or_else(|| anyhow!("Invalid language code: {}", tag))
}

/// Get the English language name from a tag
pub fn get_language_name(tag: &str) -> Result<String> {
    Ok(resolve_language(tag)?.to_name().to_string())
}

/// Get the language's own name for itself from a tag
pub fn get_native_name(tag: &str) -> Result<String> {
    let language = resolve_language(tag)?;
    let autonym = language
        .to_autonym()
        .ok_or_else(|| anyhow!("No native name known for: {}", tag))?;

    Ok(capitalize_first(autonym))
}

/// Native and English labels for a language tag.
///
/// Regional variants such as `pt-BR` get the region name appended, e.g.
/// `Português (Brasil)` and `Portuguese (Brazil)`. A tag naming the
/// language's home region (`zh-CN`, `en-US`) is labelled with the plain
/// language name. Unknown tags are labelled with the tag itself.
pub fn language_labels(tag: &str) -> (String, String) {
    let (base, region) = split_language_tag(tag);
    let variant = region.filter(|region| home_region(&base) != Some(region.as_str()));

    let native = match (get_native_name(tag), variant.as_deref()) {
        (Ok(name), Some(region)) => match native_region_name(&base, region) {
            Some(region_label) => format!("{} ({})", name, region_label),
            None => name,
        },
        (Ok(name), None) => name,
        (Err(_), _) => tag.to_string(),
    };
    let english = match (get_language_name(tag), variant.as_deref()) {
        (Ok(name), Some(region)) => format!("{} ({})", name, region_name(region).unwrap_or(region)),
        (Ok(name), None) => name,
        (Err(_), _) => tag.to_string(),
    };

    (native, english)
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

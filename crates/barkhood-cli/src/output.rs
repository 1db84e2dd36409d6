//! Output renderers for CLI commands.

use anyhow::anyhow;
use barkhood_ai::PlaceSearchResult;
use barkhood_i18n::{Language, TranslationKey, catalog};
use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_chat(reply: &str, format: OutputFormat) -> CliResult<()> {
    println!("{}", format_chat(reply, format)?);
    Ok(())
}

pub(crate) fn render_places(result: &PlaceSearchResult, format: OutputFormat) -> CliResult<()> {
    println!("{}", format_places(result, format)?);
    Ok(())
}

pub(crate) fn render_strings(language: Language, format: OutputFormat) -> CliResult<()> {
    println!("{}", format_strings(language, format)?);
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

pub(crate) fn format_chat(reply: &str, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "reply": reply })),
        OutputFormat::Table => Ok(reply.to_string()),
    }
}

pub(crate) fn format_places(result: &PlaceSearchResult, format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(result);
    }
    let mut lines = Vec::new();
    if let Some(summary) = &result.summary {
        lines.push(summary.clone());
    }
    if !result.places.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        for (index, place) in result.places.iter().enumerate() {
            let title = place.title.as_deref().unwrap_or("<untitled>");
            match &place.uri {
                Some(uri) => lines.push(format!("{:>2}. {title} <{uri}>", index + 1)),
                None => lines.push(format!("{:>2}. {title}", index + 1)),
            }
        }
    }
    if lines.is_empty() {
        lines.push("no results".to_string());
    }
    Ok(lines.join("\n"))
}

pub(crate) fn format_strings(language: Language, format: OutputFormat) -> CliResult<String> {
    let strings = catalog(language);
    let locale = language.speech_locale();
    match format {
        OutputFormat::Json => {
            let entries: serde_json::Map<String, serde_json::Value> = TranslationKey::all()
                .iter()
                .map(|key| (key.as_str().to_string(), json!(strings.text(*key))))
                .collect();
            to_json(&json!({
                "language": language,
                "direction": language.direction(),
                "speechLocale": locale,
                "strings": entries,
            }))
        }
        OutputFormat::Table => {
            let mut lines = vec![
                format!("language: {} ({})", language.label(), language.code()),
                format!("direction: {}", language.direction().as_str()),
                format!(
                    "speech: {}{}",
                    locale.tag,
                    if locale.is_fallback() { " (fallback)" } else { "" }
                ),
                String::new(),
            ];
            let width = TranslationKey::all()
                .iter()
                .map(|key| key.as_str().len())
                .max()
                .unwrap_or_default();
            for key in TranslationKey::all() {
                lines.push(format!("{:<width$}  {}", key.as_str(), strings.text(*key)));
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkhood_ai::PlaceReference;
    use serde_json::Value;

    fn sample_result() -> PlaceSearchResult {
        PlaceSearchResult {
            summary: Some("Two parks nearby.".to_string()),
            places: vec![
                PlaceReference {
                    title: Some("Herzl Dog Park".to_string()),
                    uri: Some("https://maps.google.com/?cid=1".to_string()),
                },
                PlaceReference::default(),
            ],
        }
    }

    #[test]
    fn places_table_numbers_references() {
        let text = format_places(&sample_result(), OutputFormat::Table).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Two parks nearby.");
        assert_eq!(lines[2], " 1. Herzl Dog Park <https://maps.google.com/?cid=1>");
        assert_eq!(lines[3], " 2. <untitled>");
    }

    #[test]
    fn empty_places_say_so() {
        let text = format_places(&PlaceSearchResult::default(), OutputFormat::Table).unwrap();
        assert_eq!(text, "no results");
    }

    #[test]
    fn places_json_keeps_missing_fields_as_null() {
        let text = format_places(&sample_result(), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["places"][1]["title"], Value::Null);
        assert_eq!(value["summary"], "Two parks nearby.");
    }

    #[test]
    fn strings_table_reports_direction_and_speech_fallback() {
        let text = format_strings(Language::De, OutputFormat::Table).unwrap();
        assert!(text.contains("direction: ltr"));
        assert!(text.contains("speech: en-US (fallback)"));

        let hebrew = format_strings(Language::He, OutputFormat::Table).unwrap();
        assert!(hebrew.contains("direction: rtl"));
        assert!(hebrew.contains("speech: he-IL\n"));
    }

    #[test]
    fn strings_json_lists_every_key() {
        let text = format_strings(Language::En, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["language"], "en");
        assert_eq!(value["direction"], "ltr");
        assert_eq!(value["speechLocale"]["tag"], "en-US");
        assert_eq!(value["strings"]["appTitle"], "Neighborhood Bark");
        assert_eq!(
            value["strings"].as_object().map(serde_json::Map::len),
            Some(TranslationKey::all().len())
        );
    }

    #[test]
    fn chat_json_wraps_reply() {
        let text = format_chat("Walk twice a day.", OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["reply"], "Walk twice a day.");
    }
}

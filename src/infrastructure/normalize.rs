// Accent normalization for dataset keys and string values
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip combining diacritical marks: decompose (NFD), drop the marks, keep
/// every other character unchanged. Never fails, including on empty input.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Apply [`strip_diacritics`] to every object key and every string value of a
/// JSON document. Numbers, booleans and nulls pass through unchanged.
pub fn normalize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(strip_diacritics(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (strip_diacritics(&key), normalize_value(value)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strips_portuguese_diacritics() {
        assert_eq!(strip_diacritics("Mês"), "Mes");
        assert_eq!(strip_diacritics("Salão"), "Salao");
        assert_eq!(strip_diacritics("Março"), "Marco");
        assert_eq!(strip_diacritics("ação à média"), "acao a media");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_diacritics(""), "");
        assert_eq!(strip_diacritics("Ifood Valor"), "Ifood Valor");
    }

    #[test]
    fn test_output_has_no_combining_marks() {
        for input in ["Mês", "Salão", "çãéàõü", "e\u{301}"] {
            let out = strip_diacritics(input);
            assert!(out.chars().all(|c| !is_combining_mark(c)), "{out:?}");
            assert!(out.chars().count() <= input.nfd().count());
        }
    }

    #[test]
    fn test_normalize_value_recurses_keys_and_strings() {
        let normalized = normalize_value(json!({
            "Mês": ["Janeiro", "Março"],
            "Salão Pedidos": [12, 30],
        }));
        assert_eq!(
            normalized,
            json!({
                "Mes": ["Janeiro", "Marco"],
                "Salao Pedidos": [12, 30],
            })
        );
    }
}

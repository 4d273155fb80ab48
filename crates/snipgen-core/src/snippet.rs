use crate::error::{Result, SnipgenError};
use crate::lines::split_lines;
use crate::prefix::{default_strategy, PrefixStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Indentation used for every JSON document this crate writes.
pub const JSON_INDENT: &[u8] = b"    ";

/// One editor snippet, as typed in by its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRecord {
    name: String,
    text: String,
    language: String,
    prefix: String,
    description: String,
}

/// The object stored under a snippet's name in a snippet file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnippetBody {
    pub prefix: String,
    pub description: String,
    pub body: Vec<String>,
}

impl SnippetRecord {
    /// Build a record, deriving a missing prefix with the default strategy.
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        language: impl Into<String>,
        prefix: Option<String>,
        description: Option<String>,
    ) -> Result<Self> {
        Self::with_strategy(
            name,
            text,
            language,
            prefix,
            description,
            default_strategy(),
        )
    }

    /// Build a record, deriving a missing or empty prefix with `strategy`.
    pub fn with_strategy(
        name: impl Into<String>,
        text: impl Into<String>,
        language: impl Into<String>,
        prefix: Option<String>,
        description: Option<String>,
        strategy: &dyn PrefixStrategy,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SnipgenError::InvalidArgument(
                "snippet name must not be empty".to_string(),
            ));
        }

        let prefix = match prefix {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => {
                let derived = strategy.derive(&name);
                log::debug!("Derived prefix '{}' from snippet name '{}'", derived, name);
                derived
            }
        };

        Ok(Self {
            name,
            text: text.into(),
            language: language.into(),
            prefix,
            description: description.unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The body text split into lines, computed on every call.
    pub fn text_lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }

    /// The `{prefix, description, body}` object this record serializes to.
    pub fn body(&self) -> SnippetBody {
        SnippetBody {
            prefix: self.prefix.clone(),
            description: self.description.clone(),
            body: self.text_lines().into_iter().map(str::to_string).collect(),
        }
    }

    /// Serialize as `{"<name>": {"prefix", "description", "body"}}`.
    pub fn to_json(&self) -> Result<String> {
        let mut document = BTreeMap::new();
        document.insert(self.name.as_str(), self.body());
        to_pretty_json(&document)
    }
}

/// Pretty-print `value` with four-space indentation.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::Initials;
    use serde_json::{json, Value};

    fn record(text: &str) -> SnippetRecord {
        SnippetRecord::new(
            "foo",
            text,
            "x",
            Some("f".to_string()),
            Some("d".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn to_json_parses_back_to_the_documented_shape() {
        let parsed: Value = serde_json::from_str(&record("a\nb").to_json().unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({"foo": {"prefix": "f", "description": "d", "body": ["a", "b"]}})
        );
    }

    #[test]
    fn to_json_keeps_field_order_and_four_space_indent() {
        let expected = "{\n    \"foo\": {\n        \"prefix\": \"f\",\n        \"description\": \"d\",\n        \"body\": [\n            \"a\",\n            \"b\"\n        ]\n    }\n}";
        assert_eq!(record("a\nb").to_json().unwrap(), expected);
    }

    #[test]
    fn to_json_is_deterministic() {
        let snippet = record("x = \"1\"\n\ny");
        assert_eq!(snippet.to_json().unwrap(), snippet.to_json().unwrap());
    }

    #[test]
    fn missing_description_serializes_as_empty_string() {
        let snippet = SnippetRecord::new("foo", "a", "x", Some("f".into()), None).unwrap();
        let parsed: Value = serde_json::from_str(&snippet.to_json().unwrap()).unwrap();
        assert_eq!(parsed["foo"]["description"], json!(""));
    }

    #[test]
    fn missing_or_empty_prefix_is_derived_from_the_name() {
        let snippet = SnippetRecord::new("Function Header", "a", "sqf", None, None).unwrap();
        assert_eq!(snippet.prefix(), "function-header");

        let snippet =
            SnippetRecord::new("Function Header", "a", "sqf", Some(String::new()), None).unwrap();
        assert_eq!(snippet.prefix(), "function-header");
    }

    #[test]
    fn prefix_strategy_can_be_swapped() {
        let snippet =
            SnippetRecord::with_strategy("Function Header", "a", "sqf", None, None, &Initials)
                .unwrap();
        assert_eq!(snippet.prefix(), "fh");
    }

    #[test]
    fn given_prefix_wins_over_the_strategy() {
        let snippet =
            SnippetRecord::with_strategy("Header", "a", "sqf", Some("hdr".into()), None, &Initials)
                .unwrap();
        assert_eq!(snippet.prefix(), "hdr");
    }

    #[test]
    fn empty_name_is_rejected() {
        for name in ["", "   "] {
            assert!(matches!(
                SnippetRecord::new(name, "a", "x", None, None),
                Err(SnipgenError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn text_lines_counts_line_segments() {
        assert_eq!(record("no breaks").text_lines(), vec!["no breaks"]);
        assert_eq!(record("a\r\nb\n\nc").text_lines(), vec!["a", "b", "", "c"]);
        assert_eq!(record("a\n\n").text_lines().len(), 2);
    }

    #[test]
    fn body_keeps_quotes_and_backslashes_as_json_strings() {
        let snippet = record(r#"hint "Hello\World""#);
        let parsed: Value = serde_json::from_str(&snippet.to_json().unwrap()).unwrap();
        assert_eq!(parsed["foo"]["body"][0], json!(r#"hint "Hello\World""#));
    }

    #[test]
    fn to_json_writes_non_ascii_text_unescaped() {
        let snippet = SnippetRecord::new("grüß", "日本\n€", "x", None, Some("ü".into())).unwrap();
        let json = snippet.to_json().unwrap();
        assert!(json.contains("\"grüß\""));
        assert!(json.contains("\"日本\""));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["grüß"]["body"], json!(["日本", "€"]));
        assert_eq!(parsed["grüß"]["description"], json!("ü"));
    }
}

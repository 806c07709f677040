use serde::{Deserialize, Serialize};

/// Top-level semifix configuration.
///
/// All fields are optional in config files; anything missing takes its
/// default. The three booleans gate the triggers, `signatures` appends
/// extra target signatures after the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutofixConfig {
    /// Run the decider on every diagnostics-changed event
    pub fix_on_error: bool,
    /// Run the decider once before each save, folding edits into the save
    pub fix_on_save: bool,
    /// On the live trigger, skip insertions on the cursor's line or the
    /// line above it
    pub avoid_cursor: bool,
    /// Extra target signatures, appended after the built-in table
    pub signatures: Vec<SignatureConfig>,
}

impl Default for AutofixConfig {
    fn default() -> Self {
        Self {
            fix_on_error: true,
            fix_on_save: false,
            avoid_cursor: true,
            signatures: Vec::new(),
        }
    }
}

impl AutofixConfig {
    /// Returns `true` if at least one trigger flag is enabled.
    #[must_use]
    pub const fn any_trigger_enabled(&self) -> bool {
        self.fix_on_error || self.fix_on_save
    }
}

/// One user-supplied target signature.
///
/// Mirrors the built-in table entries: a diagnostic matches when its
/// source equals `source` exactly and its message starts with
/// `message_prefix` (case-sensitive). `terminator` is the character
/// inserted at the diagnostic's range end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureConfig {
    /// Language id the signature applies to (e.g. `java`)
    pub language: String,
    /// Exact diagnostic source (e.g. `Java`)
    pub source: String,
    /// Fixed message prefix, ending right before the variable suffix
    pub message_prefix: String,
    /// Character to insert (defaults to `;`)
    #[serde(default = "default_terminator")]
    pub terminator: char,
}

const fn default_terminator() -> char {
    ';'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AutofixConfig::default();
        assert!(config.fix_on_error);
        assert!(!config.fix_on_save);
        assert!(config.avoid_cursor);
        assert!(config.signatures.is_empty());
        assert!(config.any_trigger_enabled());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: AutofixConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, AutofixConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r"
fixOnSave: true
";
        let config: AutofixConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.fix_on_error);
        assert!(config.fix_on_save);
        assert!(config.avoid_cursor);
    }

    #[test]
    fn test_yaml_with_signature() {
        let yaml = r#"
fixOnError: false
signatures:
  - language: kotlin
    source: Kotlin
    messagePrefix: "Expecting ';'"
"#;
        let config: AutofixConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(!config.fix_on_error);
        assert_eq!(config.signatures.len(), 1);

        let sig = &config.signatures[0];
        assert_eq!(sig.language, "kotlin");
        assert_eq!(sig.source, "Kotlin");
        assert_eq!(sig.message_prefix, "Expecting ';'");
        assert_eq!(sig.terminator, ';'); // defaulted
    }

    #[test]
    fn test_yaml_with_explicit_terminator() {
        let yaml = r#"
signatures:
  - language: fish
    source: fish-lsp
    messagePrefix: "Missing end"
    terminator: "d"
"#;
        let config: AutofixConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.signatures[0].terminator, 'd');
    }

    #[test]
    fn test_json_round_trip() {
        let config = AutofixConfig {
            fix_on_save: true,
            signatures: vec![SignatureConfig {
                language: "java".to_string(),
                source: "Java".to_string(),
                message_prefix: "Syntax error, insert \";\" to complete ".to_string(),
                terminator: ';',
            }],
            ..AutofixConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("fixOnSave"));
        assert!(json.contains("messagePrefix"));

        let back: AutofixConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_all_triggers_off() {
        let yaml = r"
fixOnError: false
fixOnSave: false
";
        let config: AutofixConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(!config.any_trigger_enabled());
    }
}

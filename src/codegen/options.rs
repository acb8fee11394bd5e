//! Generation options

/// Options controlling IDL generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GenerateOptions {
    /// Emit `"""` documentation blocks
    pub idl_doc: bool,
    /// Number of spaces per indentation level (ignored when using tabs)
    pub indent_spaces: usize,
    /// Indent with tabs instead of spaces
    pub use_tab: bool,
    /// Trace generation steps through `tracing`; never changes the output
    pub debug: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            idl_doc: true,
            indent_spaces: 4,
            use_tab: false,
            debug: false,
        }
    }
}

impl GenerateOptions {
    /// Indentation string for one level
    pub fn indent_unit(&self) -> String {
        if self.use_tab {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_spaces)
        }
    }

    /// Enable or disable documentation blocks.
    pub fn with_idl_doc(mut self, idl_doc: bool) -> Self {
        self.idl_doc = idl_doc;
        self
    }

    /// Use tabs for indentation.
    pub fn with_tabs(mut self) -> Self {
        self.use_tab = true;
        self
    }

    /// Use the given number of spaces per indentation level.
    pub fn with_indent_spaces(mut self, spaces: usize) -> Self {
        self.use_tab = false;
        self.indent_spaces = spaces;
        self
    }

    /// Enable debug tracing.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_is_four_spaces() {
        let options = GenerateOptions::default();
        assert_eq!(options.indent_unit(), "    ");
    }

    #[test]
    fn test_tab_indent_ignores_spaces() {
        let options = GenerateOptions::default().with_tabs();
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn test_custom_spaces() {
        let options = GenerateOptions::default().with_indent_spaces(2);
        assert_eq!(options.indent_unit(), "  ");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_preference_json() {
        let options: GenerateOptions =
            serde_json::from_str(r#"{"idlDoc": false, "indentSpaces": 2}"#).unwrap();
        assert!(!options.idl_doc);
        assert_eq!(options.indent_spaces, 2);
        assert!(!options.use_tab);
        assert!(!options.debug);
    }
}

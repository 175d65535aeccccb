//! Generator options.

use grid_core::{CodeFormat, PersistedState};
use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, CodegenResult};

/// Knobs shared by every generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Give every item a visible border.
    pub with_styled_borders: bool,
    /// Prefer utility classes where the technology supports switching.
    pub with_tailwind: bool,
    /// Component snippet or standalone document.
    pub format: CodeFormat,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            with_styled_borders: true,
            with_tailwind: false,
            format: CodeFormat::Embedded,
        }
    }
}

impl GeneratorOptions {
    /// Set whether items get borders.
    #[must_use]
    pub fn with_borders(mut self, enabled: bool) -> Self {
        self.with_styled_borders = enabled;
        self
    }

    /// Set the utility class preference.
    #[must_use]
    pub fn with_utilities(mut self, enabled: bool) -> Self {
        self.with_tailwind = enabled;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: CodeFormat) -> Self {
        self.format = format;
        self
    }
}

impl From<&PersistedState> for GeneratorOptions {
    fn from(state: &PersistedState) -> Self {
        Self {
            with_styled_borders: state.with_styled_borders,
            with_tailwind: state.with_tailwind,
            format: state.code_format,
        }
    }
}

/// Parse a format name (`embedded`, `standalone`, `jsx` or `html`).
///
/// # Errors
///
/// Returns [`CodegenError::UnknownFormat`] for any other name.
pub fn parse_format(name: &str) -> CodegenResult<CodeFormat> {
    name.parse()
        .map_err(|_| CodegenError::UnknownFormat(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert!(options.with_styled_borders);
        assert!(!options.with_tailwind);
        assert_eq!(options.format, CodeFormat::Embedded);
    }

    #[test]
    fn test_from_persisted_state() {
        let persisted = PersistedState {
            code_format: CodeFormat::Standalone,
            with_styled_borders: false,
            with_tailwind: true,
            ..PersistedState::default()
        };
        let options = GeneratorOptions::from(&persisted);
        assert_eq!(
            options,
            GeneratorOptions::default()
                .with_borders(false)
                .with_utilities(true)
                .with_format(CodeFormat::Standalone)
        );
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("html"), Ok(CodeFormat::Standalone));
        assert_eq!(
            parse_format("pdf"),
            Err(CodegenError::UnknownFormat("pdf".into()))
        );
    }
}

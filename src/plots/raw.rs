//! Verbatim TeX inside an axis environment.

use std::fmt;

/// Raw TeX emitted unchanged, e.g. `\draw` commands or `\legend{...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTex {
    code: String,
}

impl RawTex {
    /// Wrap TeX code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The wrapped code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Render the code verbatim.
    #[must_use]
    pub fn render(&self) -> String {
        self.code.clone()
    }
}

impl fmt::Display for RawTex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

//! A complete `standalone` LaTeX document.

use crate::config::DocumentConfig;
use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::node::Node;
use crate::options::{Options, Packages};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

/// A `standalone` document with one picture per figure.
///
/// ```
/// use pgfplots::prelude::*;
///
/// let mut doc = Document::new();
/// let mut fig = Figure::new();
/// fig.add_axis(Axis::new());
/// doc.add_figure(fig);
///
/// let tex = doc.render();
/// assert!(tex.starts_with("\\documentclass[tikz]{standalone}"));
/// assert!(tex.ends_with("\\end{document}"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    class_options: Options,
    packages: Packages,
    compat: String,
    figures: Vec<Figure>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document from [`DocumentConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    /// Create a document from explicit defaults.
    #[must_use]
    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            class_options: config.class_options,
            packages: config.packages,
            compat: config.compat,
            figures: Vec::new(),
        }
    }

    /// Create a document whose class options and packages are layered on top
    /// of the defaults. Caller entries win.
    #[must_use]
    pub fn with_options(class_options: &Options, packages: &Packages) -> Self {
        let mut doc = Self::new();
        doc.class_options.merge(class_options);
        doc.packages.merge(packages);
        doc
    }

    /// Append a figure.
    pub fn add_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Append a node, which must be a figure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedNode`] for any other node; the document is
    /// left unchanged.
    pub fn push(&mut self, node: impl Into<Node>) -> Result<()> {
        match node.into() {
            Node::Figure(figure) => {
                self.figures.push(figure);
                Ok(())
            }
            other => Err(Error::UnexpectedNode {
                container: "Document",
                expected: "Figure",
                found: other.kind(),
            }),
        }
    }

    /// Figures in insertion order.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Mutable access to the figures.
    pub fn figures_mut(&mut self) -> &mut [Figure] {
        &mut self.figures
    }

    /// Options of `\documentclass`.
    #[must_use]
    pub fn class_options(&self) -> &Options {
        &self.class_options
    }

    /// Mutable access to the class options.
    pub fn class_options_mut(&mut self) -> &mut Options {
        &mut self.class_options
    }

    /// Packages loaded in the preamble.
    #[must_use]
    pub fn packages(&self) -> &Packages {
        &self.packages
    }

    /// Mutable access to the package table.
    pub fn packages_mut(&mut self) -> &mut Packages {
        &mut self.packages
    }

    /// The `compat` level.
    #[must_use]
    pub fn compat(&self) -> &str {
        &self.compat
    }

    /// Render the full document.
    #[must_use]
    pub fn render(&self) -> String {
        trace!(figures = self.figures.len(), "rendering document");
        self.to_string()
    }

    /// Write the rendered document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let tex = self.render();
        let mut file = File::create(path.as_ref())?;
        file.write_all(tex.as_bytes())?;
        debug!(path = %path.as_ref().display(), bytes = tex.len(), "wrote document");
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\\documentclass[{}]{{standalone}}", self.class_options)?;
        writeln!(f)?;
        writeln!(f, "{}", self.packages)?;
        writeln!(f, "\\pgfplotsset{{compat={}}}", self.compat)?;
        writeln!(f)?;
        writeln!(f, "\\begin{{document}}")?;
        for (i, figure) in self.figures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{figure}")?;
        }
        f.write_str("\n\\end{document}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;

    #[test]
    fn test_empty_document() {
        let expected = "\\documentclass[tikz]{standalone}\n\
                        \n\
                        \\usepackage{pgfplots}\n\
                        \\usepackage{pdfcomment}\n\
                        \\pgfplotsset{compat=1.10}\n\
                        \n\
                        \\begin{document}\n\
                        \n\
                        \\end{document}";
        assert_eq!(Document::new().render(), expected);
    }

    #[test]
    fn test_document_figures_separated_by_blank_line() {
        let mut doc = Document::new();
        doc.add_figure(Figure::new());
        doc.add_figure(Figure::new());
        assert!(doc.render().contains(
            "\\end{tikzpicture}\n\n\\begin{tikzpicture}[]"
        ));
        assert_eq!(doc.figures().len(), 2);
    }

    #[test]
    fn test_document_caller_options_override_defaults() {
        let doc = Document::with_options(
            &Options::new().with("tikz", "false").with("border", "2pt"),
            &Packages::new().with_version("pgfplots", "2020/01/01").with("amsmath"),
        );
        assert_eq!(doc.class_options().render(), "tikz={false},border={2pt}");
        assert_eq!(
            doc.packages().render(),
            "\\usepackage{pgfplots}[2020/01/01]\n\
             \\usepackage{pdfcomment}\n\
             \\usepackage{amsmath}"
        );
    }

    #[test]
    fn test_document_with_config() {
        let config = DocumentConfig {
            class_options: Options::new(),
            packages: Packages::new(),
            compat: "1.18".to_string(),
        };
        let doc = Document::with_config(config);
        assert!(doc
            .render()
            .starts_with("\\documentclass[]{standalone}\n\n\n\\pgfplotsset{compat=1.18}"));
        assert_eq!(doc.compat(), "1.18");
    }

    #[test]
    fn test_document_rejects_axis() {
        let mut doc = Document::new();
        let err = doc.push(Axis::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedNode {
                container: "Document",
                found: "Axis",
                ..
            }
        ));
        assert!(doc.figures().is_empty());
        doc.push(Figure::new()).unwrap();
        assert_eq!(doc.figures().len(), 1);
    }

    #[test]
    fn test_document_render_is_repeatable() {
        let mut doc = Document::new();
        doc.add_figure(Figure::new().with_note("n"));
        assert_eq!(doc.render(), doc.render());
    }

    #[test]
    fn test_document_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.tex");

        let doc = Document::new();
        doc.write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, doc.render());
    }

    #[test]
    fn test_document_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("doc.tex");
        let err = Document::new().write_to_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! The TikZ `tikzpicture` environment.

use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::escape::escape_note;
use crate::node::Node;
use crate::options::Options;
use std::fmt;

/// Subject line of the hidden PDF comment carrying a figure note.
pub const DEFAULT_NOTE_SUBJECT: &str = "Me";

/// A `tikzpicture` holding one or more axes, with an optional hidden note.
///
/// The note is emitted as an invisible `\pdfcomment` that PDF viewers show
/// as an annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    options: Options,
    note: Option<String>,
    note_subject: String,
    axes: Vec<Axis>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Create a figure without options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::new())
    }

    /// Create a figure with the given `tikzpicture` options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            note: None,
            note_subject: DEFAULT_NOTE_SUBJECT.to_string(),
            axes: Vec::new(),
        }
    }

    /// Attach a hidden note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Subject of the note annotation.
    #[must_use]
    pub fn note_subject(mut self, subject: impl Into<String>) -> Self {
        self.note_subject = subject.into();
        self
    }

    /// Set a single `key={value}` option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Set a single flag option.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.options.insert_flag(key);
        self
    }

    /// Append an axis.
    pub fn add_axis(&mut self, axis: Axis) {
        self.axes.push(axis);
    }

    /// Append a node, which must be an axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedNode`] for any other node; the figure is
    /// left unchanged.
    pub fn push(&mut self, node: impl Into<Node>) -> Result<()> {
        match node.into() {
            Node::Axis(axis) => {
                self.axes.push(axis);
                Ok(())
            }
            other => Err(Error::UnexpectedNode {
                container: "Figure",
                expected: "Axis",
                found: other.kind(),
            }),
        }
    }

    /// Axes in insertion order.
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Mutable access to the axes, e.g. to add plots after insertion.
    pub fn axes_mut(&mut self) -> &mut [Axis] {
        &mut self.axes
    }

    /// The hidden note, unescaped.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// The `tikzpicture` options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable access to the `tikzpicture` options.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Render the environment.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\\begin{{tikzpicture}}[{}]", self.options)?;
        if let Some(note) = &self.note {
            writeln!(
                f,
                "\\pdfcomment[hoffset=-1000pt,subject={}]{{{}}}",
                self.note_subject,
                escape_note(note)
            )?;
        }
        for (i, axis) in self.axes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{axis}")?;
        }
        f.write_str("\n\\end{tikzpicture}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::RawTex;

    #[test]
    fn test_empty_figure() {
        assert_eq!(
            Figure::new().render(),
            "\\begin{tikzpicture}[]\n\n\\end{tikzpicture}"
        );
    }

    #[test]
    fn test_figure_note_is_escaped() {
        let fig = Figure::new().with_note("50% done_now");
        assert_eq!(
            fig.render(),
            "\\begin{tikzpicture}[]\n\
             \\pdfcomment[hoffset=-1000pt,subject=Me]{50\\%~done\\_now}\n\
             \n\\end{tikzpicture}"
        );
        assert_eq!(fig.note(), Some("50% done_now"));
    }

    #[test]
    fn test_figure_note_subject() {
        let fig = Figure::new().with_note("n").note_subject("Reviewer");
        assert!(fig.render().contains("subject=Reviewer]{n}"));
    }

    #[test]
    fn test_figure_with_axes() {
        let mut fig = Figure::new().option("scale", 0.5);
        fig.add_axis(Axis::new());
        fig.add_axis(Axis::new().flag("grid"));
        assert_eq!(
            fig.render(),
            "\\begin{tikzpicture}[scale={0.5}]\n\
             \n\\begin{axis}[]\n\n\\end{axis}\n\
             \n\\begin{axis}[grid]\n\n\\end{axis}\n\
             \\end{tikzpicture}"
        );
    }

    #[test]
    fn test_figure_rejects_plot() {
        let mut fig = Figure::new();
        let err = fig.push(RawTex::new("x")).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedNode {
                container: "Figure",
                expected: "Axis",
                found: "Plot"
            }
        ));
        assert!(fig.axes().is_empty());
        fig.push(Axis::new()).unwrap();
        assert_eq!(fig.axes().len(), 1);
    }

    #[test]
    fn test_figure_axes_mut() {
        let mut fig = Figure::new();
        fig.add_axis(Axis::new());
        fig.axes_mut()[0].add_plot(RawTex::new("late"));
        assert_eq!(fig.axes()[0].plots().len(), 1);
    }
}

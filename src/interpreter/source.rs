use std::collections::VecDeque;

/// Supplies additional lines of input while an expression is incomplete.
///
/// The parser calls [`LineSource::read_line`] once for every token it needs
/// but cannot find because the input has ended. The prompt is the text of the
/// current expression consumed so far. The call blocks for as long as the
/// source needs; returning `None` means no more input will ever arrive, and the
/// evaluation ends with [`Outcome::NeedMoreInput`](crate::Outcome).
pub trait LineSource {
    /// Returns the next line, or `None` if the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// A source that never has more input.
///
/// Evaluating through `NoInput` turns every continuation request into an
/// [`Outcome::NeedMoreInput`](crate::Outcome) result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl LineSource for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        None
    }
}

/// A source backed by an iterator of lines, such as the rest of a file or
/// standard input. It is exhausted when the iterator is.
#[derive(Debug, Clone)]
pub struct LinesInput<I> {
    lines: I,
}

impl<I> LinesInput<I> {
    /// Wraps an iterator of lines.
    pub const fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I, S> LineSource for LinesInput<I>
    where I: Iterator<Item = S>,
          S: Into<String>
{
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.lines.next().map(Into::into)
    }
}

/// A source that hands out a fixed list of lines and records every prompt it
/// was asked with.
///
/// ## Example
/// ```
/// use bracalc::{LineSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["4"]);
/// assert_eq!(input.read_line("3+").as_deref(), Some("4"));
/// assert_eq!(input.read_line("3+4+"), None);
/// assert_eq!(input.prompts(), ["3+", "3+4+"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines:   VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates a source that returns `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { lines:   lines.into_iter().map(Into::into).collect(),
               prompts: Vec::new(), }
    }

    /// Every prompt passed to [`LineSource::read_line`], in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of lines not handed out yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front()
    }
}

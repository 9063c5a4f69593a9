use crate::language::{CodeLanguage, normalize_language};
use crate::parsing::lines::LineRef;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, Paragraph},
    types::{MdBlock, MdBlockKind},
};

/// Parser state carried from one line to the next.
///
/// Every transition consumes the current state and returns the next one,
/// pushing any blocks it completes onto the output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState<'a> {
    #[default]
    Idle,
    /// A paragraph, list item or quote that may still change.
    Accumulating { kind: MdBlockKind, buffer: String },
    /// Inside a code fence; lines are collected verbatim.
    InFence {
        language: CodeLanguage,
        lines: Vec<&'a str>,
    },
}

impl<'a> ParserState<'a> {
    /// Advances the state by one input line.
    pub fn advance(
        self,
        line: LineRef<'a>,
        classifier: &MarkdownLineClassifier,
        out: &mut Vec<MdBlock>,
    ) -> Self {
        match self {
            Self::InFence {
                language,
                mut lines,
            } => {
                if CodeFence::closes(line.text) {
                    log::debug!(
                        "code fence closed at line {}: {language}, {} lines",
                        line.number,
                        lines.len()
                    );
                    out.push(MdBlock::code(lines.join("\n"), language));
                    Self::Idle
                } else {
                    lines.push(line.text);
                    Self::InFence { language, lines }
                }
            }
            state => {
                let class = classifier.classify(line.text);
                log::trace!("line {}: {class:?}", line.number);
                state.apply(class, line.number, out)
            }
        }
    }

    /// Flushes whatever is still open at end of input.
    pub fn finish(self, out: &mut Vec<MdBlock>) {
        if let Self::InFence { language, lines } = &self
            && !lines.is_empty()
        {
            log::debug!(
                "flushing unterminated code fence: {language}, {} lines",
                lines.len()
            );
        }
        self.flush(out);
    }

    fn apply(self, class: LineClass<'a>, number: usize, out: &mut Vec<MdBlock>) -> Self {
        match class {
            LineClass::FenceOpen { tag } => {
                // Pending text ends here so blocks stay in line order.
                self.flush(out);
                let language = normalize_language(tag);
                log::debug!(
                    "code fence opened at line {number}: tag {tag:?} normalized to {language}"
                );
                Self::InFence {
                    language,
                    lines: vec![],
                }
            }
            LineClass::Blank => {
                self.flush(out);
                Self::Idle
            }
            LineClass::Heading { kind, text } => {
                self.flush(out);
                out.push(MdBlock::new(kind, text));
                Self::Idle
            }
            LineClass::ListItem { kind, text } => {
                self.flush(out);
                Self::Accumulating {
                    kind,
                    buffer: text.to_string(),
                }
            }
            LineClass::Quote { text } => self.extend_or_open(MdBlockKind::Blockquote, text, out),
            LineClass::Divider => {
                self.flush(out);
                out.push(MdBlock::divider());
                Self::Idle
            }
            LineClass::Text { text } => self.extend_or_open(MdBlockKind::Paragraph, text, out),
        }
    }

    /// Appends `text` to a pending block of the same kind, or flushes and
    /// starts a new one.
    fn extend_or_open(self, kind: MdBlockKind, text: &str, out: &mut Vec<MdBlock>) -> Self {
        match self {
            Self::Accumulating {
                kind: pending,
                mut buffer,
            } if pending == kind => {
                buffer.push(Paragraph::LINE_SEPARATOR);
                buffer.push_str(text);
                Self::Accumulating { kind, buffer }
            }
            other => {
                other.flush(out);
                Self::Accumulating {
                    kind,
                    buffer: text.to_string(),
                }
            }
        }
    }

    fn flush(self, out: &mut Vec<MdBlock>) {
        match self {
            Self::Idle => {}
            Self::Accumulating { kind, buffer } => out.push(MdBlock::new(kind, buffer)),
            Self::InFence { language, lines } => {
                // An opened fence with nothing in it leaves no trace.
                if !lines.is_empty() {
                    out.push(MdBlock::code(lines.join("\n"), language));
                }
            }
        }
    }
}

/// Folds classified lines into blocks.
pub struct BlockBuilder<'a> {
    classifier: MarkdownLineClassifier,
    state: ParserState<'a>,
    out: Vec<MdBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            state: ParserState::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineRef<'a>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.advance(line, &self.classifier, &mut self.out);
    }

    pub fn state(&self) -> &ParserState<'a> {
        &self.state
    }

    pub fn finish(mut self) -> Vec<MdBlock> {
        // EOF flush
        self.state.finish(&mut self.out);
        self.out
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

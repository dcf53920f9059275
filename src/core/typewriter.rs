use super::constants::{TYPE_CHAR_DELAY, TYPE_LINE_PAUSE};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeStep {
    StartLine(usize),
    Append { line: usize, ch: char },
}

/// Writes lines out one character at a time on a virtual clock.
#[derive(Clone, Debug)]
pub struct Typewriter {
    lines: Vec<String>,
    line: usize,
    // Byte offset of the next character within the current line.
    cursor: usize,
    line_started: bool,
    clock: Duration,
    due: Duration,
}

impl Typewriter {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            line: 0,
            cursor: 0,
            line_started: false,
            clock: Duration::ZERO,
            due: Duration::ZERO,
        }
    }

    pub fn is_done(&self) -> bool {
        self.line >= self.lines.len()
    }

    pub fn advance(&mut self, dt: Duration, out: &mut Vec<TypeStep>) {
        self.clock += dt;
        while !self.is_done() && self.clock >= self.due {
            if !self.line_started {
                self.line_started = true;
                out.push(TypeStep::StartLine(self.line));
            }
            let text = &self.lines[self.line];
            match text[self.cursor..].chars().next() {
                Some(ch) => {
                    out.push(TypeStep::Append {
                        line: self.line,
                        ch,
                    });
                    self.cursor += ch.len_utf8();
                    self.due += TYPE_CHAR_DELAY;
                }
                None => {
                    self.line += 1;
                    self.cursor = 0;
                    self.line_started = false;
                    self.due += TYPE_LINE_PAUSE;
                }
            }
        }
    }
}

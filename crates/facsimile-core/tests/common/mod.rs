//! Helpers for building annotated trees against a source text
#![allow(dead_code)]

use facsimile_core::annotations::{Anchor, AnnPayload, Annotation, Anns, ParensAnn, Separator};
use facsimile_core::position::{Pos, Span};
use facsimile_core::syntax::{Expr, Literal, Located, Name, NodeKind, Pat, Type};

/// Source text that answers "where is this token" questions
pub struct Source {
    lines: Vec<String>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

impl Source {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn line(&self, line: u32) -> &str {
        &self.lines[line as usize - 1]
    }

    /// Span of the `occurrence`-th match of `needle` on `line` (1-based).
    ///
    /// Identifier-like needles only match whole words.
    pub fn nth(&self, line: u32, needle: &str, occurrence: usize) -> Span {
        let text = &self.lines[line as usize - 1];
        let chars: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = needle.chars().collect();
        let wordy_start = pattern.first().is_some_and(|c| is_word_char(*c));
        let wordy_end = pattern.last().is_some_and(|c| is_word_char(*c));

        let mut seen = 0;
        for start in 0..=chars.len().saturating_sub(pattern.len()) {
            let end = start + pattern.len();
            if end > chars.len() {
                break;
            }
            if chars[start..end] != pattern[..] {
                continue;
            }
            if wordy_start && start > 0 && is_word_char(chars[start - 1]) {
                continue;
            }
            if wordy_end && end < chars.len() && is_word_char(chars[end]) {
                continue;
            }
            if seen == occurrence {
                let column = start as u32 + 1;
                return Span::from_coords(line, column, line, column + pattern.len() as u32);
            }
            seen += 1;
        }
        panic!("`{needle}` #{occurrence} not found on line {line}: {text:?}");
    }

    pub fn span(&self, line: u32, needle: &str) -> Span {
        self.nth(line, needle, 0)
    }

    pub fn pos(&self, line: u32, needle: &str) -> Pos {
        self.span(line, needle).start
    }

    pub fn anchor(&self, line: u32, needle: &str) -> Anchor {
        Anchor::Span(self.span(line, needle))
    }

    pub fn nth_anchor(&self, line: u32, needle: &str, occurrence: usize) -> Anchor {
        Anchor::Span(self.nth(line, needle, occurrence))
    }

    /// Span from the start of one token to the end of another
    pub fn range(from: Span, to: Span) -> Span {
        Span::new(from.start, to.end)
    }

    /// Position just past the last character
    pub fn eof(&self) -> Pos {
        let last = self.lines.len() as u32;
        let column = self.lines.last().map_or(0, |l| l.chars().count()) as u32 + 1;
        Pos::new(last, column)
    }
}

pub fn name(span: Span, text: &str) -> Located<Name> {
    Located::new(span, Name::new(text))
}

pub fn var(span: Span, text: &str) -> Located<Expr> {
    Located::new(span, Expr::Var(name(span, text)))
}

pub fn lit(span: Span, text: &str) -> Located<Expr> {
    Located::new(span, Expr::Lit(Literal::new(text)))
}

pub fn pvar(span: Span, text: &str) -> Located<Pat> {
    Located::new(span, Pat::Var(name(span, text)))
}

pub fn tvar(span: Span, text: &str) -> Located<Type> {
    Located::new(span, Type::Var(name(span, text)))
}

pub fn app(fun: Located<Expr>, arg: Located<Expr>) -> Located<Expr> {
    let span = Source::range(fun.span, arg.span);
    Located::new(span, Expr::App(Box::new(fun), Box::new(arg)))
}

pub fn op_app(lhs: Located<Expr>, op: Located<Name>, rhs: Located<Expr>) -> Located<Expr> {
    let span = Source::range(lhs.span, rhs.span);
    Located::new(
        span,
        Expr::OpApp {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        },
    )
}

/// Parenthesised expression, recording both parens in `anns`
pub fn paren(anns: &mut Anns, open: Span, inner: Located<Expr>, close: Span) -> Located<Expr> {
    let span = Source::range(open, close);
    anns.insert(
        span,
        Annotation::new(
            NodeKind::Paren,
            AnnPayload::Parens(ParensAnn {
                open: Anchor::Span(open),
                close: Anchor::Span(close),
            }),
        ),
    );
    Located::new(span, Expr::Paren(Box::new(inner)))
}

/// Record a separator printed after the node of `kind` at `span`
pub fn trailing(anns: &mut Anns, span: Span, kind: NodeKind, separator: Separator, at: Span) {
    anns.insert(
        span,
        Annotation::empty(kind).with_trailing(separator, Anchor::Span(at)),
    );
}

//! Exact printing engine
//!
//! A [`Printer`] owns everything one printing run needs: the cursor, the
//! layout offset, the pending comment queue, a private copy of the
//! annotation table and the output buffer. Renderers drive it through the
//! primitives below; all text is emitted in one forward pass.
//!
//! # Example
//!
//! ```rust,ignore
//! use facsimile_core::printer::Printer;
//!
//! let mut printer = Printer::new(anns, comments, PrintOptions::default());
//! printer.visit(&module)?;
//! let source = printer.finish()?;
//! ```

mod combinators;

pub use combinators::{Action, effective_positions, merge_by_position};

use crate::annotations::{Anchor, Annotation, Anns};
use crate::comments::{Comment, CommentStore, FloatedComment};
use crate::config::{PrintOptions, UnsupportedPolicy};
use crate::error::PrintError;
use crate::exact::ExactPrint;
use crate::position::{self, DeltaPos, Pos, Span};
use crate::result::PrintResult;
use crate::syntax::{Located, NodeKind};
use tracing::{debug, trace, warn};

/// Stateful core of one printing run
pub struct Printer {
    cursor: Pos,
    offset: DeltaPos,
    /// Lines added by synthetic layout items; source line + shift = output line
    line_shift: u32,
    comments: CommentStore,
    anns: Anns,
    output: String,
    options: PrintOptions,
}

impl Printer {
    pub fn new(anns: Anns, comments: Vec<Comment>, options: PrintOptions) -> Self {
        Self {
            cursor: Pos::START,
            offset: DeltaPos::ZERO,
            line_shift: 0,
            comments: CommentStore::new(comments),
            anns,
            output: String::with_capacity(4096),
            options,
        }
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Pos) {
        self.cursor = cursor;
    }

    /// Layout offset new-line deltas are measured from
    pub fn offset(&self) -> DeltaPos {
        self.offset
    }

    pub fn set_offset(&mut self, offset: DeltaPos) {
        self.offset = offset;
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Text written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of comments not yet written
    pub fn pending_comments(&self) -> usize {
        self.comments.len()
    }

    /// Append `text` verbatim; the cursor advances by its length in chars.
    ///
    /// Line breaks inside `text` are not tracked, callers that write
    /// multi-line text set the cursor themselves.
    pub fn write_literal(&mut self, text: &str) {
        trace!(cursor = %self.cursor, text, "write");
        self.output.push_str(text);
        self.cursor.column += text.chars().count() as u32;
    }

    /// Append `text`, following any line breaks it contains
    pub fn write_text(&mut self, text: &str) {
        trace!(cursor = %self.cursor, text, "write");
        self.output.push_str(text);
        self.cursor = self.cursor.advance_over(text);
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.cursor = Pos::new(self.cursor.line + 1, 1);
    }

    /// Emit the newlines and spaces that bring the cursor to `target`
    pub fn pad_to(&mut self, target: Pos) -> PrintResult<()> {
        if target == self.cursor {
            return Ok(());
        }

        match position::advance_to(self.cursor, target) {
            Ok(padding) => {
                self.output.push_str(&padding);
                self.cursor = target;
                Ok(())
            }
            Err(err) if !self.options.verify_monotonic => {
                warn!("{err}; writing at the cursor instead");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Flush comments that start before the source position `target`, then
    /// pad to where it lands in the output
    pub fn move_to(&mut self, target: Pos) -> PrintResult<()> {
        self.flush_comments_before(target)?;
        self.pad_to(self.to_output(target))
    }

    fn to_output(&self, source: Pos) -> Pos {
        Pos::new(source.line + self.line_shift, source.column)
    }

    fn to_source(&self, output: Pos) -> Pos {
        Pos::new(output.line.saturating_sub(self.line_shift), output.column)
    }

    /// Run a synthetic layout item on a line of its own at the block column.
    ///
    /// The lines it adds push every later source position down.
    pub(crate) fn print_synthetic_line(&mut self, action: Action<'_>) -> PrintResult<()> {
        let next_line = Pos::new(self.cursor.line + 1, 1);
        self.flush_comments_before(self.to_source(next_line))?;

        let first = self.cursor.line;
        let target = DeltaPos::new(1, 0).apply(self.cursor, self.offset);
        self.pad_to(target)?;
        action(self)?;

        self.line_shift += self.cursor.line - first;
        debug!(shift = self.line_shift, "synthetic layout item");
        Ok(())
    }

    /// Write every queued comment that starts strictly before `limit`
    pub fn flush_comments_before(&mut self, limit: Pos) -> PrintResult<()> {
        while let Some(comment) = self.comments.pop_before(limit) {
            self.print_comment(comment)?;
        }
        Ok(())
    }

    /// Write every comment still queued, in order
    pub fn flush_remaining_comments(&mut self) -> PrintResult<()> {
        let remaining: Vec<Comment> = self.comments.drain().collect();
        for comment in remaining {
            self.print_comment(comment)?;
        }
        Ok(())
    }

    fn print_comment(&mut self, comment: Comment) -> PrintResult<()> {
        trace!(span = %comment.span, "comment");
        self.pad_to(self.to_output(comment.span.start))?;
        self.write_literal(&comment.text);
        self.cursor = self.to_output(comment.span.end);
        Ok(())
    }

    /// Queue comments floated onto a node, resolving deltas at the cursor
    pub fn merge_comments(&mut self, floated: Vec<FloatedComment>) {
        let (cursor, offset) = (self.to_source(self.cursor), self.offset);
        let resolved = floated
            .into_iter()
            .map(|comment| comment.resolve(cursor, offset))
            .collect();
        self.comments.merge(resolved);
    }

    pub fn lookup_annotation(&self, span: Span) -> Option<&[Annotation]> {
        self.anns.lookup(span)
    }

    pub fn store_annotation(&mut self, span: Span, annotations: Vec<Annotation>) {
        self.anns.store(span, annotations);
    }

    /// Claim the `kind` record at `span`.
    ///
    /// Its floated comments move into the queue and the record is stored
    /// back without them, so a revisit cannot print them twice.
    fn take_annotation(&mut self, span: Span, kind: NodeKind) -> Option<Annotation> {
        let records = self.lookup_annotation(span)?;
        let index = records.iter().position(|ann| ann.kind == kind)?;
        let mut records = records.to_vec();
        let floated = std::mem::take(&mut records[index].comments);
        let annotation = records[index].clone();

        if !floated.is_empty() {
            self.merge_comments(floated);
            self.store_annotation(span, records);
        }
        Some(annotation)
    }

    /// Print a token at its anchor; null spans print nothing
    pub fn print_token(&mut self, anchor: &Anchor, text: &str) -> PrintResult<()> {
        match anchor {
            Anchor::Span(span) if span.is_null() => return Ok(()),
            Anchor::Span(span) => self.move_to(span.start)?,
            Anchor::Delta(delta) => {
                let target = delta.apply(self.cursor, self.offset);
                self.flush_comments_before(self.to_source(target))?;
                self.pad_to(target)?;
            }
        }
        self.write_literal(text);
        Ok(())
    }

    /// Print a token the tree says is present.
    ///
    /// A missing anchor means the annotation never recorded the token, which
    /// fails the pass; a null-span anchor still prints nothing.
    pub fn print_required_token(
        &mut self,
        anchor: Option<&Anchor>,
        text: &str,
        kind: NodeKind,
        span: Span,
    ) -> PrintResult<()> {
        match anchor {
            Some(anchor) => self.print_token(anchor, text),
            None => Err(PrintError::MissingAnnotation { kind, span }),
        }
    }

    /// Render one node.
    ///
    /// Flushes the comments that precede it, pads to its start, claims its
    /// annotation, dispatches to its renderer and finally prints any trailing
    /// separators recorded for it.
    pub fn visit<T: ExactPrint>(&mut self, node: &Located<T>) -> PrintResult<()> {
        let kind = node.node.kind();
        let span = node.span;

        if span.is_null() {
            debug!(%kind, "visiting synthetic node");
            self.separate_synthetic();
            return node.node.exact(self, span, &node.node.synthetic());
        }

        debug!(%kind, %span, "visiting node");
        self.move_to(span.start)?;

        let annotation = match self.take_annotation(span, kind) {
            Some(annotation) => annotation,
            None if kind.requires_annotation() => {
                return Err(PrintError::MissingAnnotation { kind, span });
            }
            None => Annotation::empty(kind),
        };
        if !annotation.payload.fits(kind) {
            return Err(PrintError::MissingAnnotation { kind, span });
        }

        node.node.exact(self, span, &annotation.payload)?;

        for trailing in &annotation.trailing {
            self.print_token(&trailing.anchor, trailing.separator.symbol())?;
        }
        Ok(())
    }

    pub fn visit_all<T: ExactPrint>(&mut self, nodes: &[Located<T>]) -> PrintResult<()> {
        nodes.iter().try_for_each(|node| self.visit(node))
    }

    pub fn visit_opt<T: ExactPrint>(&mut self, node: Option<&Located<T>>) -> PrintResult<()> {
        match node {
            Some(node) => self.visit(node),
            None => Ok(()),
        }
    }

    /// Handle a node kind with no renderer according to the configured policy
    pub fn unsupported(&mut self, kind: NodeKind, span: Span, description: &str) -> PrintResult<()> {
        match self.options.unsupported {
            UnsupportedPolicy::Error => Err(PrintError::UnsupportedVariant { kind, span }),
            UnsupportedPolicy::Placeholder => {
                warn!(%kind, %span, "ignoring unsupported {description}");
                self.write_literal(&format!("{{- facsimile: unsupported {description} -}}"));
                Ok(())
            }
        }
    }

    /// Synthetic nodes start one column after preceding text
    fn separate_synthetic(&mut self) {
        match self.output.chars().last() {
            Some(c) if c.is_whitespace() || matches!(c, '(' | '[' | '{' | '\\' | '`') => {}
            Some(_) => self.write_literal(" "),
            None => {}
        }
    }

    /// End the run, flushing trailing comments if configured, and return the text
    pub fn finish(mut self) -> PrintResult<String> {
        if self.options.emit_remaining_comments {
            self.flush_remaining_comments()?;
        } else if !self.comments.is_empty() {
            debug!(count = self.comments.len(), "dropping unprinted comments");
        }
        Ok(self.output)
    }
}

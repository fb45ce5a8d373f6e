//! Comments and the pending comment queue
//!
//! The printer holds every comment that has not been written yet in a
//! [`CommentStore`], ordered by span start. Comments attached to a node's
//! annotation ([`FloatedComment`]) join the queue when that node is visited.

use crate::annotations::Anchor;
use crate::position::{DeltaPos, Pos, Span};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Line (`-- ...`) or block (`{- ... -}`) comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Line,
    Block,
}

/// A comment with its absolute location and exact text, delimiters included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub span: Span,
    pub text: String,
}

impl Comment {
    pub fn new(kind: CommentKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// Line comment starting at `start`; the span covers the text
    pub fn line(start: Pos, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = start.advance_over(&text);
        Self::new(CommentKind::Line, Span::new(start, end), text)
    }

    /// Block comment starting at `start`; the span covers the text
    pub fn block(start: Pos, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = start.advance_over(&text);
        Self::new(CommentKind::Block, Span::new(start, end), text)
    }

    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }

    pub fn start(&self) -> Pos {
        self.span.start
    }
}

/// A comment attached to a node's annotation, possibly located by delta
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatedComment {
    pub kind: CommentKind,
    pub anchor: Anchor,
    pub text: String,
}

impl FloatedComment {
    pub fn new(kind: CommentKind, anchor: Anchor, text: impl Into<String>) -> Self {
        Self {
            kind,
            anchor,
            text: text.into(),
        }
    }

    /// Absolute comment, resolving a delta anchor against the cursor
    pub fn resolve(self, cursor: Pos, offset: DeltaPos) -> Comment {
        let span = match self.anchor {
            Anchor::Span(span) => span,
            Anchor::Delta(delta) => {
                let start = delta.apply(cursor, offset);
                Span::new(start, start.advance_over(&self.text))
            }
        };
        Comment::new(self.kind, span, self.text)
    }
}

/// Pending comments in ascending span-start order
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    queue: VecDeque<Comment>,
}

impl CommentStore {
    /// Build the queue from an orderable comment list (stable sort by start)
    pub fn new(mut comments: Vec<Comment>) -> Self {
        comments.sort_by_key(Comment::start);
        Self {
            queue: comments.into(),
        }
    }

    pub fn peek(&self) -> Option<&Comment> {
        self.queue.front()
    }

    pub fn pop(&mut self) -> Option<Comment> {
        self.queue.pop_front()
    }

    /// Pop the head if it starts strictly before `limit`
    pub fn pop_before(&mut self, limit: Pos) -> Option<Comment> {
        match self.queue.front() {
            Some(head) if head.start() < limit => self.queue.pop_front(),
            _ => None,
        }
    }

    /// Stable merge of `comments` into the queue.
    ///
    /// Both sides are sorted by start; on equal starts the comments already
    /// queued stay ahead of the newcomers.
    pub fn merge(&mut self, mut comments: Vec<Comment>) {
        if comments.is_empty() {
            return;
        }
        comments.sort_by_key(Comment::start);

        let queued = std::mem::take(&mut self.queue);
        self.queue = queued
            .into_iter()
            .merge_by(comments, |queued, new| queued.start() <= new.start())
            .collect();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every remaining comment, in order
    pub fn drain(&mut self) -> impl Iterator<Item = Comment> + '_ {
        self.queue.drain(..)
    }
}

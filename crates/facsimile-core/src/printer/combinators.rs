//! Sequencing and layout combinators built on the printer primitives

use super::Printer;
use crate::annotations::{Anchor, LayoutAnn};
use crate::error::PrintError;
use crate::exact::ExactPrint;
use crate::position::{DeltaPos, Pos, Span};
use crate::result::PrintResult;
use crate::syntax::Located;
use itertools::{Either, Itertools};

/// Deferred rendering step
pub type Action<'a> = Box<dyn FnOnce(&mut Printer) -> PrintResult<()> + 'a>;

/// Stable two-way merge by position.
///
/// On equal positions the element from `first` comes out ahead.
pub fn merge_by_position<A, B>(
    first: Vec<(Pos, A)>,
    second: Vec<(Pos, B)>,
) -> Vec<(Pos, Either<A, B>)> {
    first
        .into_iter()
        .merge_join_by(second, |a, b| a.0 <= b.0)
        .map(|item| match item {
            Either::Left((pos, a)) => (pos, Either::Left(a)),
            Either::Right((pos, b)) => (pos, Either::Right(b)),
        })
        .collect()
}

/// Ordering keys for nodes in tree order.
///
/// A synthetic node has no position of its own; it sorts with the node
/// before it so merging keeps it where the tree put it.
pub fn effective_positions<T>(nodes: &[Located<T>]) -> Vec<Pos> {
    let mut last = Span::NULL.start;
    nodes
        .iter()
        .map(|node| {
            if !node.span.is_null() {
                last = node.span.start;
            }
            last
        })
        .collect()
}

impl Printer {
    /// Run each action at its source position, in the order given.
    ///
    /// `None` is for synthetic items, which have no position and run at the
    /// cursor.
    pub fn print_sequence(&mut self, items: Vec<(Option<Pos>, Action<'_>)>) -> PrintResult<()> {
        for (pos, action) in items {
            if let Some(pos) = pos {
                self.move_to(pos)?;
            }
            action(self)?;
        }
        Ok(())
    }

    /// `open item sep item sep ... close` with every bracket and separator
    /// at its recorded position.
    ///
    /// `positions` holds the open bracket, the separators and the close
    /// bracket; a trailing separator after the last item is allowed.
    pub fn bracketed_list<T: ExactPrint>(
        &mut self,
        (open, separator, close): (&str, &str, &str),
        positions: &[Anchor],
        items: &[Located<T>],
    ) -> PrintResult<()> {
        let too_short = || PrintError::MalformedListArity {
            context: "bracketed list",
            expected: "at least 2".to_string(),
            found: positions.len(),
        };
        let (first, rest) = positions.split_first().ok_or_else(too_short)?;
        let (last, separators) = rest.split_last().ok_or_else(too_short)?;

        let n = items.len();
        let arity_ok = if n == 0 {
            separators.is_empty()
        } else {
            separators.len() == n - 1 || separators.len() == n
        };
        if !arity_ok {
            return Err(PrintError::MalformedListArity {
                context: "bracketed list",
                expected: if n == 0 {
                    "2".to_string()
                } else {
                    format!("{} or {}", n + 1, n + 2)
                },
                found: positions.len(),
            });
        }

        self.print_token(first, open)?;
        for (index, item) in items.iter().enumerate() {
            self.visit(item)?;
            if let Some(anchor) = separators.get(index) {
                self.print_token(anchor, separator)?;
            }
        }
        self.print_token(last, close)
    }

    /// Indentation-sensitive block of declarations or statements.
    ///
    /// Braces and semicolons recorded in `layout` are merged with the items
    /// by position; null-span markers print nothing. While the block runs,
    /// the layout offset is the column of its first item, and a synthetic
    /// item after another item of a virtual block starts a new line there.
    pub fn layout_block(
        &mut self,
        layout: &LayoutAnn,
        items: Vec<(Span, Action<'_>)>,
    ) -> PrintResult<()> {
        if layout.open.is_null() != layout.close.is_null() {
            return Err(PrintError::MalformedListArity {
                context: "layout block braces",
                expected: "2".to_string(),
                found: 1,
            });
        }
        if layout.is_explicit() && items.len() > 1 && layout.semis.len() < items.len() - 1 {
            return Err(PrintError::MalformedListArity {
                context: "layout block semicolons",
                expected: format!("at least {}", items.len() - 1),
                found: layout.semis.len(),
            });
        }

        let mut markers: Vec<(Pos, &'static str)> = std::iter::once((layout.open, "{"))
            .chain(layout.semis.iter().map(|semi| (*semi, ";")))
            .chain(std::iter::once((layout.close, "}")))
            .filter(|(span, _)| !span.is_null())
            .map(|(span, symbol)| (span.start, symbol))
            .collect();
        markers.sort_by_key(|(pos, _)| *pos);

        let block_column = items
            .iter()
            .map(|(span, _)| *span)
            .find(|span| !span.is_null())
            .map(|span| span.start.column);

        let mut last = Span::NULL.start;
        let keyed: Vec<(Pos, (Span, Action<'_>))> = items
            .into_iter()
            .map(|(span, action)| {
                if !span.is_null() {
                    last = span.start;
                }
                (last, (span, action))
            })
            .collect();

        let own_lines = !layout.is_explicit();
        let mut seen_item = false;
        let sequence: Vec<(Option<Pos>, Action<'_>)> = merge_by_position(keyed, markers)
            .into_iter()
            .map(|(pos, item)| match item {
                Either::Left((span, action)) if span.is_null() && seen_item && own_lines => {
                    let action: Action<'_> =
                        Box::new(move |p: &mut Printer| p.print_synthetic_line(action));
                    (None, action)
                }
                Either::Left((span, action)) => {
                    seen_item = true;
                    let at = (!span.is_null()).then_some(pos);
                    (at, action)
                }
                Either::Right(symbol) => {
                    let action: Action<'_> = Box::new(move |p: &mut Printer| {
                        p.write_literal(symbol);
                        Ok(())
                    });
                    (Some(pos), action)
                }
            })
            .collect();

        let saved = self.offset();
        if let Some(column) = block_column {
            self.set_offset(DeltaPos::new(0, column as i32 - 1));
        }
        let result = self.print_sequence(sequence);
        self.set_offset(saved);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_by_position_interleaves() {
        let binds = vec![(Pos::new(2, 3), "f"), (Pos::new(5, 3), "g")];
        let sigs = vec![(Pos::new(1, 3), "f ::"), (Pos::new(4, 3), "g ::")];

        let merged: Vec<String> = merge_by_position(binds, sigs)
            .into_iter()
            .map(|(_, item)| match item {
                Either::Left(bind) => bind.to_string(),
                Either::Right(sig) => sig.to_string(),
            })
            .collect();
        assert_eq!(merged, vec!["f ::", "f", "g ::", "g"]);
    }

    #[test]
    fn test_merge_by_position_prefers_first_on_ties() {
        let merged = merge_by_position(vec![(Pos::new(1, 1), 'a')], vec![(Pos::new(1, 1), 'b')]);
        assert!(matches!(merged[0].1, Either::Left('a')));
        assert!(matches!(merged[1].1, Either::Right('b')));
    }

    #[test]
    fn test_effective_positions_keep_synthetic_nodes_in_place() {
        let nodes = vec![
            Located::new(Span::from_coords(1, 1, 1, 2), ()),
            Located::synthetic(()),
            Located::new(Span::from_coords(3, 1, 3, 2), ()),
        ];
        assert_eq!(
            effective_positions(&nodes),
            vec![Pos::new(1, 1), Pos::new(1, 1), Pos::new(3, 1)]
        );
    }
}

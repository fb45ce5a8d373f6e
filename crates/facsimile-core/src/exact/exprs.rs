//! Expressions, case alternatives and do statements

use super::{ExactPrint, print_local_binds, synthetic_payload, wrong_shape};
use crate::annotations::AnnPayload;
use crate::position::Span;
use crate::printer::{Action, Printer};
use crate::result::PrintResult;
use crate::syntax::{Alt, Expr, Located, NodeKind, Stmt};

/// Layout items for a block of nodes printed one after another
fn block_items<T: ExactPrint>(nodes: &[Located<T>]) -> Vec<(Span, Action<'_>)> {
    nodes
        .iter()
        .map(|node| {
            let action: Action<'_> = Box::new(move |p: &mut Printer| p.visit(node));
            (node.span, action)
        })
        .collect()
}

impl ExactPrint for Expr {
    fn kind(&self) -> NodeKind {
        match self {
            Expr::Var(_) => NodeKind::Var,
            Expr::Lit(_) => NodeKind::Lit,
            Expr::App(..) => NodeKind::App,
            Expr::OpApp { .. } => NodeKind::OpApp,
            Expr::Lambda { .. } => NodeKind::Lambda,
            Expr::Let { .. } => NodeKind::Let,
            Expr::If { .. } => NodeKind::If,
            Expr::Case { .. } => NodeKind::Case,
            Expr::Do(_) => NodeKind::Do,
            Expr::Tuple(_) => NodeKind::Tuple,
            Expr::List(_) => NodeKind::List,
            Expr::Paren(_) => NodeKind::Paren,
            Expr::Unsupported { .. } => NodeKind::UnsupportedExpr,
        }
    }

    fn synthetic(&self) -> AnnPayload {
        match self {
            Expr::Tuple(items) | Expr::List(items) => synthetic_payload(self.kind(), items.len()),
            _ => synthetic_payload(self.kind(), 0),
        }
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        match (self, ann) {
            (Expr::Var(name), AnnPayload::Empty) => p.visit(name),
            (Expr::Lit(lit), AnnPayload::Empty) => {
                p.write_text(&lit.text);
                Ok(())
            }
            (Expr::App(fun, arg), AnnPayload::Empty) => {
                p.visit(fun)?;
                p.visit(arg)
            }
            (Expr::OpApp { lhs, op, rhs }, AnnPayload::Empty) => {
                p.visit(lhs)?;
                p.visit(op)?;
                p.visit(rhs)
            }
            (Expr::Lambda { pats, body }, AnnPayload::Lambda(a)) => {
                p.print_token(&a.backslash, "\\")?;
                p.visit_all(pats)?;
                p.print_token(&a.arrow, "->")?;
                p.visit(body)
            }
            (Expr::Let { binds, body }, AnnPayload::Let(a)) => {
                p.print_token(&a.let_kw, "let")?;
                print_local_binds(p, binds, &a.layout)?;
                p.print_required_token(a.in_kw.as_ref(), "in", self.kind(), span)?;
                p.visit(body)
            }
            (
                Expr::If {
                    cond,
                    then_branch,
                    else_branch,
                },
                AnnPayload::If(a),
            ) => {
                p.print_token(&a.if_kw, "if")?;
                p.visit(cond)?;
                p.print_token(&a.then_kw, "then")?;
                p.visit(then_branch)?;
                p.print_token(&a.else_kw, "else")?;
                p.visit(else_branch)
            }
            (Expr::Case { scrutinee, alts }, AnnPayload::Case(a)) => {
                p.print_token(&a.case_kw, "case")?;
                p.visit(scrutinee)?;
                p.print_token(&a.of_kw, "of")?;
                p.layout_block(&a.layout, block_items(alts))
            }
            (Expr::Do(stmts), AnnPayload::Do(a)) => {
                p.print_token(&a.do_kw, "do")?;
                p.layout_block(&a.layout, block_items(stmts))
            }
            (Expr::Tuple(items), AnnPayload::Brackets(a)) => {
                p.bracketed_list(("(", ",", ")"), &a.positions, items)
            }
            (Expr::List(items), AnnPayload::Brackets(a)) => {
                p.bracketed_list(("[", ",", "]"), &a.positions, items)
            }
            (Expr::Paren(inner), AnnPayload::Parens(a)) => {
                p.print_token(&a.open, "(")?;
                p.visit(inner)?;
                p.print_token(&a.close, ")")
            }
            (Expr::Unsupported { kind }, AnnPayload::Empty) => {
                p.unsupported(NodeKind::UnsupportedExpr, span, kind)
            }
            _ => Err(wrong_shape(self.kind(), span)),
        }
    }
}

impl ExactPrint for Alt {
    fn kind(&self) -> NodeKind {
        NodeKind::Alt
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        let AnnPayload::Arrow(a) = ann else {
            return Err(wrong_shape(self.kind(), span));
        };
        p.visit(&self.pat)?;
        p.print_token(&a.arrow, "->")?;
        p.visit(&self.body)
    }
}

impl ExactPrint for Stmt {
    fn kind(&self) -> NodeKind {
        match self {
            Stmt::Bind { .. } => NodeKind::BindStmt,
            Stmt::Body(_) => NodeKind::BodyStmt,
            Stmt::Let(_) => NodeKind::LetStmt,
        }
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        match (self, ann) {
            (Stmt::Bind { pat, expr }, AnnPayload::Arrow(a)) => {
                p.visit(pat)?;
                p.print_token(&a.arrow, "<-")?;
                p.visit(expr)
            }
            (Stmt::Body(expr), AnnPayload::Empty) => p.visit(expr),
            (Stmt::Let(binds), AnnPayload::Let(a)) => {
                p.print_token(&a.let_kw, "let")?;
                print_local_binds(p, binds, &a.layout)
            }
            _ => Err(wrong_shape(self.kind(), span)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::{Anchor, Annotation, Anns, BracketsAnn, IfAnn, LambdaAnn};
    use crate::config::PrintOptions;
    use crate::error::PrintError;
    use crate::syntax::{Literal, Name, Pat};

    fn var(line: u32, column: u32, text: &str) -> Located<Expr> {
        let span = Span::from_coords(line, column, line, column + text.len() as u32);
        Located::new(span, Expr::Var(Located::new(span, Name::new(text))))
    }

    fn print(expr: &Located<Expr>, anns: Anns) -> PrintResult<String> {
        let mut p = Printer::new(anns, vec![], PrintOptions::default());
        p.visit(expr)?;
        Ok(p.output().to_string())
    }

    #[test]
    fn test_lambda_named_variable_is_not_a_keyword() {
        let expr = var(1, 1, "lambda1");
        assert_eq!(print(&expr, Anns::new()).unwrap(), "lambda1");
    }

    #[test]
    fn test_lambda() {
        // \x -> x
        let span = Span::from_coords(1, 1, 1, 8);
        let expr = Located::new(
            span,
            Expr::Lambda {
                pats: vec![Located::new(
                    Span::from_coords(1, 2, 1, 3),
                    Pat::Var(Located::new(Span::from_coords(1, 2, 1, 3), Name::new("x"))),
                )],
                body: Box::new(var(1, 7, "x")),
            },
        );
        let mut anns = Anns::new();
        anns.insert(
            span,
            Annotation::new(
                NodeKind::Lambda,
                AnnPayload::Lambda(LambdaAnn {
                    backslash: Anchor::at(1, 1, 1),
                    arrow: Anchor::at(1, 4, 2),
                }),
            ),
        );
        assert_eq!(print(&expr, anns).unwrap(), "\\x -> x");
    }

    #[test]
    fn test_tuple_keeps_comma_columns() {
        // (a,  b ,c)
        let span = Span::from_coords(1, 1, 1, 11);
        let expr = Located::new(
            span,
            Expr::Tuple(vec![var(1, 2, "a"), var(1, 6, "b"), var(1, 9, "c")]),
        );
        let mut anns = Anns::new();
        anns.insert(
            span,
            Annotation::new(
                NodeKind::Tuple,
                AnnPayload::Brackets(BracketsAnn {
                    positions: vec![
                        Anchor::at(1, 1, 1),
                        Anchor::at(1, 3, 1),
                        Anchor::at(1, 8, 1),
                        Anchor::at(1, 10, 1),
                    ],
                }),
            ),
        );
        assert_eq!(print(&expr, anns).unwrap(), "(a,  b ,c)");
    }

    #[test]
    fn test_multiline_if() {
        let span = Span::from_coords(1, 1, 3, 12);
        let expr = Located::new(
            span,
            Expr::If {
                cond: Box::new(var(1, 4, "ok")),
                then_branch: Box::new(Located::new(
                    Span::from_coords(2, 8, 2, 9),
                    Expr::Lit(Literal::new("1")),
                )),
                else_branch: Box::new(Located::new(
                    Span::from_coords(3, 8, 3, 9),
                    Expr::Lit(Literal::new("2")),
                )),
            },
        );
        let mut anns = Anns::new();
        anns.insert(
            span,
            Annotation::new(
                NodeKind::If,
                AnnPayload::If(IfAnn {
                    if_kw: Anchor::at(1, 1, 2),
                    then_kw: Anchor::at(2, 3, 4),
                    else_kw: Anchor::at(3, 3, 4),
                }),
            ),
        );
        assert_eq!(
            print(&expr, anns).unwrap(),
            "if ok\n  then 1\n  else 2"
        );
    }

    #[test]
    fn test_if_without_annotation_reports_span() {
        let span = Span::from_coords(5, 3, 5, 20);
        let expr = Located::new(
            span,
            Expr::If {
                cond: Box::new(var(5, 6, "c")),
                then_branch: Box::new(var(5, 13, "t")),
                else_branch: Box::new(var(5, 20, "e")),
            },
        );
        let err = print(&expr, Anns::new()).unwrap_err();
        assert_eq!(
            err,
            PrintError::MissingAnnotation {
                kind: NodeKind::If,
                span,
            }
        );
        assert!(err.to_string().contains("5:3-5:20"));
    }

    #[test]
    fn test_multiline_string_literal_moves_cursor() {
        let span = Span::from_coords(1, 1, 2, 4);
        let expr = Located::new(span, Expr::Lit(Literal::new("\"a\\\n\\b\"")));
        let mut p = Printer::new(Anns::new(), vec![], PrintOptions::default());
        p.visit(&expr).unwrap();
        assert_eq!(p.cursor(), crate::position::Pos::new(2, 4));
    }
}

//! Patterns

use super::{ExactPrint, synthetic_payload, wrong_shape};
use crate::annotations::AnnPayload;
use crate::position::Span;
use crate::printer::Printer;
use crate::result::PrintResult;
use crate::syntax::{NodeKind, Pat};

impl ExactPrint for Pat {
    fn kind(&self) -> NodeKind {
        match self {
            Pat::Var(_) => NodeKind::VarPat,
            Pat::Wild => NodeKind::WildPat,
            Pat::Lit(_) => NodeKind::LitPat,
            Pat::Con { .. } => NodeKind::ConPat,
            Pat::Tuple(_) => NodeKind::TuplePat,
            Pat::List(_) => NodeKind::ListPat,
            Pat::Paren(_) => NodeKind::ParPat,
        }
    }

    fn synthetic(&self) -> AnnPayload {
        match self {
            Pat::Tuple(items) | Pat::List(items) => synthetic_payload(self.kind(), items.len()),
            _ => synthetic_payload(self.kind(), 0),
        }
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        match (self, ann) {
            (Pat::Var(name), AnnPayload::Empty) => p.visit(name),
            (Pat::Wild, AnnPayload::Empty) => {
                p.write_literal("_");
                Ok(())
            }
            (Pat::Lit(lit), AnnPayload::Empty) => {
                p.write_text(&lit.text);
                Ok(())
            }
            (Pat::Con { con, args }, AnnPayload::Empty) => {
                p.visit(con)?;
                p.visit_all(args)
            }
            (Pat::Tuple(items), AnnPayload::Brackets(a)) => {
                p.bracketed_list(("(", ",", ")"), &a.positions, items)
            }
            (Pat::List(items), AnnPayload::Brackets(a)) => {
                p.bracketed_list(("[", ",", "]"), &a.positions, items)
            }
            (Pat::Paren(inner), AnnPayload::Parens(a)) => {
                p.print_token(&a.open, "(")?;
                p.visit(inner)?;
                p.print_token(&a.close, ")")
            }
            _ => Err(wrong_shape(self.kind(), span)),
        }
    }
}

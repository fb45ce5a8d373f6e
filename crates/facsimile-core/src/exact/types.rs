use super::{ExactPrint, synthetic_payload, wrong_shape};
use crate::annotations::AnnPayload;
use crate::position::Span;
use crate::printer::Printer;
use crate::result::PrintResult;
use crate::syntax::{NodeKind, Type};

impl ExactPrint for Type {
    fn kind(&self) -> NodeKind {
        match self {
            Type::Var(_) => NodeKind::TyVar,
            Type::App(..) => NodeKind::TyApp,
            Type::Fun(..) => NodeKind::TyFun,
            Type::List(_) => NodeKind::TyList,
            Type::Tuple(_) => NodeKind::TyTuple,
            Type::Paren(_) => NodeKind::TyParen,
        }
    }

    fn synthetic(&self) -> AnnPayload {
        match self {
            Type::Tuple(items) => synthetic_payload(self.kind(), items.len()),
            _ => synthetic_payload(self.kind(), 0),
        }
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        match (self, ann) {
            (Type::Var(name), AnnPayload::Empty) => p.visit(name),
            (Type::App(fun, arg), AnnPayload::Empty) => {
                p.visit(fun)?;
                p.visit(arg)
            }
            (Type::Fun(from, to), AnnPayload::Arrow(a)) => {
                p.visit(from)?;
                p.print_token(&a.arrow, "->")?;
                p.visit(to)
            }
            (Type::List(elem), AnnPayload::Parens(a)) => {
                p.print_token(&a.open, "[")?;
                p.visit(elem)?;
                p.print_token(&a.close, "]")
            }
            (Type::Tuple(items), AnnPayload::Brackets(a)) => {
                p.bracketed_list(("(", ",", ")"), &a.positions, items)
            }
            (Type::Paren(inner), AnnPayload::Parens(a)) => {
                p.print_token(&a.open, "(")?;
                p.visit(inner)?;
                p.print_token(&a.close, ")")
            }
            _ => Err(wrong_shape(self.kind(), span)),
        }
    }
}

//! Top-level and local declarations

use super::{ExactPrint, print_local_binds, visit_separated, wrong_shape};
use crate::annotations::{AnnPayload, Separator};
use crate::error::PrintError;
use crate::position::Span;
use crate::printer::Printer;
use crate::result::PrintResult;
use crate::syntax::{Bind, ConDecl, DataDecl, Decl, NodeKind, TypeSig};

impl ExactPrint for Decl {
    fn kind(&self) -> NodeKind {
        match self {
            Decl::TypeSig(sig) => sig.kind(),
            Decl::Bind(bind) => bind.kind(),
            Decl::Data(data) => data.kind(),
            Decl::Unsupported { .. } => NodeKind::UnsupportedDecl,
        }
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        match self {
            Decl::TypeSig(sig) => sig.exact(p, span, ann),
            Decl::Bind(bind) => bind.exact(p, span, ann),
            Decl::Data(data) => data.exact(p, span, ann),
            Decl::Unsupported { kind } => p.unsupported(NodeKind::UnsupportedDecl, span, kind),
        }
    }
}

impl ExactPrint for TypeSig {
    fn kind(&self) -> NodeKind {
        NodeKind::TypeSig
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        let AnnPayload::Sig(a) = ann else {
            return Err(wrong_shape(self.kind(), span));
        };
        visit_separated(p, &self.names, Separator::Comma)?;
        p.print_token(&a.dcolon, "::")?;
        p.visit(&self.ty)
    }
}

impl ExactPrint for Bind {
    fn kind(&self) -> NodeKind {
        NodeKind::Bind
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        let AnnPayload::Bind(a) = ann else {
            return Err(wrong_shape(self.kind(), span));
        };

        if a.infix {
            let [lhs, rhs] = self.pats.as_slice() else {
                return Err(PrintError::MalformedListArity {
                    context: "infix binding",
                    expected: "2".to_string(),
                    found: self.pats.len(),
                });
            };
            p.visit(lhs)?;
            p.visit(&self.name)?;
            p.visit(rhs)?;
        } else {
            p.visit(&self.name)?;
            p.visit_all(&self.pats)?;
        }

        p.print_token(&a.equals, "=")?;
        p.visit(&self.rhs)?;

        if let Some(binds) = &self.where_binds {
            p.print_required_token(a.where_kw.as_ref(), "where", self.kind(), span)?;
            print_local_binds(p, binds, &a.where_layout)?;
        }
        Ok(())
    }
}

impl ExactPrint for DataDecl {
    fn kind(&self) -> NodeKind {
        NodeKind::DataDecl
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        let AnnPayload::Data(a) = ann else {
            return Err(wrong_shape(self.kind(), span));
        };

        p.print_token(&a.data_kw, "data")?;
        p.visit(&self.name)?;
        p.visit_all(&self.params)?;
        if !self.constructors.is_empty() {
            p.print_required_token(a.equals.as_ref(), "=", self.kind(), span)?;
            visit_separated(p, &self.constructors, Separator::Bar)?;
        }
        Ok(())
    }
}

impl ExactPrint for ConDecl {
    fn kind(&self) -> NodeKind {
        NodeKind::ConDecl
    }

    fn exact(&self, p: &mut Printer, _span: Span, _ann: &AnnPayload) -> PrintResult<()> {
        p.visit(&self.name)?;
        p.visit_all(&self.args)
    }
}

//! Module header, imports, import/export items and names

use super::{ExactPrint, visit_separated, wrong_shape};
use crate::annotations::{AnnPayload, Anns, Separator};
use crate::comments::Comment;
use crate::config::PrintOptions;
use crate::position::Span;
use crate::printer::{Action, Printer, effective_positions, merge_by_position};
use crate::result::PrintResult;
use crate::syntax::{IeItem, Import, Located, Module, Name, NodeKind};
use itertools::Either;
use tracing::debug;

/// Reproduce the source text of a whole module
pub fn exact_print_module(
    module: &Located<Module>,
    anns: &Anns,
    comments: &[Comment],
    options: PrintOptions,
) -> PrintResult<String> {
    debug!(
        annotations = anns.len(),
        comments = comments.len(),
        "printing module"
    );
    let mut printer = Printer::new(anns.clone(), comments.to_vec(), options);
    printer.visit(module)?;
    printer.finish()
}

impl ExactPrint for Module {
    fn kind(&self) -> NodeKind {
        NodeKind::Module
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        let AnnPayload::Module(a) = ann else {
            return Err(wrong_shape(self.kind(), span));
        };

        let kind = self.kind();
        match &self.name {
            Some(name) => {
                p.print_required_token(a.module_kw.as_ref(), "module", kind, span)?;
                p.visit(name)?;
                if let Some(exports) = &self.exports {
                    p.print_required_token(a.exports_open.as_ref(), "(", kind, span)?;
                    visit_separated(p, exports, Separator::Comma)?;
                    p.print_required_token(a.exports_close.as_ref(), ")", kind, span)?;
                }
                p.print_required_token(a.where_kw.as_ref(), "where", kind, span)?;
            }
            // an export list needs a header to hang off
            None if self.exports.is_some() => return Err(wrong_shape(kind, span)),
            None => {}
        }

        let items: Vec<(Span, Action<'_>)> = merge_by_position(
            effective_positions(&self.imports)
                .into_iter()
                .zip(&self.imports)
                .collect(),
            effective_positions(&self.decls)
                .into_iter()
                .zip(&self.decls)
                .collect(),
        )
        .into_iter()
        .map(|(_, item)| {
            let (span, action): (Span, Action<'_>) = match item {
                Either::Left(import) => {
                    (import.span, Box::new(move |p: &mut Printer| p.visit(import)))
                }
                Either::Right(decl) => (decl.span, Box::new(move |p: &mut Printer| p.visit(decl))),
            };
            (span, action)
        })
        .collect();
        p.layout_block(&a.layout, items)?;

        if let Some(eof) = a.eof {
            p.move_to(eof)?;
        }
        Ok(())
    }
}

impl ExactPrint for Import {
    fn kind(&self) -> NodeKind {
        NodeKind::Import
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        let AnnPayload::Import(a) = ann else {
            return Err(wrong_shape(self.kind(), span));
        };

        let kind = self.kind();
        p.print_token(&a.import_kw, "import")?;
        if self.qualified {
            p.print_required_token(a.qualified_kw.as_ref(), "qualified", kind, span)?;
        }
        p.visit(&self.module)?;
        if let Some(alias) = &self.alias {
            p.print_required_token(a.as_kw.as_ref(), "as", kind, span)?;
            p.visit(alias)?;
        }
        if let Some(items) = &self.items {
            if self.hiding {
                p.print_required_token(a.hiding_kw.as_ref(), "hiding", kind, span)?;
            }
            p.print_required_token(a.list_open.as_ref(), "(", kind, span)?;
            visit_separated(p, items, Separator::Comma)?;
            p.print_required_token(a.list_close.as_ref(), ")", kind, span)?;
        }
        Ok(())
    }
}

impl ExactPrint for IeItem {
    fn kind(&self) -> NodeKind {
        match self {
            IeItem::Var(_) => NodeKind::IeVar,
            IeItem::ThingAll(_) => NodeKind::IeThingAll,
            IeItem::ThingWith { .. } => NodeKind::IeThingWith,
        }
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        match (self, ann) {
            (IeItem::Var(name), AnnPayload::Empty) => p.visit(name),
            (IeItem::ThingAll(name), AnnPayload::Ie(a)) => {
                p.visit(name)?;
                p.print_token(&a.open, "(")?;
                p.print_required_token(a.dotdot.as_ref(), "..", self.kind(), span)?;
                p.print_token(&a.close, ")")
            }
            (IeItem::ThingWith { name, members }, AnnPayload::Ie(a)) => {
                p.visit(name)?;
                p.print_token(&a.open, "(")?;
                visit_separated(p, members, Separator::Comma)?;
                p.print_token(&a.close, ")")
            }
            _ => Err(wrong_shape(self.kind(), span)),
        }
    }
}

impl ExactPrint for Name {
    fn kind(&self) -> NodeKind {
        NodeKind::Name
    }

    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()> {
        match ann {
            AnnPayload::Empty => {
                p.write_literal(&self.text);
                Ok(())
            }
            AnnPayload::Name(a) => {
                let (open, close) = a.adornment.delimiters();
                p.print_token(&a.open, open)?;
                p.print_token(&a.text, &self.text)?;
                p.print_token(&a.close, close)
            }
            _ => Err(wrong_shape(self.kind(), span)),
        }
    }
}

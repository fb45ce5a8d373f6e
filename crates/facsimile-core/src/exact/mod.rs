//! Per-node renderers
//!
//! Every syntax node implements [`ExactPrint`]: it names its [`NodeKind`]
//! and reproduces its surface form from the annotation payload handed to it
//! by [`Printer::visit`]. Renderers print their own tokens through the
//! printer and visit their children in source order.

mod decls;
mod exprs;
mod module;
mod patterns;
mod types;

use crate::annotations::{
    Anchor, AnnPayload, ArrowAnn, BindAnn, BracketsAnn, CaseAnn, DataAnn, DoAnn, IeAnn, IfAnn,
    ImportAnn, LambdaAnn, LayoutAnn, LetAnn, ModuleAnn, ParensAnn, Separator, SigAnn,
};
use crate::error::PrintError;
use crate::position::{DeltaPos, Span};
use crate::printer::{Action, Printer, effective_positions, merge_by_position};
use crate::result::PrintResult;
use crate::syntax::{Located, LocalBinds, NodeKind};
use itertools::Either;

pub use module::exact_print_module;

/// Render-thyself contract of a syntax node
pub trait ExactPrint {
    fn kind(&self) -> NodeKind;

    /// Payload used when the node has a null span and so no annotation
    fn synthetic(&self) -> AnnPayload {
        synthetic_payload(self.kind(), 0)
    }

    /// Print the node; the cursor is already at its start
    fn exact(&self, p: &mut Printer, span: Span, ann: &AnnPayload) -> PrintResult<()>;
}

/// Payload for a node that was inserted by a tool rather than parsed.
///
/// The first token sits at the cursor, later keywords one column after the
/// preceding text, separators and closing brackets directly after it.
pub(crate) fn synthetic_payload(kind: NodeKind, items: usize) -> AnnPayload {
    let first = Anchor::Delta(DeltaPos::ZERO);
    let keyword = Anchor::Delta(DeltaPos::SPACE);
    let tight = Anchor::Delta(DeltaPos::ZERO);

    match kind {
        NodeKind::Module => AnnPayload::Module(ModuleAnn {
            module_kw: Some(first),
            where_kw: Some(keyword),
            exports_open: Some(keyword),
            exports_close: Some(tight),
            layout: LayoutAnn::virtual_layout(),
            eof: None,
        }),
        NodeKind::Import => AnnPayload::Import(ImportAnn {
            import_kw: first,
            qualified_kw: Some(keyword),
            as_kw: Some(keyword),
            hiding_kw: Some(keyword),
            list_open: Some(keyword),
            list_close: Some(tight),
        }),
        NodeKind::IeThingAll | NodeKind::IeThingWith => AnnPayload::Ie(IeAnn {
            open: tight,
            dotdot: Some(tight),
            close: tight,
        }),
        NodeKind::TypeSig => AnnPayload::Sig(SigAnn { dcolon: keyword }),
        NodeKind::Bind => AnnPayload::Bind(BindAnn {
            infix: false,
            equals: keyword,
            where_kw: Some(keyword),
            where_layout: LayoutAnn::virtual_layout(),
        }),
        NodeKind::DataDecl => AnnPayload::Data(DataAnn {
            data_kw: first,
            equals: Some(keyword),
        }),
        NodeKind::TuplePat
        | NodeKind::ListPat
        | NodeKind::TyTuple
        | NodeKind::Tuple
        | NodeKind::List => {
            let separators = items.saturating_sub(1);
            let positions = std::iter::once(first)
                .chain(std::iter::repeat_n(tight, separators))
                .chain(std::iter::once(tight))
                .collect();
            AnnPayload::Brackets(BracketsAnn { positions })
        }
        NodeKind::ParPat | NodeKind::TyParen | NodeKind::TyList | NodeKind::Paren => {
            AnnPayload::Parens(ParensAnn {
                open: first,
                close: tight,
            })
        }
        NodeKind::TyFun | NodeKind::Alt | NodeKind::BindStmt => {
            AnnPayload::Arrow(ArrowAnn { arrow: keyword })
        }
        NodeKind::Lambda => AnnPayload::Lambda(LambdaAnn {
            backslash: first,
            arrow: keyword,
        }),
        NodeKind::Let | NodeKind::LetStmt => AnnPayload::Let(LetAnn {
            let_kw: first,
            layout: LayoutAnn::virtual_layout(),
            in_kw: Some(keyword),
        }),
        NodeKind::If => AnnPayload::If(IfAnn {
            if_kw: first,
            then_kw: keyword,
            else_kw: keyword,
        }),
        NodeKind::Case => AnnPayload::Case(CaseAnn {
            case_kw: first,
            of_kw: keyword,
            layout: LayoutAnn::virtual_layout(),
        }),
        NodeKind::Do => AnnPayload::Do(DoAnn {
            do_kw: first,
            layout: LayoutAnn::virtual_layout(),
        }),
        _ => AnnPayload::Empty,
    }
}

/// A payload that does not match the node it was handed to
pub(crate) fn wrong_shape(kind: NodeKind, span: Span) -> PrintError {
    PrintError::MissingAnnotation { kind, span }
}

/// Items whose separators are recorded as trailing annotations.
///
/// Parsed items print their own separator; a synthetic item that follows
/// another gets one inserted in front of it.
pub(crate) fn visit_separated<T: ExactPrint>(
    p: &mut Printer,
    items: &[Located<T>],
    separator: Separator,
) -> PrintResult<()> {
    let gap = match separator {
        Separator::Bar => Anchor::Delta(DeltaPos::SPACE),
        Separator::Comma | Separator::Semi => Anchor::Delta(DeltaPos::ZERO),
    };
    for (index, item) in items.iter().enumerate() {
        let separated = p.output().trim_end().ends_with(separator.symbol());
        if index > 0 && item.span.is_null() && !separated {
            p.print_token(&gap, separator.symbol())?;
        }
        p.visit(item)?;
    }
    Ok(())
}

/// Bindings and signatures of a `let`/`where`, interleaved by position
/// inside the block's layout
pub(crate) fn print_local_binds(
    p: &mut Printer,
    binds: &LocalBinds,
    layout: &LayoutAnn,
) -> PrintResult<()> {
    let bind_keys = effective_positions(&binds.binds);
    let sig_keys = effective_positions(&binds.sigs);

    let items: Vec<(Span, Action<'_>)> = merge_by_position(
        bind_keys.into_iter().zip(&binds.binds).collect(),
        sig_keys.into_iter().zip(&binds.sigs).collect(),
    )
    .into_iter()
    .map(|(_, item)| {
        let (span, action): (Span, Action<'_>) = match item {
            Either::Left(bind) => (bind.span, Box::new(move |p: &mut Printer| p.visit(bind))),
            Either::Right(sig) => (sig.span, Box::new(move |p: &mut Printer| p.visit(sig))),
        };
        (span, action)
    })
    .collect();

    p.layout_block(layout, items)
}

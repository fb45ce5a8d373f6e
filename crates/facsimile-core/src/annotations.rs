//! Annotation table
//!
//! Each parsed node's span maps to the annotation records of the nodes at
//! that span. A record is tagged with the [`NodeKind`] it belongs to and
//! carries the positions of the node's auxiliary tokens (keywords, brackets,
//! separators), comments floated onto the node, and trailing separators.

use crate::comments::FloatedComment;
use crate::position::{DeltaPos, Pos, Span};
use crate::syntax::NodeKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a token goes: an absolute span, or a delta from the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Absolute location; a null span marks a token that is not printed
    Span(Span),
    Delta(DeltaPos),
}

impl Anchor {
    /// Anchor of a token that exists in the tree but not in the text
    pub const ABSENT: Anchor = Anchor::Span(Span::NULL);

    pub fn at(line: u32, column: u32, width: u32) -> Self {
        Anchor::Span(Span::from_coords(line, column, line, column + width))
    }

    pub fn delta(lines: u32, column: i32) -> Self {
        Anchor::Delta(DeltaPos::new(lines, column))
    }

    /// True when the token is suppressed
    pub fn is_null(&self) -> bool {
        matches!(self, Anchor::Span(span) if span.is_null())
    }
}

/// Separator printed after a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    Comma,
    Semi,
    Bar,
}

impl Separator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Semi => ";",
            Separator::Bar => "|",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailingAnn {
    pub separator: Separator,
    pub anchor: Anchor,
}

impl TrailingAnn {
    pub fn new(separator: Separator, anchor: Anchor) -> Self {
        Self { separator, anchor }
    }
}

/// Explicit or virtual braces and semicolons of a layout block.
///
/// Null spans mark markers the source left implicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutAnn {
    #[serde(default = "null_span")]
    pub open: Span,
    #[serde(default)]
    pub semis: Vec<Span>,
    #[serde(default = "null_span")]
    pub close: Span,
}

fn null_span() -> Span {
    Span::NULL
}

impl Default for LayoutAnn {
    fn default() -> Self {
        Self {
            open: Span::NULL,
            semis: Vec::new(),
            close: Span::NULL,
        }
    }
}

impl LayoutAnn {
    /// Layout given purely by indentation
    pub fn virtual_layout() -> Self {
        Self::default()
    }

    pub fn is_explicit(&self) -> bool {
        !self.open.is_null() || !self.close.is_null()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAnn {
    pub module_kw: Option<Anchor>,
    pub where_kw: Option<Anchor>,
    #[serde(default)]
    pub exports_open: Option<Anchor>,
    #[serde(default)]
    pub exports_close: Option<Anchor>,
    #[serde(default)]
    pub layout: LayoutAnn,
    /// End of file; the printer pads to it after the last declaration
    #[serde(default)]
    pub eof: Option<Pos>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportAnn {
    pub import_kw: Anchor,
    #[serde(default)]
    pub qualified_kw: Option<Anchor>,
    #[serde(default)]
    pub as_kw: Option<Anchor>,
    #[serde(default)]
    pub hiding_kw: Option<Anchor>,
    #[serde(default)]
    pub list_open: Option<Anchor>,
    #[serde(default)]
    pub list_close: Option<Anchor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IeAnn {
    pub open: Anchor,
    #[serde(default)]
    pub dotdot: Option<Anchor>,
    pub close: Anchor,
}

/// How a name is decorated in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adornment {
    /// `(+)`
    Parens,
    /// `` `div` ``
    Backquotes,
}

impl Adornment {
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            Adornment::Parens => ("(", ")"),
            Adornment::Backquotes => ("`", "`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAnn {
    pub adornment: Adornment,
    pub open: Anchor,
    pub text: Anchor,
    pub close: Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigAnn {
    pub dcolon: Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindAnn {
    /// Infix definition `x <+> y = ...`
    #[serde(default)]
    pub infix: bool,
    pub equals: Anchor,
    #[serde(default)]
    pub where_kw: Option<Anchor>,
    #[serde(default)]
    pub where_layout: LayoutAnn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAnn {
    pub data_kw: Anchor,
    #[serde(default)]
    pub equals: Option<Anchor>,
}

/// Open bracket, separators, close bracket, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketsAnn {
    pub positions: Vec<Anchor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParensAnn {
    pub open: Anchor,
    pub close: Anchor,
}

/// `->` of a function type or case alternative, `<-` of a bind statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowAnn {
    pub arrow: Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaAnn {
    pub backslash: Anchor,
    pub arrow: Anchor,
}

/// `let` expressions and statements; statements have no `in`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetAnn {
    pub let_kw: Anchor,
    #[serde(default)]
    pub layout: LayoutAnn,
    #[serde(default)]
    pub in_kw: Option<Anchor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfAnn {
    pub if_kw: Anchor,
    pub then_kw: Anchor,
    pub else_kw: Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAnn {
    pub case_kw: Anchor,
    pub of_kw: Anchor,
    #[serde(default)]
    pub layout: LayoutAnn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoAnn {
    pub do_kw: Anchor,
    #[serde(default)]
    pub layout: LayoutAnn,
}

/// Node-kind specific token positions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnPayload {
    /// No token positions; the node only carries comments or separators
    #[default]
    Empty,
    Module(ModuleAnn),
    Import(ImportAnn),
    Ie(IeAnn),
    Name(NameAnn),
    Sig(SigAnn),
    Bind(BindAnn),
    Data(DataAnn),
    Brackets(BracketsAnn),
    Parens(ParensAnn),
    Arrow(ArrowAnn),
    Lambda(LambdaAnn),
    Let(LetAnn),
    If(IfAnn),
    Case(CaseAnn),
    Do(DoAnn),
}

impl AnnPayload {
    /// Whether this payload has the shape the renderer of `kind` expects
    pub fn fits(&self, kind: NodeKind) -> bool {
        match self {
            AnnPayload::Empty => !kind.requires_annotation(),
            AnnPayload::Module(_) => kind == NodeKind::Module,
            AnnPayload::Import(_) => kind == NodeKind::Import,
            AnnPayload::Ie(_) => matches!(kind, NodeKind::IeThingAll | NodeKind::IeThingWith),
            AnnPayload::Name(_) => kind == NodeKind::Name,
            AnnPayload::Sig(_) => kind == NodeKind::TypeSig,
            AnnPayload::Bind(_) => kind == NodeKind::Bind,
            AnnPayload::Data(_) => kind == NodeKind::DataDecl,
            AnnPayload::Brackets(_) => matches!(
                kind,
                NodeKind::TuplePat
                    | NodeKind::ListPat
                    | NodeKind::TyTuple
                    | NodeKind::Tuple
                    | NodeKind::List
            ),
            AnnPayload::Parens(_) => matches!(
                kind,
                NodeKind::ParPat | NodeKind::TyParen | NodeKind::TyList | NodeKind::Paren
            ),
            AnnPayload::Arrow(_) => {
                matches!(kind, NodeKind::TyFun | NodeKind::Alt | NodeKind::BindStmt)
            }
            AnnPayload::Lambda(_) => kind == NodeKind::Lambda,
            AnnPayload::Let(_) => matches!(kind, NodeKind::Let | NodeKind::LetStmt),
            AnnPayload::If(_) => kind == NodeKind::If,
            AnnPayload::Case(_) => kind == NodeKind::Case,
            AnnPayload::Do(_) => kind == NodeKind::Do,
        }
    }
}

/// Annotation record of one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: NodeKind,
    #[serde(default)]
    pub payload: AnnPayload,
    /// Comments attached to this node, single-use
    #[serde(default)]
    pub comments: Vec<FloatedComment>,
    /// Separators printed right after the node
    #[serde(default)]
    pub trailing: Vec<TrailingAnn>,
}

impl Annotation {
    pub fn new(kind: NodeKind, payload: AnnPayload) -> Self {
        Self {
            kind,
            payload,
            comments: Vec::new(),
            trailing: Vec::new(),
        }
    }

    /// Record for a node that needs no token positions
    pub fn empty(kind: NodeKind) -> Self {
        Self::new(kind, AnnPayload::Empty)
    }

    pub fn with_comments(mut self, comments: Vec<FloatedComment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_trailing(mut self, separator: Separator, anchor: Anchor) -> Self {
        self.trailing.push(TrailingAnn::new(separator, anchor));
        self
    }
}

/// Span-keyed side table of annotations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AnnEntry>", into = "Vec<AnnEntry>")]
pub struct Anns {
    table: HashMap<Span, Vec<Annotation>>,
}

/// Serialized form of one table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnEntry {
    pub span: Span,
    pub annotations: Vec<Annotation>,
}

impl Anns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, span: Span) -> Option<&[Annotation]> {
        self.table.get(&span).map(Vec::as_slice)
    }

    /// Replace every annotation stored under `span`
    pub fn store(&mut self, span: Span, annotations: Vec<Annotation>) {
        self.table.insert(span, annotations);
    }

    /// Add one record under `span`
    pub fn insert(&mut self, span: Span, annotation: Annotation) {
        self.table.entry(span).or_default().push(annotation);
    }

    /// Number of spans with annotations
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<Vec<AnnEntry>> for Anns {
    fn from(entries: Vec<AnnEntry>) -> Self {
        let mut anns = Anns::new();
        for entry in entries {
            for annotation in entry.annotations {
                anns.insert(entry.span, annotation);
            }
        }
        anns
    }
}

impl From<Anns> for Vec<AnnEntry> {
    fn from(anns: Anns) -> Self {
        let mut entries: Vec<AnnEntry> = anns
            .table
            .into_iter()
            .map(|(span, annotations)| AnnEntry { span, annotations })
            .collect();
        entries.sort_by_key(|entry| entry.span);
        entries
    }
}

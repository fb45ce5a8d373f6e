//! Syntax tree consumed by the exact printer
//!
//! A small layout-sensitive functional language: modules with imports and
//! declarations, patterns, types, expressions, case alternatives and do
//! statements. Every node is wrapped in [`Located`], whose span keys the
//! node's annotation in the annotation table.

use crate::position::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node together with its source span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Located<T> {
    pub span: Span,
    pub node: T,
}

impl<T> Located<T> {
    pub fn new(span: Span, node: T) -> Self {
        Self { span, node }
    }

    /// Node with no source location (inserted by a tool, not parsed)
    pub fn synthetic(node: T) -> Self {
        Self {
            span: Span::NULL,
            node,
        }
    }
}

/// Identifier or operator symbol, without adornment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name {
    pub text: String,
}

impl Name {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Literal kept as its exact source text (`0x1F`, `'\n'`, `"a\"b"`, `1.5e3`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal {
    pub text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// `None` for a headerless module
    pub name: Option<Located<Name>>,
    #[serde(default)]
    pub exports: Option<Vec<Located<IeItem>>>,
    #[serde(default)]
    pub imports: Vec<Located<Import>>,
    #[serde(default)]
    pub decls: Vec<Located<Decl>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    #[serde(default)]
    pub qualified: bool,
    pub module: Located<Name>,
    #[serde(default)]
    pub alias: Option<Located<Name>>,
    #[serde(default)]
    pub hiding: bool,
    #[serde(default)]
    pub items: Option<Vec<Located<IeItem>>>,
}

/// Entry of an import or export list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IeItem {
    /// `f`
    Var(Located<Name>),
    /// `T(..)`
    ThingAll(Located<Name>),
    /// `T(A, B)`
    ThingWith {
        name: Located<Name>,
        members: Vec<Located<Name>>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decl {
    TypeSig(TypeSig),
    Bind(Bind),
    Data(DataDecl),
    /// Construct the parser produced but no renderer exists for
    Unsupported { kind: String },
}

/// `f, g :: T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSig {
    pub names: Vec<Located<Name>>,
    pub ty: Located<Type>,
}

/// One equation `f p1 p2 = e where binds`, or infix `p1 <+> p2 = e`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bind {
    pub name: Located<Name>,
    #[serde(default)]
    pub pats: Vec<Located<Pat>>,
    pub rhs: Box<Located<Expr>>,
    #[serde(default)]
    pub where_binds: Option<LocalBinds>,
}

/// `data T a = C1 t | C2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDecl {
    pub name: Located<Name>,
    #[serde(default)]
    pub params: Vec<Located<Name>>,
    #[serde(default)]
    pub constructors: Vec<Located<ConDecl>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConDecl {
    pub name: Located<Name>,
    #[serde(default)]
    pub args: Vec<Located<Type>>,
}

/// Bindings of a `let` or `where`; signatures are kept apart from the
/// equations and re-interleaved by position when printing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalBinds {
    #[serde(default)]
    pub binds: Vec<Located<Bind>>,
    #[serde(default)]
    pub sigs: Vec<Located<TypeSig>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pat {
    Var(Located<Name>),
    Wild,
    Lit(Literal),
    Con {
        con: Located<Name>,
        args: Vec<Located<Pat>>,
    },
    Tuple(Vec<Located<Pat>>),
    List(Vec<Located<Pat>>),
    Paren(Box<Located<Pat>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Type variable or constructor
    Var(Located<Name>),
    App(Box<Located<Type>>, Box<Located<Type>>),
    Fun(Box<Located<Type>>, Box<Located<Type>>),
    List(Box<Located<Type>>),
    Tuple(Vec<Located<Type>>),
    Paren(Box<Located<Type>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Var(Located<Name>),
    Lit(Literal),
    App(Box<Located<Expr>>, Box<Located<Expr>>),
    OpApp {
        lhs: Box<Located<Expr>>,
        op: Located<Name>,
        rhs: Box<Located<Expr>>,
    },
    Lambda {
        pats: Vec<Located<Pat>>,
        body: Box<Located<Expr>>,
    },
    Let {
        binds: LocalBinds,
        body: Box<Located<Expr>>,
    },
    If {
        cond: Box<Located<Expr>>,
        then_branch: Box<Located<Expr>>,
        else_branch: Box<Located<Expr>>,
    },
    Case {
        scrutinee: Box<Located<Expr>>,
        alts: Vec<Located<Alt>>,
    },
    Do(Vec<Located<Stmt>>),
    Tuple(Vec<Located<Expr>>),
    List(Vec<Located<Expr>>),
    Paren(Box<Located<Expr>>),
    Unsupported { kind: String },
}

/// `pat -> expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alt {
    pub pat: Located<Pat>,
    pub body: Located<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    /// `p <- e`
    Bind { pat: Located<Pat>, expr: Located<Expr> },
    Body(Located<Expr>),
    Let(LocalBinds),
}

/// Every syntactically distinct construct the printer knows about.
///
/// Annotations are tagged with the kind they belong to, so two nodes sharing
/// a span (an expression and the name inside it) each find their own record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Module,
    Import,
    IeVar,
    IeThingAll,
    IeThingWith,
    Name,
    TypeSig,
    Bind,
    DataDecl,
    ConDecl,
    UnsupportedDecl,
    VarPat,
    WildPat,
    LitPat,
    ConPat,
    TuplePat,
    ListPat,
    ParPat,
    TyVar,
    TyApp,
    TyFun,
    TyList,
    TyTuple,
    TyParen,
    Var,
    Lit,
    App,
    OpApp,
    Lambda,
    Let,
    If,
    Case,
    Do,
    Tuple,
    List,
    Paren,
    UnsupportedExpr,
    Alt,
    BindStmt,
    BodyStmt,
    LetStmt,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Module => "module",
            NodeKind::Import => "import",
            NodeKind::IeVar => "ie_var",
            NodeKind::IeThingAll => "ie_thing_all",
            NodeKind::IeThingWith => "ie_thing_with",
            NodeKind::Name => "name",
            NodeKind::TypeSig => "type_sig",
            NodeKind::Bind => "bind",
            NodeKind::DataDecl => "data_decl",
            NodeKind::ConDecl => "con_decl",
            NodeKind::UnsupportedDecl => "unsupported_decl",
            NodeKind::VarPat => "var_pat",
            NodeKind::WildPat => "wild_pat",
            NodeKind::LitPat => "lit_pat",
            NodeKind::ConPat => "con_pat",
            NodeKind::TuplePat => "tuple_pat",
            NodeKind::ListPat => "list_pat",
            NodeKind::ParPat => "par_pat",
            NodeKind::TyVar => "ty_var",
            NodeKind::TyApp => "ty_app",
            NodeKind::TyFun => "ty_fun",
            NodeKind::TyList => "ty_list",
            NodeKind::TyTuple => "ty_tuple",
            NodeKind::TyParen => "ty_paren",
            NodeKind::Var => "var",
            NodeKind::Lit => "lit",
            NodeKind::App => "app",
            NodeKind::OpApp => "op_app",
            NodeKind::Lambda => "lambda",
            NodeKind::Let => "let",
            NodeKind::If => "if",
            NodeKind::Case => "case",
            NodeKind::Do => "do",
            NodeKind::Tuple => "tuple",
            NodeKind::List => "list",
            NodeKind::Paren => "paren",
            NodeKind::UnsupportedExpr => "unsupported_expr",
            NodeKind::Alt => "alt",
            NodeKind::BindStmt => "bind_stmt",
            NodeKind::BodyStmt => "body_stmt",
            NodeKind::LetStmt => "let_stmt",
        }
    }

    /// Whether the renderer cannot place this node's tokens without an annotation.
    ///
    /// Leaves and juxtapositions position themselves through their children;
    /// anything with keywords, brackets or punctuation needs recorded positions.
    pub fn requires_annotation(&self) -> bool {
        !matches!(
            self,
            NodeKind::IeVar
                | NodeKind::Name
                | NodeKind::ConDecl
                | NodeKind::UnsupportedDecl
                | NodeKind::VarPat
                | NodeKind::WildPat
                | NodeKind::LitPat
                | NodeKind::ConPat
                | NodeKind::TyVar
                | NodeKind::TyApp
                | NodeKind::Var
                | NodeKind::Lit
                | NodeKind::App
                | NodeKind::OpApp
                | NodeKind::UnsupportedExpr
                | NodeKind::BodyStmt
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Abstract Syntax Tree definitions for Solidity
//!
//! The tree covers top-level declarations only: state variables, functions and contract-like
//! definitions. Every node records the byte offsets of its first and last characters so tooling
//! can map it back to an exact source range through the [`Node`] trait.

use std::fmt;

use solbot_core::lang::keywords::{self, KeywordId};

use crate::lexer::TokenKind;

/// Zero-based byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Position {
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    pub const fn offset(self) -> usize {
        self.0
    }

    /// Position `len` bytes further into the source.
    pub const fn advance(self, len: usize) -> Self {
        Self(self.0 + len)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source location span (byte offsets, `end` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if `offset` falls inside the span.
    ///
    /// ## Notes
    /// - The end is treated as inclusive so a cursor sitting right after the last character still hits the node.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Capability shared by every AST node: the exact range of source text it covers.
///
/// ## Notes
/// - `start()` is the position of the node's first character.
/// - `end()` is the position immediately after its last character.
pub trait Node {
    fn start(&self) -> Position;
    fn end(&self) -> Position;

    fn span(&self) -> Span {
        Span::new(self.start().offset(), self.end().offset())
    }
}

// ============================================================================
// File
// ============================================================================

/// Root of the tree: the ordered top-level declarations of one source file.
///
/// ## Notes
/// - A file is not a [`Node`]: an empty file covers no source text, so its range accessors return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    pub declarations: Vec<Declaration>,
}

impl File {
    /// Start of the first declaration, or `None` for an empty file.
    pub fn start(&self) -> Option<Position> {
        self.declarations.first().map(Node::start)
    }

    /// End of the last declaration, or `None` for an empty file.
    pub fn end(&self) -> Option<Position> {
        self.declarations.last().map(Node::end)
    }

    pub fn span(&self) -> Option<Span> {
        Some(Span::new(self.start()?.offset(), self.end()?.offset()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Declarations recognized at file or contract scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
    Contract(ContractDefinition),
}

impl Declaration {
    /// Declared name.
    pub fn name(&self) -> &Identifier {
        match self {
            Declaration::Variable(v) => &v.name,
            Declaration::Function(f) => &f.name,
            Declaration::Contract(c) => &c.name,
        }
    }

    /// Short human-readable kind, e.g. `"function"`.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Declaration::Variable(_) => "variable",
            Declaration::Function(_) => "function",
            Declaration::Contract(c) => c.kind.as_str(),
        }
    }
}

impl Node for Declaration {
    fn start(&self) -> Position {
        match self {
            Declaration::Variable(v) => v.start(),
            Declaration::Function(f) => f.start(),
            Declaration::Contract(c) => c.start(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Declaration::Variable(v) => v.end(),
            Declaration::Function(f) => f.end(),
            Declaration::Contract(c) => c.end(),
        }
    }
}

/// A name as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name_pos: Position,
    pub name: String,
}

impl Node for Identifier {
    fn start(&self) -> Position {
        self.name_pos
    }

    fn end(&self) -> Position {
        self.name_pos.advance(self.name.len())
    }
}

/// Built-in value type such as `uint256` or `address payable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementaryType {
    pub value_pos: Position,
    /// Always a [`TokenKind::ElementaryType`].
    pub kind: TokenKind,
    pub value: String,
    /// Position of `payable` in `address payable`.
    pub payable: Option<Position>,
}

impl Node for ElementaryType {
    fn start(&self) -> Position {
        self.value_pos
    }

    fn end(&self) -> Position {
        match self.payable {
            Some(pos) => pos.advance(keywords::as_str(KeywordId::Payable).len()),
            None => self.value_pos.advance(self.value.len()),
        }
    }
}

impl fmt::Display for ElementaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        if self.payable.is_some() {
            f.write_str(" payable")?;
        }
        Ok(())
    }
}

/// Type of a parameter or state variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Elementary(ElementaryType),
    /// Contract, struct or enum name.
    UserDefined(Identifier),
    /// `T[]` or `T[N]`; `length` is the raw literal between the brackets.
    Array {
        base: Box<TypeName>,
        length: Option<String>,
        closing: Position,
    },
}

impl Node for TypeName {
    fn start(&self) -> Position {
        match self {
            TypeName::Elementary(t) => t.start(),
            TypeName::UserDefined(id) => id.start(),
            TypeName::Array { base, .. } => base.start(),
        }
    }

    fn end(&self) -> Position {
        match self {
            TypeName::Elementary(t) => t.end(),
            TypeName::UserDefined(id) => id.end(),
            TypeName::Array { closing, .. } => closing.advance(1),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Elementary(t) => write!(f, "{t}"),
            TypeName::UserDefined(id) => f.write_str(&id.name),
            TypeName::Array { base, length, .. } => write!(f, "{base}[{}]", length.as_deref().unwrap_or("")),
        }
    }
}

/// State variable: `uint256 public total = 1;`.
///
/// The initializer is not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// Always rooted in an elementary type; array suffixes wrap it.
    pub ty: TypeName,
    pub visibility: Option<Visibility>,
    pub mutability: Option<Mutability>,
    pub name: Identifier,
    pub semicolon: Position,
}

impl Node for VariableDeclaration {
    fn start(&self) -> Position {
        self.ty.start()
    }

    fn end(&self) -> Position {
        self.semicolon.advance(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub ty: FunctionType,
}

impl Node for FunctionDeclaration {
    fn start(&self) -> Position {
        self.ty.start()
    }

    fn end(&self) -> Position {
        self.ty.end()
    }
}

/// Everything of a function declaration except its name.
///
/// ## Notes
/// - Modifiers, `virtual`/`override` and return parameters are consumed but not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    /// Position of the `function` keyword.
    pub func_pos: Position,
    pub params: ParamList,
    pub visibility: Option<Visibility>,
    pub mutability: Option<Mutability>,
    pub body: FunctionBody,
}

impl Node for FunctionType {
    fn start(&self) -> Position {
        self.func_pos
    }

    fn end(&self) -> Position {
        self.body.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionBody {
    /// Bodiless declaration ending in `;`.
    Semicolon(Position),
    Block(Block),
}

impl Node for FunctionBody {
    fn start(&self) -> Position {
        match self {
            FunctionBody::Semicolon(pos) => *pos,
            FunctionBody::Block(block) => block.start(),
        }
    }

    fn end(&self) -> Position {
        match self {
            FunctionBody::Semicolon(pos) => pos.advance(1),
            FunctionBody::Block(block) => block.end(),
        }
    }
}

/// Braced block; statements inside are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub opening: Position,
    pub closing: Position,
}

impl Node for Block {
    fn start(&self) -> Position {
        self.opening
    }

    fn end(&self) -> Position {
        self.closing.advance(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamList {
    pub opening: Position,
    pub closing: Position,
    pub params: Vec<Param>,
}

impl Node for ParamList {
    fn start(&self) -> Position {
        self.opening
    }

    fn end(&self) -> Position {
        self.closing.advance(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: TypeName,
    pub location: Option<DataLocation>,
    pub name: Identifier,
}

impl Node for Param {
    fn start(&self) -> Position {
        self.ty.start()
    }

    fn end(&self) -> Position {
        self.name.end()
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)?;
        if let Some(location) = self.location {
            write!(f, " {location}")?;
        }
        write!(f, " {}", self.name.name)
    }
}

// ============================================================================
// Contracts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Contract,
    Library,
    Interface,
}

impl ContractKind {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Contract => Some(ContractKind::Contract),
            KeywordId::Library => Some(ContractKind::Library),
            KeywordId::Interface => Some(ContractKind::Interface),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            ContractKind::Contract => KeywordId::Contract,
            ContractKind::Library => KeywordId::Library,
            ContractKind::Interface => KeywordId::Interface,
        }
    }

    pub fn as_str(self) -> &'static str {
        keywords::as_str(self.keyword())
    }
}

/// `[abstract] contract|library|interface Name [is A, B] { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDefinition {
    pub kind: ContractKind,
    pub abstract_pos: Option<Position>,
    pub keyword_pos: Position,
    pub name: Identifier,
    pub bases: Vec<Identifier>,
    pub opening: Position,
    pub closing: Position,
    pub members: Vec<Declaration>,
}

impl ContractDefinition {
    pub fn is_abstract(&self) -> bool {
        self.abstract_pos.is_some()
    }
}

impl Node for ContractDefinition {
    fn start(&self) -> Position {
        self.abstract_pos.unwrap_or(self.keyword_pos)
    }

    fn end(&self) -> Position {
        self.closing.advance(1)
    }
}

// ============================================================================
// Comments
// ============================================================================

/// A `//` or `/* */` comment; `text` includes the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub slash: Position,
    pub text: String,
}

impl Comment {
    /// `///` and `/** */` comments document the declaration that follows them.
    pub fn is_doc(&self) -> bool {
        (self.text.starts_with("///") && !self.text.starts_with("////"))
            || (self.text.starts_with("/**") && self.text != "/**/")
    }

    /// Comment text without delimiters or leading `*` decoration.
    pub fn body(&self) -> String {
        if let Some(line) = self.text.strip_prefix("//") {
            return line.trim_start_matches('/').trim().to_string();
        }
        let inner = self
            .text
            .strip_prefix("/*")
            .and_then(|t| t.strip_suffix("*/"))
            .unwrap_or(&self.text);
        inner
            .trim_start_matches('*')
            .lines()
            .map(|line| line.trim().trim_start_matches('*').trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Node for Comment {
    fn start(&self) -> Position {
        self.slash
    }

    fn end(&self) -> Position {
        self.slash.advance(self.text.len())
    }
}

// ============================================================================
// Attributes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
    Internal,
    External,
}

impl Visibility {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Public => Some(Visibility::Public),
            KeywordId::Private => Some(Visibility::Private),
            KeywordId::Internal => Some(Visibility::Internal),
            KeywordId::External => Some(Visibility::External),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            Visibility::Public => KeywordId::Public,
            Visibility::Private => KeywordId::Private,
            Visibility::Internal => KeywordId::Internal,
            Visibility::External => KeywordId::External,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Pure,
    View,
    Payable,
    Constant,
    Immutable,
}

impl Mutability {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Pure => Some(Mutability::Pure),
            KeywordId::View => Some(Mutability::View),
            KeywordId::Payable => Some(Mutability::Payable),
            KeywordId::Constant => Some(Mutability::Constant),
            KeywordId::Immutable => Some(Mutability::Immutable),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            Mutability::Pure => KeywordId::Pure,
            Mutability::View => KeywordId::View,
            Mutability::Payable => KeywordId::Payable,
            Mutability::Constant => KeywordId::Constant,
            Mutability::Immutable => KeywordId::Immutable,
        }
    }

    /// `true` for the mutabilities a function may declare.
    pub fn applies_to_functions(self) -> bool {
        matches!(self, Mutability::Pure | Mutability::View | Mutability::Payable)
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataLocation {
    Memory,
    Storage,
    Calldata,
}

impl DataLocation {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Memory => Some(DataLocation::Memory),
            KeywordId::Storage => Some(DataLocation::Storage),
            KeywordId::Calldata => Some(DataLocation::Calldata),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            DataLocation::Memory => KeywordId::Memory,
            DataLocation::Storage => KeywordId::Storage,
            DataLocation::Calldata => KeywordId::Calldata,
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solbot_core::lang::types::ElementaryTypeId;

    fn ident(pos: usize, name: &str) -> Identifier {
        Identifier {
            name_pos: Position(pos),
            name: name.to_string(),
        }
    }

    fn uint256(pos: usize) -> ElementaryType {
        ElementaryType {
            value_pos: Position(pos),
            kind: TokenKind::ElementaryType(ElementaryTypeId::Uint(Some(256))),
            value: "uint256".to_string(),
            payable: None,
        }
    }

    #[test]
    fn test_identifier_range_is_name_length() {
        let id = ident(4, "owner");
        assert_eq!(id.start(), Position(4));
        assert_eq!(id.end(), Position(9));
        assert_eq!(id.span(), Span::new(4, 9));
    }

    #[test]
    fn test_address_payable_ends_after_payable() {
        let ty = ElementaryType {
            value_pos: Position(0),
            kind: TokenKind::ElementaryType(ElementaryTypeId::Address),
            value: "address".to_string(),
            payable: Some(Position(8)),
        };
        assert_eq!(ty.end(), Position(15));
        assert_eq!(ty.to_string(), "address payable");
    }

    #[test]
    fn test_variable_declaration_spans_type_to_semicolon() {
        let decl = Declaration::Variable(VariableDeclaration {
            ty: TypeName::Elementary(uint256(0)),
            visibility: None,
            mutability: None,
            name: ident(8, "x"),
            semicolon: Position(9),
        });
        assert_eq!(decl.span(), Span::new(0, 10));
        assert_eq!(decl.kind_str(), "variable");
    }

    #[test]
    fn test_empty_file_has_no_range() {
        let file = File::default();
        assert!(file.is_empty());
        assert_eq!(file.start(), None);
        assert_eq!(file.end(), None);
        assert_eq!(file.span(), None);
    }

    #[test]
    fn test_array_type_name_display_and_range() {
        let ty = TypeName::Array {
            base: Box::new(TypeName::Elementary(uint256(10))),
            length: Some("4".to_string()),
            closing: Position(19),
        };
        assert_eq!(ty.to_string(), "uint256[4]");
        assert_eq!(ty.span(), Span::new(10, 20));
    }

    #[test]
    fn test_doc_comment_detection() {
        let doc = Comment {
            slash: Position(0),
            text: "/// Deposit funds.".to_string(),
        };
        let block = Comment {
            slash: Position(0),
            text: "/**\n * Withdraw.\n * Reverts if empty.\n */".to_string(),
        };
        let plain = Comment {
            slash: Position(0),
            text: "// note".to_string(),
        };
        assert!(doc.is_doc());
        assert!(block.is_doc());
        assert!(!plain.is_doc());
        assert_eq!(doc.body(), "Deposit funds.");
        assert_eq!(block.body(), "Withdraw.\nReverts if empty.");
    }

    #[test]
    fn test_span_contains_is_end_inclusive() {
        let span = Span::new(2, 5);
        assert!(span.contains(2));
        assert!(span.contains(5));
        assert!(!span.contains(6));
        assert_eq!(span.merge(Span::new(0, 3)), Span::new(0, 5));
    }
}

//! Define the reserved keyword vocabulary for Solidity.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! aliases, and token-kind names.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are defined
//!   (`Contract` and `Library` are accepted alongside the lowercase spellings).
//! - Elementary type names (`uint256`, `address`, ...) are **not** keywords; they live in
//!   [`crate::lang::types`].
//! - `payable` is listed here as a mutability keyword. The parser also accepts it directly after
//!   `address` to form `address payable`.
//!
//! ## Examples
//! ```rust
//! use solbot_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("contract"), Some(KeywordId::Contract));
//! assert_eq!(keywords::from_str("Contract"), Some(KeywordId::Contract)); // alias
//! assert_eq!(keywords::from_str("Contract1"), None);
//! assert_eq!(keywords::name(KeywordId::Contract), "CONTRACT");
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - Accepted aliases are accessible via [`aliases`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Contract,
    Library,
    Interface,
    Abstract,
    Function,
    Modifier,
    Event,
    Error,
    Struct,
    Enum,
    Constructor,
    Fallback,
    Receive,
    Mapping,
    Using,
    Import,
    Pragma,
    Is,

    // Visibility
    Public,
    Private,
    Internal,
    External,

    // State mutability
    Pure,
    View,
    Payable,
    Constant,
    Immutable,

    // Data location
    Memory,
    Storage,
    Calldata,

    // Function/event modifiers
    Virtual,
    Override,
    Returns,
    Indexed,
    Anonymous,

    // Control flow / statements
    If,
    Else,
    For,
    While,
    Do,
    Break,
    Continue,
    Return,
    Emit,
    New,
    Delete,
    Try,
    Catch,
    Unchecked,
    Assembly,

    // Literals
    True,
    False,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and hover text.
/// - `aliases` are additional spellings accepted by the lexer.
/// - `name` is the stable token-kind name printed by token dumps (`CONTRACT`, `FUNCTION`, ...).
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub name: &'static str,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Contract, "contract", &["Contract"], "CONTRACT"),
    info(KeywordId::Library, "library", &["Library"], "LIBRARY"),
    info(KeywordId::Interface, "interface", &[], "INTERFACE"),
    info(KeywordId::Abstract, "abstract", &[], "ABSTRACT"),
    info(KeywordId::Function, "function", &[], "FUNCTION"),
    info(KeywordId::Modifier, "modifier", &[], "MODIFIER"),
    info(KeywordId::Event, "event", &[], "EVENT"),
    info(KeywordId::Error, "error", &[], "ERROR"),
    info(KeywordId::Struct, "struct", &[], "STRUCT"),
    info(KeywordId::Enum, "enum", &[], "ENUM"),
    info(KeywordId::Constructor, "constructor", &[], "CONSTRUCTOR"),
    info(KeywordId::Fallback, "fallback", &[], "FALLBACK"),
    info(KeywordId::Receive, "receive", &[], "RECEIVE"),
    info(KeywordId::Mapping, "mapping", &[], "MAPPING"),
    info(KeywordId::Using, "using", &[], "USING"),
    info(KeywordId::Import, "import", &[], "IMPORT"),
    info(KeywordId::Pragma, "pragma", &[], "PRAGMA"),
    info(KeywordId::Is, "is", &[], "IS"),
    // Visibility
    info(KeywordId::Public, "public", &[], "PUBLIC"),
    info(KeywordId::Private, "private", &[], "PRIVATE"),
    info(KeywordId::Internal, "internal", &[], "INTERNAL"),
    info(KeywordId::External, "external", &[], "EXTERNAL"),
    // State mutability
    info(KeywordId::Pure, "pure", &[], "PURE"),
    info(KeywordId::View, "view", &[], "VIEW"),
    info(KeywordId::Payable, "payable", &[], "PAYABLE"),
    info(KeywordId::Constant, "constant", &[], "CONSTANT"),
    info(KeywordId::Immutable, "immutable", &[], "IMMUTABLE"),
    // Data location
    info(KeywordId::Memory, "memory", &[], "MEMORY"),
    info(KeywordId::Storage, "storage", &[], "STORAGE"),
    info(KeywordId::Calldata, "calldata", &[], "CALLDATA"),
    // Function/event modifiers
    info(KeywordId::Virtual, "virtual", &[], "VIRTUAL"),
    info(KeywordId::Override, "override", &[], "OVERRIDE"),
    info(KeywordId::Returns, "returns", &[], "RETURNS"),
    info(KeywordId::Indexed, "indexed", &[], "INDEXED"),
    info(KeywordId::Anonymous, "anonymous", &[], "ANONYMOUS"),
    // Control flow / statements
    info(KeywordId::If, "if", &[], "IF"),
    info(KeywordId::Else, "else", &[], "ELSE"),
    info(KeywordId::For, "for", &[], "FOR"),
    info(KeywordId::While, "while", &[], "WHILE"),
    info(KeywordId::Do, "do", &[], "DO"),
    info(KeywordId::Break, "break", &[], "BREAK"),
    info(KeywordId::Continue, "continue", &[], "CONTINUE"),
    info(KeywordId::Return, "return", &[], "RETURN"),
    info(KeywordId::Emit, "emit", &[], "EMIT"),
    info(KeywordId::New, "new", &[], "NEW"),
    info(KeywordId::Delete, "delete", &[], "DELETE"),
    info(KeywordId::Try, "try", &[], "TRY"),
    info(KeywordId::Catch, "catch", &[], "CATCH"),
    info(KeywordId::Unchecked, "unchecked", &[], "UNCHECKED"),
    info(KeywordId::Assembly, "assembly", &[], "ASSEMBLY"),
    // Literals
    info(KeywordId::True, "true", &[], "TRUE"),
    info(KeywordId::False, "false", &[], "FALSE"),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Aliases.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - A slice of accepted alias spellings.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Stable token-kind name (e.g. `"FUNCTION"`).
pub fn name(id: KeywordId) -> &'static str {
    info_for(id).name
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Parameters
/// - `s`: Candidate keyword spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive** and exact: `"Contract1"` is not a keyword.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    name: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        name,
    }
}

//! Operator vocabulary.
//!
//! This module defines the canonical symbol-operator set and the stable token-kind name each
//! operator prints as in token dumps.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - `=>` and `->` are punctuation, not operators; see [`crate::lang::punctuation`].
//! - `>>` is the arithmetic shift (`SAR`) and `>>>` the logical shift (`SHR`).
//!
//! ## Examples
//! ```rust
//! use solbot_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<<="), Some(OperatorId::ShlAssign));
//! assert_eq!(operators::name(OperatorId::ShlAssign), "ASSIGN_SHL");
//! assert_eq!(operators::as_str(OperatorId::Sar), ">>");
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Logical / comparison
    Not,
    NotEq,
    EqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AndAnd,
    OrOr,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    Inc,
    Dec,

    // Bitwise / shifts
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Shl,
    Sar,
    Shr,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShlAssign,
    SarAssign,
    ShrAssign,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `name` is the stable token-kind name (e.g. `ASSIGN_SAR`).
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub name: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Logical / comparison
    op(OperatorId::Not, "!", "NOT"),
    op(OperatorId::NotEq, "!=", "NOT_EQUAL"),
    op(OperatorId::EqEq, "==", "EQUAL"),
    op(OperatorId::Lt, "<", "LESS_THAN"),
    op(OperatorId::LtEq, "<=", "LESS_THAN_OR_EQUAL"),
    op(OperatorId::Gt, ">", "GREATER_THAN"),
    op(OperatorId::GtEq, ">=", "GREATER_THAN_OR_EQUAL"),
    op(OperatorId::AndAnd, "&&", "AND"),
    op(OperatorId::OrOr, "||", "OR"),
    // Arithmetic
    op(OperatorId::Add, "+", "ADD"),
    op(OperatorId::Sub, "-", "SUB"),
    op(OperatorId::Mul, "*", "MUL"),
    op(OperatorId::Div, "/", "DIV"),
    op(OperatorId::Mod, "%", "MOD"),
    op(OperatorId::Exp, "**", "EXP"),
    op(OperatorId::Inc, "++", "INC"),
    op(OperatorId::Dec, "--", "DEC"),
    // Bitwise / shifts
    op(OperatorId::BitAnd, "&", "BIT_AND"),
    op(OperatorId::BitOr, "|", "BIT_OR"),
    op(OperatorId::BitXor, "^", "BIT_XOR"),
    op(OperatorId::BitNot, "~", "BIT_NOT"),
    op(OperatorId::Shl, "<<", "SHL"),
    op(OperatorId::Sar, ">>", "SAR"),
    op(OperatorId::Shr, ">>>", "SHR"),
    // Assignment
    op(OperatorId::Assign, "=", "ASSIGN"),
    op(OperatorId::AddAssign, "+=", "ASSIGN_ADD"),
    op(OperatorId::SubAssign, "-=", "ASSIGN_SUB"),
    op(OperatorId::MulAssign, "*=", "ASSIGN_MUL"),
    op(OperatorId::DivAssign, "/=", "ASSIGN_DIV"),
    op(OperatorId::ModAssign, "%=", "ASSIGN_MOD"),
    op(OperatorId::BitAndAssign, "&=", "ASSIGN_BIT_AND"),
    op(OperatorId::BitOrAssign, "|=", "ASSIGN_BIT_OR"),
    op(OperatorId::BitXorAssign, "^=", "ASSIGN_BIT_XOR"),
    op(OperatorId::ShlAssign, "<<=", "ASSIGN_SHL"),
    op(OperatorId::SarAssign, ">>=", "ASSIGN_SAR"),
    op(OperatorId::ShrAssign, ">>>=", "ASSIGN_SHR"),
];

/// Return the full metadata entry for an operator.
///
/// ## Parameters
/// - `id`: Operator identifier.
///
/// ## Returns
/// - The associated [`OperatorInfo`] from [`OPERATORS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Operator spelling (e.g. `"<<="`).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Stable token-kind name (e.g. `"ASSIGN_SHL"`).
pub fn name(id: OperatorId) -> &'static str {
    info_for(id).name
}

/// Resolve an operator spelling to its identifier.
///
/// ## Parameters
/// - `spelling`: Candidate operator token.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, name: &'static str) -> OperatorInfo {
    OperatorInfo { id, spelling, name }
}

//! Elementary type name vocabulary.
//!
//! Solidity's built-in value types are reserved words, but unlike keywords they come in sized
//! families: `uint8` through `uint256` in steps of 8, `bytes1` through `bytes32`, and
//! `fixedMxN`/`ufixedMxN`. This module keeps one registry row per **family** and parses concrete
//! spellings into an [`ElementaryTypeId`] that records the exact size.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `uint07`, `uint7`, `bytes33`, and
//!   `Uint256` are not elementary types (they lex as identifiers).
//! - The bare spellings `int`, `uint`, `fixed`, and `ufixed` are kept distinct from their sized
//!   aliases so `Display` always reproduces the source spelling.
//!
//! ## Examples
//! ```rust
//! use solbot_core::lang::types::{self, ElementaryTypeFamily, ElementaryTypeId};
//!
//! assert_eq!(types::from_str("uint256"), Some(ElementaryTypeId::Uint(Some(256))));
//! assert_eq!(types::from_str("uint"), Some(ElementaryTypeId::Uint(None)));
//! assert_eq!(types::from_str("uint7"), None);
//! assert_eq!(ElementaryTypeId::Uint(None).bits(), Some(256));
//! assert_eq!(ElementaryTypeId::FixedBytes(32).family(), ElementaryTypeFamily::FixedBytes);
//! assert_eq!(ElementaryTypeId::Uint(Some(256)).token_name(), "UINT_256");
//! assert_eq!(ElementaryTypeId::Fixed(Some((128, 18))).to_string(), "fixed128x18");
//! ```

use std::fmt;

/// Family of an elementary type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementaryTypeFamily {
    Address,
    Bool,
    String,
    Bytes,
    FixedBytes,
    Int,
    Uint,
    Fixed,
    Ufixed,
}

/// Metadata for an elementary type family.
///
/// ## Notes
/// - `prefix` is the bare spelling; sized members append their size to it.
/// - `name` is the token-kind name stem (`UINT` for `UINT_256`).
#[derive(Debug, Clone, Copy)]
pub struct ElementaryTypeInfo {
    pub family: ElementaryTypeFamily,
    pub prefix: &'static str,
    pub name: &'static str,
}

/// Registry of elementary type families.
pub const ELEMENTARY_TYPES: &[ElementaryTypeInfo] = &[
    info(ElementaryTypeFamily::Address, "address", "ADDRESS"),
    info(ElementaryTypeFamily::Bool, "bool", "BOOL"),
    info(ElementaryTypeFamily::String, "string", "STRING"),
    info(ElementaryTypeFamily::Bytes, "bytes", "BYTES"),
    info(ElementaryTypeFamily::FixedBytes, "bytes", "BYTES"),
    info(ElementaryTypeFamily::Int, "int", "INT"),
    info(ElementaryTypeFamily::Uint, "uint", "UINT"),
    info(ElementaryTypeFamily::Fixed, "fixed", "FIXED"),
    info(ElementaryTypeFamily::Ufixed, "ufixed", "UFIXED"),
];

/// Concrete elementary type spelling.
///
/// ## Notes
/// - `Int(None)` is the bare `int` spelling; `Int(Some(256))` is `int256`.
/// - Fixed-point sizes are `(total bits, fractional decimal digits)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementaryTypeId {
    Address,
    Bool,
    String,
    Bytes,
    FixedBytes(u8),
    Int(Option<u16>),
    Uint(Option<u16>),
    Fixed(Option<(u16, u8)>),
    Ufixed(Option<(u16, u8)>),
}

impl ElementaryTypeId {
    /// Family this spelling belongs to.
    pub fn family(self) -> ElementaryTypeFamily {
        match self {
            ElementaryTypeId::Address => ElementaryTypeFamily::Address,
            ElementaryTypeId::Bool => ElementaryTypeFamily::Bool,
            ElementaryTypeId::String => ElementaryTypeFamily::String,
            ElementaryTypeId::Bytes => ElementaryTypeFamily::Bytes,
            ElementaryTypeId::FixedBytes(_) => ElementaryTypeFamily::FixedBytes,
            ElementaryTypeId::Int(_) => ElementaryTypeFamily::Int,
            ElementaryTypeId::Uint(_) => ElementaryTypeFamily::Uint,
            ElementaryTypeId::Fixed(_) => ElementaryTypeFamily::Fixed,
            ElementaryTypeId::Ufixed(_) => ElementaryTypeFamily::Ufixed,
        }
    }

    /// Effective width in bits, for integer and fixed-point spellings.
    pub fn bits(self) -> Option<u16> {
        match self {
            ElementaryTypeId::Int(bits) | ElementaryTypeId::Uint(bits) => Some(bits.unwrap_or(256)),
            ElementaryTypeId::Fixed(size) | ElementaryTypeId::Ufixed(size) => Some(size.map_or(128, |(m, _)| m)),
            ElementaryTypeId::FixedBytes(n) => Some(u16::from(n) * 8),
            ElementaryTypeId::Address => Some(160),
            ElementaryTypeId::Bool | ElementaryTypeId::String | ElementaryTypeId::Bytes => None,
        }
    }

    /// Stable token-kind name, e.g. `UINT_256`, `BYTES_32`, `FIXED_128X18`, `ADDRESS`.
    pub fn token_name(self) -> String {
        let stem = info_for(self.family()).name;
        match self {
            ElementaryTypeId::FixedBytes(n) => format!("{stem}_{n}"),
            ElementaryTypeId::Int(Some(bits)) | ElementaryTypeId::Uint(Some(bits)) => format!("{stem}_{bits}"),
            ElementaryTypeId::Fixed(Some((m, n))) | ElementaryTypeId::Ufixed(Some((m, n))) => {
                format!("{stem}_{m}X{n}")
            }
            _ => stem.to_string(),
        }
    }
}

impl fmt::Display for ElementaryTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = info_for(self.family()).prefix;
        match self {
            ElementaryTypeId::FixedBytes(n) => write!(f, "{prefix}{n}"),
            ElementaryTypeId::Int(Some(bits)) | ElementaryTypeId::Uint(Some(bits)) => write!(f, "{prefix}{bits}"),
            ElementaryTypeId::Fixed(Some((m, n))) | ElementaryTypeId::Ufixed(Some((m, n))) => {
                write!(f, "{prefix}{m}x{n}")
            }
            _ => f.write_str(prefix),
        }
    }
}

/// Full metadata for a family.
///
/// ## Panics
/// - If the registry is missing an entry for `family` (this indicates a programming error).
pub fn info_for(family: ElementaryTypeFamily) -> &'static ElementaryTypeInfo {
    ELEMENTARY_TYPES
        .iter()
        .find(|t| t.family == family)
        .expect("elementary type info missing")
}

/// Resolve a spelling to an [`ElementaryTypeId`].
///
/// ## Parameters
/// - `s`: Candidate type name, e.g. `"uint256"` or `"bytes4"`.
///
/// ## Returns
/// - `Some(ElementaryTypeId)` if `s` is exactly a valid elementary type spelling.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<ElementaryTypeId> {
    match s {
        "address" => return Some(ElementaryTypeId::Address),
        "bool" => return Some(ElementaryTypeId::Bool),
        "string" => return Some(ElementaryTypeId::String),
        "bytes" => return Some(ElementaryTypeId::Bytes),
        "int" => return Some(ElementaryTypeId::Int(None)),
        "uint" => return Some(ElementaryTypeId::Uint(None)),
        "fixed" => return Some(ElementaryTypeId::Fixed(None)),
        "ufixed" => return Some(ElementaryTypeId::Ufixed(None)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("uint") {
        return integer_bits(rest).map(|b| ElementaryTypeId::Uint(Some(b)));
    }
    if let Some(rest) = s.strip_prefix("int") {
        return integer_bits(rest).map(|b| ElementaryTypeId::Int(Some(b)));
    }
    if let Some(rest) = s.strip_prefix("bytes") {
        return decimal(rest)
            .filter(|n| (1..=32).contains(n))
            .map(|n| ElementaryTypeId::FixedBytes(n as u8));
    }
    if let Some(rest) = s.strip_prefix("ufixed") {
        return fixed_size(rest).map(|size| ElementaryTypeId::Ufixed(Some(size)));
    }
    if let Some(rest) = s.strip_prefix("fixed") {
        return fixed_size(rest).map(|size| ElementaryTypeId::Fixed(Some(size)));
    }
    None
}

/// Every non-fixed-point spelling, plus the bare `fixed`/`ufixed`.
///
/// ## Notes
/// - Sized fixed-point spellings are omitted; there are several thousand of them.
pub fn common_spellings() -> Vec<ElementaryTypeId> {
    let mut out = vec![
        ElementaryTypeId::Address,
        ElementaryTypeId::Bool,
        ElementaryTypeId::String,
        ElementaryTypeId::Bytes,
        ElementaryTypeId::Int(None),
        ElementaryTypeId::Uint(None),
        ElementaryTypeId::Fixed(None),
        ElementaryTypeId::Ufixed(None),
    ];
    out.extend((1..=32u8).map(ElementaryTypeId::FixedBytes));
    for bits in (8..=256u16).step_by(8) {
        out.push(ElementaryTypeId::Int(Some(bits)));
        out.push(ElementaryTypeId::Uint(Some(bits)));
    }
    out
}

// --- helpers -----------------------------------------------------------------

/// Parse a canonical decimal (no sign, no leading zeros).
fn decimal(digits: &str) -> Option<u16> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

fn integer_bits(digits: &str) -> Option<u16> {
    decimal(digits).filter(|b| (8..=256).contains(b) && b % 8 == 0)
}

fn fixed_size(rest: &str) -> Option<(u16, u8)> {
    let (m, n) = rest.split_once('x')?;
    let m = integer_bits(m)?;
    let n = decimal(n).filter(|n| *n <= 80)?;
    Some((m, n as u8))
}

const fn info(family: ElementaryTypeFamily, prefix: &'static str, name: &'static str) -> ElementaryTypeInfo {
    ElementaryTypeInfo { family, prefix, name }
}

//! Maximal-munch tables for operator and arrow families.
//!
//! Each family is a small trie of [`Munch`] nodes. Every node is a complete token on its own,
//! so the scanner follows matching branches greedily and emits the deepest node it reaches:
//! `>`, `>>`, `>>>` and `>>>=` all live under the same root.

use solbot_core::lang::operators::OperatorId;
use solbot_core::lang::punctuation::PunctuationId;

use super::TokenKind;

/// One node of a munch trie.
#[derive(Debug)]
pub(crate) struct Munch {
    pub ch: char,
    pub kind: TokenKind,
    pub then: &'static [Munch],
}

const fn op(ch: char, id: OperatorId, then: &'static [Munch]) -> Munch {
    Munch {
        ch,
        kind: TokenKind::Operator(id),
        then,
    }
}

const fn punct(ch: char, id: PunctuationId) -> Munch {
    Munch {
        ch,
        kind: TokenKind::Punctuation(id),
        then: &[],
    }
}

/// Roots of every family, keyed by their first character.
pub(crate) const FAMILIES: &[Munch] = &[
    op('!', OperatorId::Not, &[op('=', OperatorId::NotEq, &[])]),
    op(
        '=',
        OperatorId::Assign,
        &[op('=', OperatorId::EqEq, &[]), punct('>', PunctuationId::DoubleArrow)],
    ),
    op(
        '+',
        OperatorId::Add,
        &[op('=', OperatorId::AddAssign, &[]), op('+', OperatorId::Inc, &[])],
    ),
    op(
        '-',
        OperatorId::Sub,
        &[
            punct('>', PunctuationId::RightArrow),
            op('=', OperatorId::SubAssign, &[]),
            op('-', OperatorId::Dec, &[]),
        ],
    ),
    op(
        '<',
        OperatorId::Lt,
        &[
            op('=', OperatorId::LtEq, &[]),
            op('<', OperatorId::Shl, &[op('=', OperatorId::ShlAssign, &[])]),
        ],
    ),
    op(
        '>',
        OperatorId::Gt,
        &[
            op('=', OperatorId::GtEq, &[]),
            op(
                '>',
                OperatorId::Sar,
                &[
                    op('=', OperatorId::SarAssign, &[]),
                    op('>', OperatorId::Shr, &[op('=', OperatorId::ShrAssign, &[])]),
                ],
            ),
        ],
    ),
    op(
        '*',
        OperatorId::Mul,
        &[op('=', OperatorId::MulAssign, &[]), op('*', OperatorId::Exp, &[])],
    ),
    // `//` and `/*` are comments and never reach the munch tables.
    op('/', OperatorId::Div, &[op('=', OperatorId::DivAssign, &[])]),
    op('%', OperatorId::Mod, &[op('=', OperatorId::ModAssign, &[])]),
    op(
        '&',
        OperatorId::BitAnd,
        &[op('=', OperatorId::BitAndAssign, &[]), op('&', OperatorId::AndAnd, &[])],
    ),
    op(
        '|',
        OperatorId::BitOr,
        &[op('=', OperatorId::BitOrAssign, &[]), op('|', OperatorId::OrOr, &[])],
    ),
    op('^', OperatorId::BitXor, &[op('=', OperatorId::BitXorAssign, &[])]),
    op('~', OperatorId::BitNot, &[]),
];

/// Root node for a family starting with `c`.
pub(crate) fn root(c: char) -> Option<&'static Munch> {
    FAMILIES.iter().find(|m| m.ch == c)
}

/// Branch of `node` taken on `c`.
pub(crate) fn step(node: &'static Munch, c: char) -> Option<&'static Munch> {
    node.then.iter().find(|m| m.ch == c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Collect `(spelling, kind)` for every node reachable from the roots.
    fn spellings() -> Vec<(String, TokenKind)> {
        fn walk(node: &'static Munch, prefix: &str, out: &mut Vec<(String, TokenKind)>) {
            let spelling = format!("{prefix}{}", node.ch);
            out.push((spelling.clone(), node.kind));
            for next in node.then {
                walk(next, &spelling, out);
            }
        }
        let mut out = Vec::new();
        for root in FAMILIES {
            walk(root, "", &mut out);
        }
        out
    }

    #[test]
    fn test_roots_are_unique() {
        let mut seen = HashSet::new();
        for root in FAMILIES {
            assert!(seen.insert(root.ch), "duplicate munch root {:?}", root.ch);
        }
    }

    #[test]
    fn test_every_node_spells_its_kind() {
        for (spelling, kind) in spellings() {
            let expected = match kind {
                TokenKind::Operator(id) => solbot_core::lang::operators::as_str(id),
                TokenKind::Punctuation(id) => solbot_core::lang::punctuation::as_str(id),
                other => panic!("unexpected munch kind {other:?}"),
            };
            assert_eq!(spelling, expected);
        }
    }

    #[test]
    fn test_every_operator_is_reachable() {
        let reachable: HashSet<String> = spellings().into_iter().map(|(s, _)| s).collect();
        for info in solbot_core::lang::operators::OPERATORS {
            assert!(reachable.contains(info.spelling), "operator {:?} has no munch path", info.spelling);
        }
    }
}

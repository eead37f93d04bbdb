use std::collections::HashMap;

use solbot_core::lang::keywords;
use solbot_core::lang::operators;
use solbot_core::lang::punctuation;
use solbot_core::lang::types;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                keywords::from_str(alias),
                Some(info.id),
                "keyword alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!(
                    "duplicate keyword alias spelling {:?}: {:?} and {:?}",
                    alias, prev, info.id
                );
            }
        }
    }
}

#[test]
fn keywords_do_not_shadow_elementary_types() {
    for info in keywords::KEYWORDS {
        assert_eq!(
            types::from_str(info.canonical),
            None,
            "keyword {:?} is also an elementary type spelling",
            info.canonical
        );
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
        assert_eq!(
            punctuation::from_str(info.spelling),
            None,
            "operator spelling {:?} is also punctuation",
            info.spelling
        );
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation spelling not resolvable: {}",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

/// Token-kind names are a closed contract shared by every registry; no two entries may print the same name.
#[test]
fn token_kind_names_unique_across_registries() {
    let mut seen: HashMap<String, &'static str> = HashMap::new();
    let mut record = |name: String, origin: &'static str| {
        assert!(
            name.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
            "token-kind name {name:?} ({origin}) is not upper-snake"
        );
        if let Some(prev) = seen.insert(name.clone(), origin) {
            panic!("token-kind name {name:?} used by both {prev} and {origin}");
        }
    };

    for info in keywords::KEYWORDS {
        record(info.name.to_string(), "keywords");
    }
    for info in operators::OPERATORS {
        record(info.name.to_string(), "operators");
    }
    for info in punctuation::PUNCTUATION {
        record(info.name.to_string(), "punctuation");
    }
    for id in types::common_spellings() {
        record(id.token_name(), "types");
    }
    for reserved in ["IDENTIFIER", "DECIMAL_NUMBER", "HEX_NUMBER", "STRING_LITERAL", "ILLEGAL", "EOF"] {
        record(reserved.to_string(), "token model");
    }
}

#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms, on exact node ranges, and on
/// the parser’s error recovery behavior (one diagnostic per malformed declaration, no cascade).
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticKind, Severity};

    fn parse_ok(source: &str) -> File {
        let result = parse_file(source);
        assert!(
            result.diagnostics.is_empty(),
            "unexpected diagnostics for {source:?}: {:#?}",
            result.diagnostics
        );
        result.file
    }

    fn only_function(file: &File) -> &FunctionDeclaration {
        assert_eq!(file.declarations.len(), 1);
        match &file.declarations[0] {
            Declaration::Function(f) => f,
            other => panic!("Expected function, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_state_variable() {
        let file = parse_ok("uint256 x;");
        assert_eq!(file.declarations.len(), 1);
        match &file.declarations[0] {
            Declaration::Variable(v) => {
                assert_eq!(v.ty.to_string(), "uint256");
                assert_eq!(v.name.name, "x");
                assert_eq!(v.name.name_pos, Position(8));
                assert_eq!(v.semicolon, Position(9));
            }
            other => panic!("Expected variable, got {other:?}"),
        }
        assert_eq!(file.span(), Some(Span::new(0, 10)));
    }

    #[test]
    fn test_parse_variable_attributes_and_initializer() {
        let file = parse_ok("address payable public constant OWNER = address(0x1);");
        match &file.declarations[0] {
            Declaration::Variable(v) => {
                assert_eq!(v.ty.to_string(), "address payable");
                let TypeName::Elementary(ty) = &v.ty else {
                    panic!("Expected elementary type, got {:?}", v.ty);
                };
                assert_eq!(ty.payable, Some(Position(8)));
                assert_eq!(v.visibility, Some(Visibility::Public));
                assert_eq!(v.mutability, Some(Mutability::Constant));
                assert_eq!(v.name.name, "OWNER");
                assert_eq!(v.end(), Position(53));
            }
            other => panic!("Expected variable, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_array_state_variable() {
        let file = parse_ok("uint256[] public values;\nbytes32[2][] grid;");
        assert_eq!(file.declarations.len(), 2);
        match &file.declarations[0] {
            Declaration::Variable(v) => {
                assert_eq!(v.ty.to_string(), "uint256[]");
                assert_eq!(v.visibility, Some(Visibility::Public));
                assert_eq!(v.name.name, "values");
                assert_eq!(v.span(), Span::new(0, 24));
            }
            other => panic!("Expected variable, got {other:?}"),
        }
        match &file.declarations[1] {
            Declaration::Variable(v) => assert_eq!(v.ty.to_string(), "bytes32[2][]"),
            other => panic!("Expected variable, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_function_with_body() {
        let source = "function deposit(uint256 amount) public { balances[msg.sender] += amount; }";
        let file = parse_ok(source);
        let f = only_function(&file);
        assert_eq!(f.name.name, "deposit");
        assert_eq!(f.ty.params.params.len(), 1);
        assert_eq!(f.ty.params.params[0].name.name, "amount");
        assert_eq!(f.ty.visibility, Some(Visibility::Public));
        assert_eq!(f.start(), Position(0));
        assert_eq!(f.end().offset(), source.len());
        match &f.ty.body {
            FunctionBody::Block(block) => {
                assert_eq!(block.opening, Position(40));
                assert_eq!(block.closing.offset(), source.len() - 1);
            }
            other => panic!("Expected block body, got {other:?}"),
        }
    }

    #[test]
    fn test_declaration_after_function_body_is_parsed() {
        let file = parse_ok("function f() public { if (a) { b(); } } uint256 y;");
        assert_eq!(file.declarations.len(), 2);
        assert_eq!(file.declarations[0].name().name, "f");
        assert_eq!(file.declarations[1].name().name, "y");
    }

    #[test]
    fn test_parse_bodiless_function_with_returns() {
        let file = parse_ok("function balanceOf(address owner) external view returns (uint256 balance);");
        let f = only_function(&file);
        assert_eq!(f.ty.visibility, Some(Visibility::External));
        assert_eq!(f.ty.mutability, Some(Mutability::View));
        assert!(matches!(f.ty.body, FunctionBody::Semicolon(_)));
    }

    #[test]
    fn test_parse_params_with_locations_and_arrays() {
        let file = parse_ok("function f(string memory name, IERC20 token, uint256[2] calldata pair) {}");
        let params = &only_function(&file).ty.params.params;
        assert_eq!(params.len(), 3);
        assert_eq!(params[0].location, Some(DataLocation::Memory));
        assert!(matches!(params[1].ty, TypeName::UserDefined(ref id) if id.name == "IERC20"));
        assert_eq!(params[2].ty.to_string(), "uint256[2]");
        assert_eq!(params[2].location, Some(DataLocation::Calldata));
        assert_eq!(params[2].to_string(), "uint256[2] calldata pair");
    }

    #[test]
    fn test_missing_identifier_reports_once() {
        let result = parse_file("uint256 ;");
        assert!(result.file.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.message, "expected IDENTIFIER, got SEMICOLON instead (at offset 8)");
        assert_eq!(diag.span, Span::new(8, 9));
        assert_eq!(diag.kind, DiagnosticKind::Syntax);
        assert_eq!(diag.severity, Severity::Error);
    }

    #[test]
    fn test_recovery_keeps_following_declarations() {
        let result = parse_file("uint256 ; function f(uint256) public {} bool ok;");
        assert_eq!(result.diagnostics.len(), 2, "{:#?}", result.diagnostics);
        assert_eq!(
            result.diagnostics[1].message,
            "expected IDENTIFIER, got RPAREN instead (at offset 28)"
        );
        assert_eq!(result.file.declarations.len(), 1);
        assert_eq!(result.file.declarations[0].name().name, "ok");
    }

    #[test]
    fn test_missing_semicolon_at_eof() {
        let result = parse_file("uint256 x");
        assert!(result.file.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "expected SEMICOLON, got EOF instead (at offset 9)"
        );
    }

    #[test]
    fn test_unclosed_function_body() {
        let result = parse_file("function f() public { x = 1;");
        assert!(result.file.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.starts_with("expected RBRACE, got EOF"));
    }

    #[test]
    fn test_skipped_region_is_one_warning() {
        let result = parse_file("pragma solidity ^0.8.0; uint256 x;");
        assert_eq!(result.file.declarations.len(), 1);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "expected declaration, got PRAGMA instead (at offset 0)");
        assert_eq!(diag.span, Span::new(0, 23));
        assert!(!result.has_errors());
    }

    #[test]
    fn test_skipped_braced_region_ends_at_matching_brace() {
        let result = parse_file("struct S { uint256 a; uint256 b; } uint256 z;");
        assert_eq!(result.file.declarations.len(), 1);
        assert_eq!(result.file.declarations[0].name().name, "z");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].span, Span::new(0, 34));
    }

    #[test]
    fn test_import_with_braces_is_one_region() {
        let source = "import {A} from \"./A.sol\";\nusing {add} for uint256;\nuint256 z;";
        let result = parse_file(source);
        assert_eq!(result.file.declarations.len(), 1);
        let spans: Vec<Span> = result.diagnostics.iter().map(|d| d.span).collect();
        assert_eq!(spans, [Span::new(0, 26), Span::new(27, 51)]);
        assert_eq!(
            result.diagnostics[0].message,
            "expected declaration, got IMPORT instead (at offset 0)"
        );
    }

    #[test]
    fn test_failed_declaration_stops_after_its_body() {
        // Recovery from a malformed function must not swallow the following construct
        let result = parse_file("function f(uint256) {} foo bar;");
        assert_eq!(result.diagnostics.len(), 2, "{:#?}", result.diagnostics);
        assert_eq!(result.diagnostics[1].severity, Severity::Warning);
        assert_eq!(result.diagnostics[1].span, Span::new(23, 31));
    }

    #[test]
    fn test_report_skipped_can_be_disabled() {
        let config = ParseConfig::new().with_report_skipped(false);
        let result = parse_file_with_config("import \"./A.sol\"; event E(uint256 a); uint256 x;", &config);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.file.declarations.len(), 1);
    }

    #[test]
    fn test_parse_contract_with_members() {
        let source = r#"
abstract contract Vault is Ownable(msg.sender), Pausable {
    mapping(address => uint256) public balances;
    uint256 public total;

    function deposit(uint256 amount) public payable {
        balances[msg.sender] += amount;
    }

    function withdraw(uint256 amount) external virtual;
}
"#;
        let result = parse_file(source);
        assert_eq!(result.file.declarations.len(), 1);
        let contract = match &result.file.declarations[0] {
            Declaration::Contract(c) => c,
            other => panic!("Expected contract, got {other:?}"),
        };
        assert_eq!(contract.kind, ContractKind::Contract);
        assert!(contract.is_abstract());
        assert_eq!(contract.name.name, "Vault");
        let bases: Vec<&str> = contract.bases.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(bases, vec!["Ownable", "Pausable"]);
        let members: Vec<&str> = contract.members.iter().map(|m| m.name().name.as_str()).collect();
        assert_eq!(members, vec!["total", "deposit", "withdraw"]);
        // The mapping is skipped with a warning; nothing else is reported.
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Warning);
        assert_eq!(contract.end().offset(), source.trim_end().len());
    }

    #[test]
    fn test_malformed_member_does_not_close_contract() {
        let result = parse_file("contract A { uint256 ; function f() public {} }");
        assert_eq!(result.diagnostics.len(), 1);
        match &result.file.declarations[0] {
            Declaration::Contract(c) => assert_eq!(c.members.len(), 1),
            other => panic!("Expected contract, got {other:?}"),
        }
    }

    #[test]
    fn test_member_missing_semicolon_before_closing_brace() {
        let result = parse_file("library L { uint256 x } uint256 y;");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "expected SEMICOLON, got RBRACE instead (at offset 22)"
        );
        assert_eq!(result.file.declarations.len(), 2);
    }

    #[test]
    fn test_unclosed_contract_reports_once() {
        let result = parse_file("contract A { function f() public {");
        assert!(result.file.is_empty());
        assert_eq!(result.diagnostics.len(), 1, "{:#?}", result.diagnostics);
    }

    #[test]
    fn test_illegal_character_stops_parse_and_keeps_prefix() {
        let result = parse_file("uint256 a; uint256 b # c;");
        assert_eq!(result.file.declarations.len(), 1);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.kind, DiagnosticKind::Lexical);
        assert_eq!(diag.message, "Unrecognised character in source unit: '#'");
        assert_eq!(diag.span, Span::new(21, 21));
    }

    #[test]
    fn test_empty_file() {
        for source in ["", "  \n\t", "// only a comment\n"] {
            let result = parse_file(source);
            assert!(result.file.is_empty());
            assert!(result.diagnostics.is_empty());
            assert_eq!(result.file.span(), None);
        }
    }

    #[test]
    fn test_stray_closing_brace_is_skipped() {
        let result = parse_file("} uint256 x;");
        assert_eq!(result.file.declarations.len(), 1);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].span, Span::new(0, 1));
    }

    #[test]
    fn test_threaded_mode_matches_inline() {
        let source = "/// Total supply.\nuint256 public total;\nfunction f(uint256 a) public { a; }\ncontract C { bool b; }";
        let threaded = parse_file_with_config(
            source,
            &ParseConfig::new()
                .with_lexer_mode(LexerMode::Threaded)
                .with_lookahead_capacity(1),
        );
        assert_eq!(threaded, parse_file(source));
    }

    #[test]
    fn test_doc_comment_before_declaration() {
        let source = "/// Total\n/// supply.\nuint256 total;\n// plain\nbool b;";
        let result = parse_file(source);
        let total = result.file.declarations[0].start().offset();
        let b = result.file.declarations[1].start().offset();
        assert_eq!(result.doc_comment_before(source, total), Some("Total\nsupply.".to_string()));
        assert_eq!(result.doc_comment_before(source, b), None);
    }

    #[test]
    fn test_parser_accepts_any_token_source() {
        let tokens = vec![
            Token::new(TokenKind::ElementaryType(ElementaryTypeId::Bool), "bool", Position(0)),
            Token::new(TokenKind::Identifier, "ok", Position(5)),
            Token::new(TokenKind::Punctuation(PunctuationId::Semicolon), ";", Position(7)),
        ];
        // No terminal token: an exhausted source reads as `Eof`.
        let (file, diagnostics) = Parser::new(tokens.into_iter(), &ParseConfig::default()).parse_file();
        assert!(diagnostics.is_empty());
        assert_eq!(file.declarations.len(), 1);
    }

    #[test]
    fn test_diagnostics_snapshot() {
        let result = parse_file("uint256 ;\nfunction (uint256 a) {}\nusing L for uint256;\n");
        let rendered: Vec<String> = result
            .diagnostics
            .iter()
            .map(|d| format!("{} {}..{}: {}", d.severity, d.span.start, d.span.end, d.message))
            .collect();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        error 8..9: expected IDENTIFIER, got SEMICOLON instead (at offset 8)
        error 19..20: expected IDENTIFIER, got LPAREN instead (at offset 19)
        warning 34..54: expected declaration, got USING instead (at offset 34)
        ");
    }
}

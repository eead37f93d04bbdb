#![no_main]

use libfuzzer_sys::fuzz_target;
use solbot::ast::Node;
use solbot::parser;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let result = parser::parse_file(s);
        for decl in &result.file.declarations {
            assert!(decl.end().offset() <= s.len());
        }
    }
});

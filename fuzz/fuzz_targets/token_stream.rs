#![no_main]

use libfuzzer_sys::fuzz_target;
use solbot::lexer::{self, TokenStream};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let inline: Vec<_> = lexer::lex(s).collect();
        if let Ok(stream) = TokenStream::spawn(s) {
            let threaded: Vec<_> = stream.collect();
            assert_eq!(inline, threaded);
        }
    }
});

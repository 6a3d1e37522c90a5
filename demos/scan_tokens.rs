//! Show how the scanner assigns key/value roles.
//!
//! Run with: cargo run --example scan_tokens

use keyescape::{Role, Scanner};

fn main() {
    let inputs = [
        r#"{"a":"hello"}"#,
        r#"{"count":3,"name":"x"}"#,
        r#"["p","q","r"]"#,
        r#"{"quote":"say \"hi\""}"#,
    ];

    for input in inputs {
        println!("{}", input);
        for token in Scanner::new(input.as_bytes()) {
            let role = match token.role {
                Role::Key => "key",
                Role::Value => "value",
            };
            println!(
                "  @{:<3} {:<5} {}",
                token.start,
                role,
                String::from_utf8_lossy(token.text)
            );
        }
    }
}

//! Escape the keys of an in-memory document and print the report.
//!
//! Run with: cargo run --example escape_keys

use keyescape::{escape_document, render_report, ReportFormat};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let document = r#"{"user":"alice","role":"admin","tags":["ops","dev"]}"#;

    let escaped = escape_document(document.as_bytes());
    println!("Original:\n{}\n", document);
    println!(
        "Rewritten:\n{}\n",
        String::from_utf8_lossy(escaped.document())
    );

    let report = render_report(&escaped.map, ReportFormat::Text)?;
    println!("Replacement map:\n{}", String::from_utf8_lossy(&report));

    let values: Vec<_> = escaped
        .extraction
        .values()
        .map(|(value, _)| String::from_utf8_lossy(value))
        .collect();
    println!("Left as values: {}", values.join(", "));

    Ok(())
}

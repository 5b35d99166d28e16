//! Demo 3: excluding matches with a negative lookbehind.
//!
//! The address pattern accepts `username@domain.tld` but uses `(?<!noreply)`
//! to reject do-not-reply senders without complicating the username class.
//!
//! Run with: cargo run --bin demo_03_lookbehind

use text_recipes::find_address;

fn main() {
    println!("=== Negative Lookbehind ===\n");

    let candidates = ["first.last@example.com", "noreply@example.com"];

    for candidate in candidates {
        println!("Candidate: {}", candidate);
        match find_address(candidate) {
            Ok(Some(found)) => println!(" Match: {}", found),
            Ok(None) => println!(" No match"),
            Err(e) => println!(" Error: {}", e),
        }
    }
}

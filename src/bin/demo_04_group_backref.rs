//! Demo 4: cross-referencing earlier groups with backreferences.
//!
//! The pattern matches `First [Middle ]Last <first.last@domain.tld>` and
//! uses `\k<first>`/`\k<last>` inside the named `email` group to require
//! that the address repeat the captured name, so a display name that
//! disagrees with the address is rejected.
//!
//! Run with: cargo run --bin demo_04_group_backref

use text_recipes::match_name_email;

fn main() {
    println!("=== Group Backreferences ===\n");

    let candidates = [
        "First Last <first.last@example.com>",
        "Different Name <first.last@example.com>",
        "First Middle Last <first.last@example.com>",
        "First M. Last <first.last@example.com>",
    ];

    for candidate in candidates {
        println!("Candidate: {}", candidate);
        match match_name_email(candidate) {
            Ok(Some(m)) => {
                println!(" Match name : {} {}", m.first, m.last);
                println!(" Match email: {}", m.email);
            }
            Ok(None) => println!(" No match"),
            Err(e) => println!(" Error: {}", e),
        }
    }
}

//! Demo 1: word capitalization over plain and mixed-script text.
//!
//! Run with: cargo run --bin demo_01_capwords

use text_recipes::capwords;

fn main() {
    println!("=== Word Capitalization ===\n");

    let s = "I am a Python beginner.";
    println!("{}", s);
    println!("{}", capwords(s));

    // Words that are already all uppercase get lowered past the first letter.
    let s = "THIS IS MY FIRST PYTHON CODE!";
    println!("{}", s);
    println!("{}", capwords(s));

    // CJK characters have no case mappings, so the text passes through.
    let s = "我是一名程序员。";
    println!("{}", s);
    println!("{}", capwords(s));

    // A Latin word inside CJK text is only capitalized when a space
    // precedes it, because splitting is whitespace-based.
    let s = "我是一名初学 python的程序员！";
    println!("{}", s);
    println!("{}", capwords(s));

    let s = "我是一名初学python的程序员！";
    println!("{}", s);
    println!("{}", capwords(s));
}

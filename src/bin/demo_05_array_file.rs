//! Demo 5: round-tripping a fixed-width integer sequence through a
//! temporary file, with a hex dump of the raw bytes in between.
//!
//! Run with: cargo run --bin demo_05_array_file

use std::io::{Read, Write};

use tempfile::NamedTempFile;
use text_recipes::{read_i32s, write_i32s};

fn main() {
    println!("=== Integer Sequence File Round Trip ===\n");

    let values: Vec<i32> = (0..5).collect();
    println!("A1: {:?}", values);

    // Write the sequence out and flush so every byte reaches the file.
    let mut output = NamedTempFile::new().expect("create temp file");
    write_i32s(&mut output, &values).expect("write values");
    output.flush().expect("flush temp file");

    // Some platforms will not read through a handle that is still open for
    // writing, so take an independent read handle on the same path.
    let mut raw = Vec::new();
    output
        .reopen()
        .and_then(|mut f| f.read_to_end(&mut raw))
        .expect("read raw bytes");
    println!("Raw Contents: {}", hex::encode(&raw));

    let mut input = output.reopen().expect("reopen temp file");
    let restored = read_i32s(&mut input, values.len()).expect("read values");
    println!("A2: {:?}", restored);

    // The temp file is deleted when `output` drops.
}

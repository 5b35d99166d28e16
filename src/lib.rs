//! Shared building blocks for the `text-recipes` demos.
//!
//! Each binary under `src/bin/` is a standalone demonstration; the logic it
//! shows off lives here so it can be unit-tested independently:
//!
//! - [`capwords`] — whitespace-split word capitalization
//! - [`dedent`] — common-leading-whitespace removal
//! - [`samples`] — sample text shared between demos
//! - [`addresses`] — e-mail patterns using lookbehind and backreferences
//! - [`numfile`] — fixed-width integer sequences over `Read`/`Write`

pub mod addresses;
pub mod capwords;
pub mod dedent;
pub mod numfile;
pub mod samples;

pub use addresses::{find_address, match_name_email, NameEmail};
pub use capwords::capwords;
pub use dedent::dedent;
pub use numfile::{read_i32s, write_i32s, NumFileError};

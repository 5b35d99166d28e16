//! E-mail address patterns that need more than a regular language.
//!
//! The `regex` crate deliberately rejects lookaround and backreferences, so
//! both patterns here are compiled with `fancy_regex`, which supports them
//! at the cost of backtracking. Its match operations return `Result` (the
//! engine can hit its backtrack limit); callers get that error as-is.

use fancy_regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref ADDRESS: Regex = Regex::new(
        r"(?x)
        ^

        # An address: username@domain.tld

        [\w\d.+-]+    # username

        # Skip do-not-reply senders.
        (?<!noreply)

        @
        ([\w\d.]+\.)+ # domain name prefix
        (com|org|edu) # limit the allowed top-level domains

        $
        ",
    )
    .unwrap();
    static ref NAME_EMAIL: Regex = Regex::new(
        r"(?xi)

        # The regular name
        (?P<first>\w+)           # first name
        \s+
        ((?P<middle>[\w.]+)\s+)? # optional middle name or initial
        (?P<last>\w+)            # last name

        \s+

        <

        # The address: first_name.last_name@domain.tld
        (?P<email>
          \k<first>      # the first name again
          \.
          \k<last>       # the last name again
          @
          ([\w\d.]+\.)+  # domain name prefix
          (com|org|edu)  # limit the allowed top-level domains
        )

        >
        ",
    )
    .unwrap();
}

/// A `Name <address>` candidate that satisfied [`match_name_email`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEmail<'a> {
    pub first: &'a str,
    pub middle: Option<&'a str>,
    pub last: &'a str,
    pub email: &'a str,
}

/// Match a whole candidate against `username@domain.tld`, rejecting
/// usernames that end in `noreply` via negative lookbehind.
///
/// Returns the matched text on success.
pub fn find_address(candidate: &str) -> Result<Option<&str>, fancy_regex::Error> {
    Ok(ADDRESS.find(candidate)?.map(|m| m.as_str()))
}

/// Match `First [Middle ]Last <first.last@domain.tld>`, case-insensitively.
///
/// Backreferences (`\k<first>`, `\k<last>`) force the address's local part
/// to repeat the captured first and last name, so a display name that
/// disagrees with the address is rejected even though both halves are
/// well-formed on their own.
pub fn match_name_email(candidate: &str) -> Result<Option<NameEmail<'_>>, fancy_regex::Error> {
    let caps = match NAME_EMAIL.captures(candidate)? {
        Some(caps) => caps,
        None => return Ok(None),
    };
    Ok(Some(NameEmail {
        first: caps.name("first").map_or("", |m| m.as_str()),
        middle: caps.name("middle").map(|m| m.as_str()),
        last: caps.name("last").map_or("", |m| m.as_str()),
        email: caps.name("email").map_or("", |m| m.as_str()),
    }))
}

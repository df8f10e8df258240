//! Parses the `<subnet>/<prefix_len> <tag>` input file (spec.md §6.2) into
//! an [`LpmTable`].
//!
//! Grounded in the teacher's `bin/cli.rs::load_prefixes`, generalized from
//! CSV rows to the spec's whitespace-tokenized alternating-pair format.
//! Tokenizing by successful reads only (`str::split_whitespace`, which
//! already tolerates blank lines and trailing whitespace) sidesteps the
//! spurious-last-read hazard spec.md §9's Open Questions flag.


use std::str::FromStr;

use crate::addr;
use crate::error::LoadError;
use crate::table::LpmTable;

/// Parses `input` and builds a table. `T` is the opaque tag type — a
/// signed decimal integer in the reference use (spec.md §6.2).
pub fn load_table<T>(input: &str) -> Result<LpmTable<T>, LoadError>
where
    T: FromStr + Default,
{
    let mut table = LpmTable::new();
    let mut tokens = input.split_whitespace();
    let mut entry = 0usize;

    loop {
        let Some(prefix_tok) = tokens.next() else {
            break;
        };
        entry += 1;

        let tag_tok = tokens
            .next()
            .ok_or(LoadError::MissingTagToken { entry })?;

        let (addr_text, len_text) = prefix_tok.split_once('/').ok_or_else(|| {
            LoadError::BadPrefixToken {
                entry,
                token: prefix_tok.to_string(),
            }
        })?;
        let len: u32 = len_text.parse().map_err(|_| LoadError::BadPrefixToken {
            entry,
            token: prefix_tok.to_string(),
        })?;
        let key = addr::parse_prefix(addr_text, len)
            .map_err(|source| LoadError::BadPrefix { entry, source })?;

        let tag: T = tag_tok.parse().map_err(|_| LoadError::BadTag {
            entry,
            token: tag_tok.to_string(),
        })?;

        table.insert(key, tag);
    }

    Ok(table)
}

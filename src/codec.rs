//! Text to numeric-block codec over the 27-symbol teaching alphabet

use num_bigint::BigUint;

use crate::error::{CipherError, Result};

/// The fixed alphabet: `A`-`Z` followed by the space character.
///
/// A symbol's index in this table is its two-digit code, so `A` encodes as
/// `"00"`, `Z` as `"25"` and space as `"26"`. The table is a compile-time
/// constant and never changes while the process runs.
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ',
];

/// Source characters per plaintext block.
pub const BLOCK_CHARS: usize = 3;

/// Digits in a zero-padded ciphertext block.
pub const BLOCK_WIDTH: usize = 6;

/// Separator between blocks in a joined numeric-block string.
pub const SEPARATOR: char = ' ';

fn char_code(c: char) -> Option<usize> {
    ALPHABET.iter().position(|&a| a == c)
}

fn code_char(code: usize) -> Option<char> {
    ALPHABET.get(code).copied()
}

/// Encode a message into numeric plaintext blocks.
///
/// The message is uppercased, every character is mapped to its two-digit
/// code, and codes are grouped three source characters to a block. A message
/// whose length is not a multiple of three ends in a short block of two or
/// four digits.
///
/// Fails with [`CipherError::UnsupportedCharacter`] if any character, after
/// uppercasing, is outside [`ALPHABET`].
pub fn encode(message: &str) -> Result<Vec<String>> {
    let chars: Vec<char> = message.to_uppercase().chars().collect();
    let mut blocks = Vec::with_capacity(chars.len().div_ceil(BLOCK_CHARS));

    for group in chars.chunks(BLOCK_CHARS) {
        let mut block = String::with_capacity(2 * group.len());
        for &c in group {
            let code = char_code(c).ok_or(CipherError::UnsupportedCharacter(c))?;
            block.push_str(&format!("{code:02}"));
        }
        blocks.push(block);
    }

    Ok(blocks)
}

/// Decode numeric plaintext blocks back into text.
///
/// Each block is re-sliced into two-digit groups from the left and every
/// group is mapped back through [`ALPHABET`]. Blocks that have passed
/// through a cipher come back zero-padded to [`BLOCK_WIDTH`] digits, so the
/// fixed re-slicing only recovers the original text when every block held
/// exactly [`BLOCK_CHARS`] source characters, i.e. when the message length
/// was a multiple of three. A padded short final block decodes with
/// spurious leading `A`s; callers that need exact round trips for other
/// lengths must carry the per-block character count out of band.
pub fn decode<I>(blocks: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut message = String::new();

    for block in blocks {
        let block = block.as_ref();
        if !block.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CipherError::Domain(format!("invalid numeric block {block:?}")));
        }

        for pair in block.as_bytes().chunks(2) {
            if pair.len() != 2 {
                return Err(CipherError::Domain(format!(
                    "odd-length block {block:?} cannot be sliced into two-digit codes"
                )));
            }
            let code = usize::from((pair[0] - b'0') * 10 + (pair[1] - b'0'));
            let c = code_char(code).ok_or_else(|| {
                CipherError::Domain(format!("code {code:02} is outside the alphabet"))
            })?;
            message.push(c);
        }
    }

    Ok(message)
}

/// Parse a decimal block string into its numeric value.
pub(crate) fn parse_block(block: &str) -> Result<BigUint> {
    block
        .parse()
        .map_err(|_| CipherError::Domain(format!("invalid numeric block {block:?}")))
}

/// Zero-pad a block value to the fixed ciphertext width.
pub(crate) fn format_block(value: &BigUint) -> String {
    format!("{value:0width$}", width = BLOCK_WIDTH)
}

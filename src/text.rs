//! Letter handling and modulo-26 arithmetic.
//!
//! Letters are numbered `A = 1` through `Z = 26`. Keystream values use the
//! same range, so both combine with [`add_modulo_26`] and
//! [`subtract_modulo_26`], whose results also stay in `1..=26`.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::TextError;

/// Size of the letter blocks a message is padded to and displayed in.
pub const BLOCK_SIZE: usize = 5;

/// Letter used to pad a message to a whole number of blocks.
pub const PADDING: char = 'X';

/// Normalizes plaintext for encryption.
///
/// Letters are uppercased, everything else is dropped, and the result is
/// padded with `X` to a multiple of five letters.
///
/// # Example
///
/// ```
/// use pontifex::text::format_plaintext;
///
/// assert_eq!(format_plaintext("Hello, world!"), "HELLOWORLD");
/// assert_eq!(format_plaintext("Attack at dawn"), "ATTACKATDAWNXXX");
/// ```
#[must_use]
pub fn format_plaintext(text: &str) -> String {
    format_plaintext_with(text, PADDING, BLOCK_SIZE)
}

/// Normalizes plaintext with a custom padding letter and block size.
///
/// A block size of zero disables padding.
#[must_use]
pub fn format_plaintext_with(text: &str, padding: char, block: usize) -> String {
    let mut letters: String = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if block > 0 {
        let mut count = letters.len();
        while count % block != 0 {
            letters.push(padding);
            count += 1;
        }
    }

    letters
}

/// Converts a string of `A..=Z` to numbers `1..=26`.
///
/// # Errors
///
/// Returns an error on the first character outside `A..=Z`.
pub fn text_to_numbers(text: &str) -> Result<Vec<u8>, TextError> {
    text.chars().map(letter_to_number).collect()
}

/// Converts numbers `1..=26` back to a string of `A..=Z`.
///
/// # Errors
///
/// Returns an error on the first number outside `1..=26`.
pub fn numbers_to_text(numbers: &[u8]) -> Result<String, TextError> {
    numbers.iter().map(|&n| number_to_letter(n)).collect()
}

/// Returns the number of an uppercase letter.
///
/// # Errors
///
/// Returns an error if `c` is not in `A..=Z`.
pub const fn letter_to_number(c: char) -> Result<u8, TextError> {
    if c.is_ascii_uppercase() {
        Ok(c as u8 - b'A' + 1)
    } else {
        Err(TextError::NonLetter(c))
    }
}

/// Returns the uppercase letter for a number.
///
/// # Errors
///
/// Returns an error if `n` is not in `1..=26`.
pub const fn number_to_letter(n: u8) -> Result<char, TextError> {
    if n >= 1 && n <= 26 {
        Ok((b'A' + n - 1) as char)
    } else {
        Err(TextError::InvalidNumber(n))
    }
}

/// Adds a keystream value to a letter value.
///
/// The result is the residue in `1..=26`, with 26 standing for zero. For
/// inputs in `1..=26` this is `p + k`, minus 26 when the sum exceeds 26.
#[must_use]
pub const fn add_modulo_26(p: u8, k: u8) -> u8 {
    let sum = (p as u16 + k as u16) % 26;
    if sum == 0 { 26 } else { sum as u8 }
}

/// Subtracts a keystream value from a letter value.
///
/// The result is the residue in `1..=26`, with 26 standing for zero. For
/// inputs in `1..=26` this is `c - k`, plus 26 when the difference drops
/// below 1. It undoes [`add_modulo_26`] for the same `k`.
#[must_use]
pub const fn subtract_modulo_26(c: u8, k: u8) -> u8 {
    let diff = (c % 26 + 26 - k % 26) % 26;
    if diff == 0 { 26 } else { diff }
}

/// Encrypts letter values with a keystream.
///
/// # Errors
///
/// Returns an error if the keystream is shorter than the text. Extra keystream
/// values are ignored.
pub fn encrypt_numbers(plain: &[u8], keystream: &[u8]) -> Result<Vec<u8>, TextError> {
    combine(plain, keystream, add_modulo_26)
}

/// Decrypts letter values with a keystream.
///
/// # Errors
///
/// Returns an error if the keystream is shorter than the text. Extra keystream
/// values are ignored.
pub fn decrypt_numbers(cipher: &[u8], keystream: &[u8]) -> Result<Vec<u8>, TextError> {
    combine(cipher, keystream, subtract_modulo_26)
}

fn combine(text: &[u8], keystream: &[u8], op: fn(u8, u8) -> u8) -> Result<Vec<u8>, TextError> {
    if keystream.len() < text.len() {
        return Err(TextError::KeystreamTooShort {
            needed: text.len(),
            available: keystream.len(),
        });
    }

    Ok(text
        .iter()
        .zip(keystream)
        .map(|(&t, &k)| op(t, k))
        .collect())
}

/// Encrypts formatted plaintext letters with a keystream.
///
/// # Errors
///
/// Returns an error if the text is not all `A..=Z` or the keystream is too
/// short.
pub fn encrypt_text(plaintext: &str, keystream: &[u8]) -> Result<String, TextError> {
    let numbers = text_to_numbers(plaintext)?;
    numbers_to_text(&encrypt_numbers(&numbers, keystream)?)
}

/// Decrypts ciphertext letters with a keystream.
///
/// # Errors
///
/// Returns an error if the text is not all `A..=Z` or the keystream is too
/// short.
pub fn decrypt_text(ciphertext: &str, keystream: &[u8]) -> Result<String, TextError> {
    let numbers = text_to_numbers(ciphertext)?;
    numbers_to_text(&decrypt_numbers(&numbers, keystream)?)
}

/// Splits letters into space-separated blocks of `size`.
///
/// A size of zero returns the text unchanged.
///
/// # Example
///
/// ```
/// use pontifex::text::group;
///
/// assert_eq!(group("HELLOWORLDX", 5), "HELLO WORLD X");
/// ```
#[must_use]
pub fn group(text: &str, size: usize) -> String {
    if size == 0 {
        return String::from(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / size);
    for (index, c) in text.chars().enumerate() {
        if index > 0 && index % size == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Removes the whitespace inserted by [`group`].
#[must_use]
pub fn ungroup(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

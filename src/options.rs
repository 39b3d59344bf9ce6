//! Cipher configuration options.

use crate::engine::DEFAULT_MAX_ATTEMPTS;
use crate::text::{BLOCK_SIZE, PADDING};

/// Configuration options for a [`Cipher`](crate::Cipher).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pontifex::CipherOptions;
///
/// let options = CipherOptions::default()
///     .with_max_attempts(200)
///     .with_padding('Q')
///     .with_group_size(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherOptions {
    /// Maximum number of rounds tried for a single keystream value.
    pub max_attempts: u32,
    /// Letter used to pad plaintext to a whole number of groups.
    pub padding: char,
    /// Number of letters per output group (0 for no padding or grouping).
    pub group_size: usize,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            padding: PADDING,
            group_size: BLOCK_SIZE,
        }
    }
}

impl CipherOptions {
    /// Sets the retry bound for a single keystream value.
    ///
    /// # Example
    ///
    /// ```
    /// use pontifex::CipherOptions;
    ///
    /// let options = CipherOptions::default().with_max_attempts(10);
    /// assert_eq!(options.max_attempts, 10);
    /// ```
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the padding letter.
    ///
    /// The letter should be in `A..=Z`; anything else makes encryption fail.
    ///
    /// # Example
    ///
    /// ```
    /// use pontifex::CipherOptions;
    ///
    /// let options = CipherOptions::default().with_padding('Z');
    /// assert_eq!(options.padding, 'Z');
    /// ```
    #[must_use]
    pub const fn with_padding(mut self, padding: char) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the group size.
    ///
    /// # Example
    ///
    /// ```
    /// use pontifex::CipherOptions;
    ///
    /// let options = CipherOptions::default().with_group_size(0);
    /// assert_eq!(options.group_size, 0);
    /// ```
    #[must_use]
    pub const fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }
}

//! Short code generation.
//!
//! Codes are drawn uniformly from the 52 ASCII letters. With the default length
//! of 5 that gives 52^5 (about 380 million) distinct codes, so collisions are
//! rare but possible and the caller must be prepared to retry.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Alphabet used for generated codes: `A-Z` followed by `a-z`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Longest code the storage column accepts.
pub const MAX_CODE_LENGTH: usize = 10;

/// Path segments served by static routes; a code equal to one of them could
/// never be reached through `/{code}`.
pub const RESERVED_CODES: &[&str] = &["api", "health"];

/// Shape of any code that could have been stored, generated or seeded.
static STORABLE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,10}$").expect("static regex is valid"));

/// Source of candidate short codes.
///
/// Implementations are pure: they never consult storage. Uniqueness is the
/// job of [`crate::application::services::LinkService`].
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform random generator over a fixed alphabet.
///
/// Uses the thread-local CSPRNG from `rand`, which is seeded from the OS.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
    alphabet: &'static [u8],
}

impl RandomCodeGenerator {
    /// Creates a generator over [`ALPHABET`].
    pub fn new(length: usize) -> Self {
        Self::with_alphabet(length, ALPHABET)
    }

    /// Creates a generator over a custom alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `alphabet` is empty or `length` is zero.
    pub fn with_alphabet(length: usize, alphabet: &'static [u8]) -> Self {
        assert!(!alphabet.is_empty(), "alphabet must not be empty");
        assert!(length > 0, "code length must be positive");

        Self { length, alphabet }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct codes this generator can produce.
    pub fn code_space(&self) -> u128 {
        (self.alphabet.len() as u128).saturating_pow(self.length as u32)
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())] as char)
            .collect()
    }
}

/// Generates a code with the default length and alphabet.
pub fn generate_code() -> String {
    RandomCodeGenerator::default().generate()
}

/// Returns `true` if `code` has a shape that storage could contain.
///
/// Lookups for anything else are answered without a storage round trip.
pub fn is_storable_code(code: &str) -> bool {
    STORABLE_CODE_REGEX.is_match(code)
}

/// Returns `true` if `code` collides with a static route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

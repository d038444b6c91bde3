//! Minimal Solidity ABI codec.
//!
//! Covers exactly the parameter shapes the registry contracts use:
//! `uint256`, `address`, `bool`, `string`, `uint256[]` and `string[]`.
//! Calldata is the 4-byte selector followed by the head/tail encoding of
//! the argument tuple. Return data is decoded positionally from the head.

use thiserror::Error;
use types::{Address, Amount, B256};

const WORD: usize = 32;

/// Errors raised while decoding return data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// A read went past the end of the buffer.
    #[error("ABI data too short: need {needed} bytes at offset {offset}, have {len}")]
    OutOfBounds {
        /// Offset of the attempted read
        offset: usize,
        /// Bytes the read needed
        needed: usize,
        /// Total buffer length
        len: usize,
    },

    /// A numeric word did not fit the target integer type.
    #[error("ABI value overflows {0}")]
    Overflow(&'static str),

    /// An address word had non-zero padding.
    #[error("ABI word is not a valid address: {0}")]
    InvalidAddress(B256),

    /// A bool word was neither 0 nor 1.
    #[error("ABI word is not a valid bool: {0}")]
    InvalidBool(B256),

    /// A string was not valid UTF-8.
    #[error("ABI string is not valid UTF-8: {0}")]
    Utf8(String),
}

/// A single ABI-encodable argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A raw 32-byte word (`uint256` or `bytes32`).
    Word(B256),
    /// An `address`.
    Address(Address),
    /// A `bool`.
    Bool(bool),
    /// A dynamic `string`.
    String(String),
    /// A dynamic array of homogeneous tokens.
    Array(Vec<Token>),
}

impl Token {
    /// A `uint256` from a native integer.
    pub fn uint(value: u128) -> Self {
        let mut word = [0u8; WORD];
        word[16..].copy_from_slice(&value.to_be_bytes());
        Token::Word(B256::new(word))
    }

    /// A `uint256[]` of raw words.
    pub fn words(words: &[B256]) -> Self { Token::Array(words.iter().copied().map(Token::Word).collect()) }

    /// A `string[]`.
    pub fn strings<S: AsRef<str>>(items: &[S]) -> Self {
        Token::Array(items.iter().map(|s| Token::String(s.as_ref().to_string())).collect())
    }
}

/// First four bytes of the Keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = namehash::keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash.as_bytes()[..4]);
    out
}

/// Builds calldata: selector followed by the encoded arguments.
pub fn encode_call(signature: &str, args: &[Token]) -> Vec<u8> {
    let mut data = selector(signature).to_vec();
    data.extend(encode(args));
    data
}

/// Encodes a tuple of tokens.
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let head_len = WORD * tokens.len();
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        match static_word(token) {
            Some(word) => head.extend_from_slice(&word),
            None => {
                head.extend_from_slice(&usize_word(head_len + tail.len()));
                tail.extend(encode_tail(token));
            }
        }
    }

    head.extend(tail);
    head
}

fn encode_tail(token: &Token) -> Vec<u8> {
    match token {
        Token::String(s) => {
            let bytes = s.as_bytes();
            let mut out = usize_word(bytes.len()).to_vec();
            out.extend_from_slice(bytes);
            out.resize(WORD + padded_len(bytes.len()), 0);
            out
        }
        Token::Array(items) => {
            let mut out = usize_word(items.len()).to_vec();
            out.extend(encode(items));
            out
        }
        other => static_word(other).map(|w| w.to_vec()).unwrap_or_default(),
    }
}

/// The head word of a static token; `None` for dynamic ones.
fn static_word(token: &Token) -> Option<[u8; WORD]> {
    match token {
        Token::Word(w) => Some(w.0),
        Token::Address(a) => Some(a.to_word().0),
        Token::Bool(b) => Some(usize_word(usize::from(*b))),
        Token::String(_) | Token::Array(_) => None,
    }
}

fn usize_word(value: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

fn padded_len(len: usize) -> usize { (len + WORD - 1) / WORD * WORD }

/// Positional reader over ABI-encoded return data.
///
/// `index` arguments count head words, so the first return value is at 0.
pub struct Decoder<'a> {
    data: &'a [u8],
}

impl<'a> Decoder<'a> {
    /// Wraps return data.
    pub fn new(data: &'a [u8]) -> Self { Self { data } }

    /// The raw word at head position `index`.
    pub fn word(&self, index: usize) -> Result<B256, AbiError> { self.word_at(index * WORD) }

    /// A `uint256` that must fit in an [`Amount`].
    pub fn uint(&self, index: usize) -> Result<Amount, AbiError> {
        word_to_u128(&self.word(index)?)
    }

    /// A `uint256` that must fit in a `u64` (timestamps, durations).
    pub fn u64(&self, index: usize) -> Result<u64, AbiError> {
        u64::try_from(self.uint(index)?).map_err(|_| AbiError::Overflow("u64"))
    }

    /// An `address`.
    pub fn address(&self, index: usize) -> Result<Address, AbiError> {
        let word = self.word(index)?;
        if word.0[..12].iter().any(|b| *b != 0) {
            return Err(AbiError::InvalidAddress(word));
        }
        let mut addr = [0u8; 20];
        addr.copy_from_slice(&word.0[12..]);
        Ok(Address::new(addr))
    }

    /// A `bool`.
    pub fn bool(&self, index: usize) -> Result<bool, AbiError> {
        let word = self.word(index)?;
        match word_to_u128(&word) {
            Ok(0) => Ok(false),
            Ok(1) => Ok(true),
            _ => Err(AbiError::InvalidBool(word)),
        }
    }

    /// A dynamic `string`.
    pub fn string(&self, index: usize) -> Result<String, AbiError> {
        let offset = self.offset(index * WORD)?;
        self.string_at(offset)
    }

    /// A dynamic `uint256[]` whose elements must fit in an [`Amount`].
    pub fn uint_array(&self, index: usize) -> Result<Vec<Amount>, AbiError> {
        let offset = self.offset(index * WORD)?;
        let len = self.offset(offset)?;
        let start = offset.saturating_add(WORD);
        self.check(start, len.saturating_mul(WORD))?;
        (0..len).map(|i| word_to_u128(&self.word_at(start + i * WORD)?)).collect()
    }

    /// A dynamic `string[]`.
    pub fn string_array(&self, index: usize) -> Result<Vec<String>, AbiError> {
        let offset = self.offset(index * WORD)?;
        let len = self.offset(offset)?;
        let start = offset.saturating_add(WORD);
        self.check(start, len.saturating_mul(WORD))?;
        (0..len)
            .map(|i| {
                let rel = self.offset(start + i * WORD)?;
                self.string_at(start.saturating_add(rel))
            })
            .collect()
    }

    fn string_at(&self, offset: usize) -> Result<String, AbiError> {
        let len = self.offset(offset)?;
        let start = offset.saturating_add(WORD);
        self.check(start, len)?;
        String::from_utf8(self.data[start..start + len].to_vec())
            .map_err(|e| AbiError::Utf8(e.to_string()))
    }

    fn word_at(&self, offset: usize) -> Result<B256, AbiError> {
        self.check(offset, WORD)?;
        let mut word = [0u8; WORD];
        word.copy_from_slice(&self.data[offset..offset + WORD]);
        Ok(B256::new(word))
    }

    /// Reads a word at `offset` as an in-buffer offset or length.
    fn offset(&self, offset: usize) -> Result<usize, AbiError> {
        let value = word_to_u128(&self.word_at(offset)?)?;
        usize::try_from(value).map_err(|_| AbiError::Overflow("usize"))
    }

    fn check(&self, offset: usize, needed: usize) -> Result<(), AbiError> {
        match offset.checked_add(needed) {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(AbiError::OutOfBounds { offset, needed, len: self.data.len() }),
        }
    }
}

fn word_to_u128(word: &B256) -> Result<u128, AbiError> {
    if word.0[..16].iter().any(|b| *b != 0) {
        return Err(AbiError::Overflow("u128"));
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&word.0[16..]);
    Ok(u128::from_be_bytes(low))
}

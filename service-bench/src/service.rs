//! Fixed-schema service records.
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Field buffer size, counting one byte for a terminator.
pub const MAX_STRING_LENGTH: usize = 4;

/// Longest string a field can hold.
pub const MAX_FIELD_LEN: usize = MAX_STRING_LENGTH - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Empty,
    TooLong { len: usize, max: usize },
    Nul,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Empty => write!(f, "field must not be empty"),
            FieldError::TooLong { len, max } => {
                write!(f, "field is {} bytes long (at most {} allowed)", len, max)
            }
            FieldError::Nul => write!(f, "field contains a NUL byte"),
        }
    }
}

impl std::error::Error for FieldError {}

/// An inline string field of 1 to `MAX_FIELD_LEN` bytes.
///
/// Ordering is byte-lexicographic, which matches `[u8]` ordering, so an index
/// keyed by `ShortStr` can be searched with a plain byte slice.
#[derive(Clone, Copy)]
pub struct ShortStr {
    len: u8,
    bytes: [u8; MAX_FIELD_LEN],
}

impl ShortStr {
    pub fn new(s: &str) -> Result<ShortStr, FieldError> {
        ShortStr::from_bytes(s.as_bytes())
    }

    pub fn from_bytes(src: &[u8]) -> Result<ShortStr, FieldError> {
        if src.is_empty() {
            return Err(FieldError::Empty);
        } else if src.len() > MAX_FIELD_LEN {
            return Err(FieldError::TooLong {
                len: src.len(),
                max: MAX_FIELD_LEN,
            });
        } else if src.contains(&0) {
            return Err(FieldError::Nul);
        }

        let mut bytes = [0; MAX_FIELD_LEN];
        bytes[..src.len()].copy_from_slice(src);

        Ok(ShortStr {
            len: src.len() as u8,
            bytes,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The field as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PartialEq for ShortStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ShortStr {}

impl PartialOrd for ShortStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShortStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ShortStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl Borrow<[u8]> for ShortStr {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for ShortStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.pad(s),
            None => f.pad(&self.as_bytes().escape_ascii().to_string()),
        }
    }
}

impl fmt::Debug for ShortStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

/// One service offered by a master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Index key. Not unique.
    pub service_name: ShortStr,
    pub service_type: ShortStr,
    pub cost: u32,
    pub duration: u32,
    pub master_name: ShortStr,
}

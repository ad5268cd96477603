//! Structural addresses into a JSON document.

use std::fmt;

use crate::error::{check_range, contract, Error, Result};

/// One path step: an object member name or a textual array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// Creates a key from a member name or index text.
    pub fn new(key: impl Into<String>) -> Self {
        Key(key.into())
    }

    /// Creates the key addressing an array element.
    pub fn from_index(index: usize) -> Self {
        Key(index.to_string())
    }

    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is `0` or a run of digits without a leading zero.
    pub fn is_index(&self) -> bool {
        let bytes = self.0.as_bytes();
        if bytes.is_empty() {
            return false;
        }
        if bytes.len() > 1 && bytes[0] == b'0' {
            return false;
        }
        bytes.iter().all(u8::is_ascii_digit)
    }

    /// Parses the key back to an array index.
    ///
    /// # Panics
    ///
    /// Panics if the key is not an array index. Only call this on keys that
    /// came from array traversal.
    #[track_caller]
    pub fn index(&self) -> usize {
        contract(self.try_index())
    }

    /// Like [`Key::index`], returning [`Error::InvalidIndexKey`] instead of panicking.
    pub fn try_index(&self) -> Result<usize> {
        if !self.is_index() {
            return Err(Error::InvalidIndexKey(self.0.clone()));
        }
        self.0
            .parse()
            .map_err(|_| Error::InvalidIndexKey(self.0.clone()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key(key)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::from_index(index)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Escapes a key for pointer-style display: `~` becomes `~0`, `/` becomes `~1`.
fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// An immutable sequence of [`Key`]s; the empty path addresses the root.
///
/// # Example
///
/// ```
/// use json_value::Path;
///
/// let path = Path::new().append("x").append("y");
/// assert_eq!(path, Path::from(["x", "y"]));
/// assert_ne!(Path::from(["x"]), path);
/// assert_eq!(path.to_string(), "/x/y");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Key>);

impl Path {
    /// Creates the empty path, which addresses the root.
    pub fn new() -> Self {
        Path(Vec::new())
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the key at `index`.
    ///
    /// # Panics
    ///
    /// Panics unless `index < len`.
    #[track_caller]
    pub fn get(&self, index: usize) -> &Key {
        contract(self.try_get(index))
    }

    /// Like [`Path::get`], returning [`Error::IndexOutOfRange`] instead of panicking.
    pub fn try_get(&self, index: usize) -> Result<&Key> {
        self.0.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.0.len(),
        })
    }

    /// Returns a new path with `key` added at the end.
    #[must_use]
    pub fn append(&self, key: impl Into<Key>) -> Path {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend_from_slice(&self.0);
        keys.push(key.into());
        Path(keys)
    }

    /// Returns the keys in `begin..end` as a new path.
    ///
    /// # Panics
    ///
    /// Panics unless `begin <= end <= len`.
    #[track_caller]
    #[must_use]
    pub fn slice(&self, begin: usize, end: usize) -> Path {
        contract(self.try_slice(begin, end))
    }

    /// Like [`Path::slice`], returning [`Error::InvalidArgument`] instead of panicking.
    pub fn try_slice(&self, begin: usize, end: usize) -> Result<Path> {
        check_range(begin, end, self.0.len())?;
        Ok(Path(self.0[begin..end].to_vec()))
    }

    /// Element-wise comparison; same as `==`.
    pub fn equals(&self, other: &Path) -> bool {
        self == other
    }

    /// The path without its last key, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, init) = self.0.split_last()?;
        Some(Path(init.to_vec()))
    }

    /// Returns the last key, or `None` for the root.
    pub fn last(&self) -> Option<&Key> {
        self.0.last()
    }

    /// Whether `prefix` is a leading run of this path's keys.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Path;
    ///
    /// let path = Path::from(["a", "b"]);
    /// assert!(path.starts_with(&Path::from(["a"])));
    /// assert!(!path.starts_with(&Path::from(["b"])));
    /// ```
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Iterates over the keys from the root down.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }

    /// Returns the keys as a slice.
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub(crate) fn push(&mut self, key: Key) {
        self.0.push(key);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for Path {
    /// Writes the path as an RFC 6901 pointer; the root is the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.0 {
            write!(f, "/{}", escape_component(key.as_str()))?;
        }
        Ok(())
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Path(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Key>> From<Vec<K>> for Path {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for Path {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

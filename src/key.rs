/// Trait for types that support collation operations over the byte-key space
/// consumed by the span algebra.
///
/// This narrows `core::collation::Collatable` (which this trait is modeled on)
/// to the byte-string domain: successors here are always defined over a
/// variable-length byte string, since there is always either an
/// incrementable byte or room to extend by one.
pub trait Collatable {
    /// Convert the value to its binary representation for collation.
    fn to_bytes(&self) -> Vec<u8>;

    /// Returns the binary representation of the immediate successor within
    /// the same prefix family: the smallest byte string strictly greater
    /// than `self` that leaves no room for a proper extension of `self` to
    /// sort between the two. `prefix_end("abc") == "abd"`.
    fn successor_bytes(&self) -> Vec<u8>;
}

/// A simple `Vec<u8>`-backed key, usable standalone wherever a caller doesn't
/// already have its own `Collatable` key type (tests, examples, callers that
/// don't need the host datastore's full key schema).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct ByteKey(pub Vec<u8>);

impl ByteKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self { Self(bytes.into()) }
}

impl From<&str> for ByteKey {
    fn from(s: &str) -> Self { Self(s.as_bytes().to_vec()) }
}

impl From<String> for ByteKey {
    fn from(s: String) -> Self { Self(s.into_bytes()) }
}

impl From<&[u8]> for ByteKey {
    fn from(b: &[u8]) -> Self { Self(b.to_vec()) }
}

impl Collatable for ByteKey {
    fn to_bytes(&self) -> Vec<u8> { self.0.clone() }

    fn successor_bytes(&self) -> Vec<u8> { prefix_end(&self.0) }
}

/// Lexicographic prefix-end successor: increments the rightmost byte that
/// isn't already `0xFF`, zeroing everything to its right. If every byte is
/// `0xFF` (or the input is empty), no byte can be incremented in place, so a
/// zero byte is appended instead - the same fallback this codebase's
/// `Collatable` impl for binary/object literals uses (see
/// `core::collation::Collatable for ast::Literal`, the `Object`/`Binary` arm).
pub(crate) fn prefix_end(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    for i in (0..out.len()).rev() {
        if out[i] < 0xFF {
            out[i] += 1;
            out.truncate(i + 1);
            return out;
        }
    }
    out.push(0);
    out
}

/// Returns true iff `bytes(a)` starts with `bytes(b)` (`b` is a prefix of `a`).
pub(crate) fn is_prefix_of(a: &[u8], b: &[u8]) -> bool { a.starts_with(b) }

/// Adjacency per the prefix-end successor: equal byte-length and one is the
/// immediate successor of the other. Equal length is required because
/// `successor_bytes` does not collapse across prefix boundaries - a key and
/// its own prefix extension are never adjacent, only contained.
pub(crate) fn is_adjacent<K: Collatable>(a: &K, b: &K) -> bool {
    let (a_bytes, b_bytes) = (a.to_bytes(), b.to_bytes());
    a_bytes.len() == b_bytes.len() && (a.successor_bytes() == b_bytes || a_bytes == b.successor_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_increments_last_byte() {
        let k = ByteKey::from("abc");
        assert_eq!(k.successor_bytes(), b"abd".to_vec());
    }

    #[test]
    fn successor_truncates_trailing_bytes_after_increment() {
        // incrementing the rightmost non-0xFF byte drops everything after it
        assert_eq!(prefix_end(&[0x61, 0xFF, 0xFF]), vec![0x62]);
    }

    #[test]
    fn successor_appends_zero_when_saturated() {
        assert_eq!(prefix_end(&[0xFF, 0xFF]), vec![0xFF, 0xFF, 0x00]);
        assert_eq!(prefix_end(&[]), vec![0x00]);
    }

    #[test]
    fn successor_is_strictly_greater() {
        let k = ByteKey::from("m");
        assert!(k.successor_bytes() > k.to_bytes());
    }

    #[test]
    fn adjacency_requires_equal_length() {
        let a = ByteKey::from("a");
        let b = ByteKey::from("aa");
        // "aa" starts with "a" (prefix containment), but successor_bytes("a") = "b" != "aa"
        // and lengths differ, so these are not adjacent.
        assert!(!is_adjacent(&a, &b));
    }

    #[test]
    fn adjacency_via_successor_forward() {
        let a = ByteKey::from("a");
        let b = ByteKey::from("b");
        assert!(is_adjacent(&a, &b));
        assert!(is_adjacent(&b, &a));
    }

    #[test]
    fn prefix_predicate() {
        assert!(is_prefix_of(b"cc", b"c"));
        assert!(!is_prefix_of(b"c", b"cc"));
        assert!(is_prefix_of(b"c", b"c"));
    }
}

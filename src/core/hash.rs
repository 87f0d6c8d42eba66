use md5::{Digest, Md5};

/// Lowercase hex MD5 digest of a translation value.
pub fn content_hash(value: &str) -> String {
    hex::encode(Md5::digest(value.as_bytes()))
}

/// True if `key` is the content hash of `value`, ignoring hex case.
pub fn key_matches_value(key: &str, value: &str) -> bool {
    key.eq_ignore_ascii_case(&content_hash(value))
}

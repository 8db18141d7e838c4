use xxhash_rust::xxh3::xxh3_128;

/// Lowercase hexadecimal xxh3-128 digest, always 32 characters wide.
pub fn xxhash_hex(input: &[u8]) -> String {
  format!("{:032x}", xxh3_128(input))
}

#[test]
fn test_xxhash_hex() {
  let hash = xxhash_hex(b"src/lib/util");
  assert_eq!(hash.len(), 32);
  assert!(hash.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
  assert_eq!(hash, xxhash_hex(b"src/lib/util"));
  assert_ne!(hash, xxhash_hex(b"src/lib/utils"));
}

use std::path::Path;

use crate::{concat_string, sanitize_file_name::sanitize_file_name, xxhash::xxhash_hex};

/// Derives a static file name (without extension) from a logical path and the content it stands
/// for: `<sanitized file stem>-<xxh3 hex of src>`. The same inputs always produce the same name.
pub fn file_name_from_contents(filepath: &str, src: &str) -> String {
  let normalized = filepath.replace('\\', "/");
  let stem = Path::new(&normalized).file_stem().map(|stem| stem.to_string_lossy()).unwrap_or_default();
  concat_string!(sanitize_file_name(&stem), "-", xxhash_hex(src.as_bytes()))
}

#[test]
fn test_file_name_from_contents() {
  let name = file_name_from_contents("src/lib/util", "src/lib/util");
  assert!(name.starts_with("util-"));
  assert_eq!(name.len(), "util-".len() + 32);
  assert_eq!(name, file_name_from_contents("src/lib/util", "src/lib/util"));

  // Windows separators are normalized before taking the stem.
  assert!(file_name_from_contents("src\\app\\[id]", "x").starts_with("_id_-"));
  assert!(file_name_from_contents("src/app/home.web", "x").starts_with("home-"));
}

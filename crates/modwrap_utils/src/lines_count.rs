use memchr::memmem;

/// Number of `\n` terminated lines in `str`, which is what a compiled unit reports as `lineCount`.
#[inline]
pub fn lines_count(str: &str) -> u32 {
  u32::try_from(memmem::find_iter(str.as_bytes(), "\n").count()).unwrap()
}

#[test]
fn test_lines_count() {
  assert_eq!(lines_count("__d(function() {\n  a();\n});"), 2);
  assert_eq!(lines_count("a\nb\nc\n"), 3);
  assert_eq!(lines_count(""), 0);
}

//! Bundle URLs requested by JavaScriptCore replace `?` with `//&` so the query survives in stack
//! traces, e.g. `http://localhost:8081/index.bundle//&platform=ios`.

use std::borrow::Cow;

use crate::concat_string;

const JSC_SEARCH_SEPARATOR: &str = "//&";

/// Converts a JSC-safe URL back to its regular form. Regular URLs are returned untouched.
pub fn to_normal_url(url: &str) -> Cow<'_, str> {
  // The marker only counts when it is part of the path, before any query or fragment.
  let path_end = url.find(|c| c == '?' || c == '#').unwrap_or(url.len());
  match url[..path_end].find(JSC_SEARCH_SEPARATOR) {
    Some(idx) => Cow::Owned(concat_string!(
      &url[..idx],
      "?",
      &url[idx + JSC_SEARCH_SEPARATOR.len()..]
    )),
    None => Cow::Borrowed(url),
  }
}

#[test]
fn test_to_normal_url() {
  assert_eq!(
    to_normal_url("http://localhost:8081/index.bundle//&platform=ios&dev=true"),
    "http://localhost:8081/index.bundle?platform=ios&dev=true"
  );
  assert_eq!(
    to_normal_url("http://localhost:8081/index.bundle?platform=ios"),
    "http://localhost:8081/index.bundle?platform=ios"
  );
  assert_eq!(to_normal_url("http://h/a.bundle?x=//&y"), "http://h/a.bundle?x=//&y");
  assert!(matches!(to_normal_url("http://h/a.bundle"), Cow::Borrowed(_)));
}

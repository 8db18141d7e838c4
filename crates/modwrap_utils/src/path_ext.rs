use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  /// Converts the path to a `/` separated string on every platform.
  fn to_slash_string(&self) -> String;

  /// Drops the last extension of the file name, keeping the parent directories.
  ///
  /// `src/lib/util.ios.js` becomes `src/lib/util.ios`, dot files like `.env` are left as is.
  fn without_extension(&self) -> PathBuf;

  /// `self` relative to `base`, `/` separated and with the last extension removed.
  fn relative_stem(&self, base: &Path) -> String;
}

impl PathExt for Path {
  fn to_slash_string(&self) -> String {
    self.to_slash_lossy().into_owned()
  }

  fn without_extension(&self) -> PathBuf {
    if self.extension().is_some() { self.with_extension("") } else { self.to_path_buf() }
  }

  fn relative_stem(&self, base: &Path) -> String {
    self.relative(base).without_extension().to_slash_string()
  }
}

#[test]
fn test_without_extension() {
  assert_eq!(Path::new("src/lib/util.js").without_extension(), Path::new("src/lib/util"));
  assert_eq!(Path::new("src/lib/util.ios.js").without_extension(), Path::new("src/lib/util.ios"));
  assert_eq!(Path::new("util").without_extension(), Path::new("util"));
  assert_eq!(Path::new(".env").without_extension(), Path::new(".env"));
}

#[test]
fn test_relative_stem() {
  let root = Path::new("/proj");
  assert_eq!(Path::new("/proj/src/lib/util.js").relative_stem(root), "src/lib/util");
  assert_eq!(Path::new("/proj/index.tsx").relative_stem(root), "index");
  assert_eq!(Path::new("/shared/math.js").relative_stem(root), "../shared/math");
}

use std::path::Path;

use arcstr::ArcStr;
use serde::Deserialize;
use sugar_path::SugarPath;

/// `ModulePath` is the absolute file path of a module, which is its unique key in the graph.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Deserialize)]
#[serde(transparent)]
pub struct ModulePath(ArcStr);

impl ModulePath {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  /// The path relative to `root`, `/` separated so it reads the same on every os.
  pub fn stabilize(&self, root: &Path) -> String {
    let path = Path::new(self.0.as_str());
    if path.is_absolute() {
      path.relative(root).to_slash_lossy().into_owned()
    } else {
      self.to_string()
    }
  }
}

impl std::ops::Deref for ModulePath {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModulePath {
  fn as_ref(&self) -> &str {
    self
  }
}

impl AsRef<Path> for ModulePath {
  fn as_ref(&self) -> &Path {
    Path::new(self.0.as_str())
  }
}

impl std::fmt::Display for ModulePath {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<ArcStr> for ModulePath {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl From<&str> for ModulePath {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

#[test]
fn test_stabilize() {
  let root = Path::new("/proj");
  assert_eq!(ModulePath::from("/proj/src/screens/Home.js").stabilize(root), "src/screens/Home.js");
  assert_eq!(ModulePath::from("/other/lib.js").stabilize(root), "../other/lib.js");
  assert_eq!(ModulePath::from("virtual:entry").stabilize(root), "virtual:entry");
}

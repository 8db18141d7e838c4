use std::borrow::Cow;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

/// Runtime identifier of a module, as handed out by a [`crate::CreateModuleId`] capability.
///
/// Serializes untagged, so `Number(42)` renders as `42` and `String("a")` as `"a"`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleId {
  Number(u32),
  String(ArcStr),
}

impl ModuleId {
  /// The id as a JSON object key.
  pub fn as_key(&self) -> Cow<'_, str> {
    match self {
      Self::Number(id) => Cow::Owned(itoa::Buffer::new().format(*id).to_string()),
      Self::String(id) => Cow::Borrowed(id.as_str()),
    }
  }
}

impl std::fmt::Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Number(id) => write!(f, "{id}"),
      Self::String(id) => f.write_str(id),
    }
  }
}

impl From<u32> for ModuleId {
  fn from(value: u32) -> Self {
    Self::Number(value)
  }
}

impl From<&str> for ModuleId {
  fn from(value: &str) -> Self {
    Self::String(value.into())
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::String(value)
  }
}

#[test]
fn test_serialize_untagged() {
  assert_eq!(serde_json::to_string(&ModuleId::from(42)).unwrap(), "42");
  assert_eq!(serde_json::to_string(&ModuleId::from("src/App.js")).unwrap(), "\"src/App.js\"");
  assert_eq!(ModuleId::from(7).as_key(), "7");
}

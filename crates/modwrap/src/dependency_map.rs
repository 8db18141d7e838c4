use modwrap_common::ModuleId;
use modwrap_utils::indexmap::FxIndexMap;
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Split bundle paths keyed by the runtime id of the module they load.
///
/// Ids are stored as object keys, so a number id and its string spelling share one entry, like
/// they would in a JavaScript object.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitPaths(FxIndexMap<String, String>);

impl SplitPaths {
  pub fn insert(&mut self, id: &ModuleId, path: String) {
    self.0.insert(id.as_key().into_owned(), path);
  }

  pub fn get(&self, id: &ModuleId) -> Option<&str> {
    self.0.get(&*id.as_key()).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(id, path)| (id.as_str(), path.as_str()))
  }

  pub fn extend(&mut self, other: SplitPaths) {
    self.0.extend(other.0);
  }

  /// Entries in the order a JavaScript object enumerates them: array index keys ascending, then
  /// every other key in insertion order.
  fn entries_in_js_order(&self) -> Vec<(&str, &str)> {
    let mut index_keys = vec![];
    let mut other_keys = vec![];
    for (key, path) in &self.0 {
      match array_index(key) {
        Some(index) => index_keys.push((index, key.as_str(), path.as_str())),
        None => other_keys.push((key.as_str(), path.as_str())),
      }
    }
    index_keys.sort_unstable_by_key(|(index, ..)| *index);
    index_keys.into_iter().map(|(_, key, path)| (key, path)).chain(other_keys).collect()
  }
}

/// `Some` for canonical array index keys: `0`, `42`, but not `042`, `+1` or `4294967295`.
fn array_index(key: &str) -> Option<u32> {
  key
    .parse::<u32>()
    .ok()
    .filter(|index| *index != u32::MAX && itoa::Buffer::new().format(*index) == key)
}

impl Serialize for SplitPaths {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let entries = self.entries_in_js_order();
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, path) in entries {
      map.serialize_entry(key, path)?;
    }
    map.end()
  }
}

/// The dependency ids of one module, as passed to its registration call.
///
/// Without split bundles it is the plain id list. Otherwise it becomes an object whose index keys
/// still hold the ids in order, plus a `paths` table for the ids loaded from split bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyMap {
  Ids(Vec<ModuleId>),
  WithPaths { ids: Vec<ModuleId>, paths: SplitPaths },
}

impl DependencyMap {
  pub fn new(ids: Vec<ModuleId>, paths: SplitPaths) -> Self {
    if paths.is_empty() { Self::Ids(ids) } else { Self::WithPaths { ids, paths } }
  }

  pub fn ids(&self) -> &[ModuleId] {
    match self {
      Self::Ids(ids) | Self::WithPaths { ids, .. } => ids,
    }
  }

  /// Id of the dependency declared at `index`.
  pub fn get(&self, index: usize) -> Option<&ModuleId> {
    self.ids().get(index)
  }

  pub fn paths(&self) -> Option<&SplitPaths> {
    match self {
      Self::Ids(_) => None,
      Self::WithPaths { paths, .. } => Some(paths),
    }
  }

  pub fn into_paths(self) -> SplitPaths {
    match self {
      Self::Ids(_) => SplitPaths::default(),
      Self::WithPaths { paths, .. } => paths,
    }
  }
}

impl Serialize for DependencyMap {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Ids(ids) => ids.serialize(serializer),
      Self::WithPaths { ids, paths } => {
        let mut map = serializer.serialize_map(Some(ids.len() + 1))?;
        let mut buffer = itoa::Buffer::new();
        for (index, id) in ids.iter().enumerate() {
          map.serialize_entry(buffer.format(index), id)?;
        }
        map.serialize_entry("paths", paths)?;
        map.end()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_ids_render_as_array() {
    let map = DependencyMap::new(vec![ModuleId::from(42), ModuleId::from(7)], SplitPaths::default());
    assert_eq!(serde_json::to_string(&map).unwrap(), "[42,7]");
    assert_eq!(map.get(1), Some(&ModuleId::from(7)));
    assert!(map.paths().is_none());
  }

  #[test]
  fn split_paths_render_as_object() {
    let mut paths = SplitPaths::default();
    paths.insert(&ModuleId::from(7), "/b.bundle?modulesOnly=true".to_string());
    let map = DependencyMap::new(vec![ModuleId::from(42), ModuleId::from(7)], paths);
    assert_eq!(
      serde_json::to_string(&map).unwrap(),
      r#"{"0":42,"1":7,"paths":{"7":"/b.bundle?modulesOnly=true"}}"#
    );
    assert_eq!(map.get(0), Some(&ModuleId::from(42)));
    assert_eq!(map.paths().and_then(|paths| paths.get(&ModuleId::from(7))), Some("/b.bundle?modulesOnly=true"));
  }

  #[test]
  fn split_paths_use_js_key_order() {
    let mut paths = SplitPaths::default();
    paths.insert(&ModuleId::from("src/b.js"), "/b".to_string());
    paths.insert(&ModuleId::from(10), "/ten".to_string());
    paths.insert(&ModuleId::from("007"), "/bond".to_string());
    paths.insert(&ModuleId::from(2), "/two".to_string());
    assert_eq!(
      serde_json::to_string(&paths).unwrap(),
      r#"{"2":"/two","10":"/ten","src/b.js":"/b","007":"/bond"}"#
    );
  }

  #[test]
  fn number_and_string_ids_share_a_key() {
    let mut paths = SplitPaths::default();
    paths.insert(&ModuleId::from(3), "/old".to_string());
    paths.insert(&ModuleId::from("3"), "/new".to_string());
    assert_eq!(paths.len(), 1);
    assert_eq!(paths.get(&ModuleId::from(3)), Some("/new"));
  }

  #[test]
  fn array_index_keys() {
    assert_eq!(array_index("0"), Some(0));
    assert_eq!(array_index("42"), Some(42));
    assert_eq!(array_index("042"), None);
    assert_eq!(array_index("+1"), None);
    assert_eq!(array_index("4294967295"), None);
    assert_eq!(array_index("a1"), None);
  }
}

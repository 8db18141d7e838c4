use std::sync::{
  atomic::{AtomicU32, Ordering},
  Arc,
};

use arcstr::ArcStr;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::ModuleId;

/// Maps the absolute path of a module to its runtime id.
///
/// Implementations may memoize, but must hand out the same id for the same path for the whole
/// build, including when called concurrently.
pub trait CreateModuleId: Send + Sync {
  fn create_module_id(&self, path: &str) -> ModuleId;
}

impl<F> CreateModuleId for F
where
  F: Fn(&str) -> ModuleId + Send + Sync,
{
  fn create_module_id(&self, path: &str) -> ModuleId {
    self(path)
  }
}

pub type SharedCreateModuleId = Arc<dyn CreateModuleId>;

/// Numbers modules in the order their paths are first seen, starting at `0`.
#[derive(Default)]
pub struct ModuleIdFactory {
  ids: DashMap<ArcStr, u32, FxBuildHasher>,
  next_id: AtomicU32,
}

impl ModuleIdFactory {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }
}

impl CreateModuleId for ModuleIdFactory {
  fn create_module_id(&self, path: &str) -> ModuleId {
    if let Some(id) = self.ids.get(path) {
      return ModuleId::Number(*id);
    }
    // The entry keeps its shard locked, so racing callers agree on a single id.
    let id = *self
      .ids
      .entry(ArcStr::from(path))
      .or_insert_with(|| self.next_id.fetch_add(1, Ordering::Relaxed));
    ModuleId::Number(id)
  }
}

#[test]
fn test_module_id_factory() {
  let factory = ModuleIdFactory::new();
  assert_eq!(factory.create_module_id("/proj/index.js"), ModuleId::Number(0));
  assert_eq!(factory.create_module_id("/proj/App.js"), ModuleId::Number(1));
  assert_eq!(factory.create_module_id("/proj/index.js"), ModuleId::Number(0));
  assert_eq!(factory.len(), 2);
}

#[test]
fn test_module_id_factory_is_idempotent_across_threads() {
  use rayon::prelude::*;

  let factory = ModuleIdFactory::new();
  let paths = (0..64).map(|idx| format!("/proj/src/m{}.js", idx % 8)).collect::<Vec<_>>();
  let ids = paths.par_iter().map(|path| factory.create_module_id(path)).collect::<Vec<_>>();

  assert_eq!(factory.len(), 8);
  for (path, id) in paths.iter().zip(ids) {
    assert_eq!(factory.create_module_id(path), id);
  }
}

#[test]
fn test_closure_as_create_module_id() {
  let create: SharedCreateModuleId = Arc::new(|path: &str| ModuleId::from(path));
  assert_eq!(create.create_module_id("/a.js"), ModuleId::from("/a.js"));
}

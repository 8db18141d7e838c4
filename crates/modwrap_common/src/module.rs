use serde::Deserialize;

use crate::{MixedOutput, ModulePath};

/// A compiled module as handed over by the transform stage.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
  pub path: ModulePath,
  /// Declaration order defines the index to id mapping the runtime relies on.
  #[serde(default)]
  pub dependencies: Vec<Dependency>,
  #[serde(default)]
  pub output: Vec<MixedOutput>,
}

impl Module {
  pub fn new(
    path: impl Into<ModulePath>,
    dependencies: Vec<Dependency>,
    output: Vec<MixedOutput>,
  ) -> Self {
    Self { path: path.into(), dependencies, output }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
  pub absolute_path: ModulePath,
  /// `Some` when the edge has to be loadable as a separate bundle at runtime.
  #[serde(default)]
  pub async_type: Option<AsyncDependencyType>,
}

impl Dependency {
  pub fn new(absolute_path: impl Into<ModulePath>) -> Self {
    Self { absolute_path: absolute_path.into(), async_type: None }
  }

  pub fn with_async_type(mut self, async_type: AsyncDependencyType) -> Self {
    self.async_type = Some(async_type);
    self
  }

  pub fn is_async(&self) -> bool {
    self.async_type.is_some()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AsyncDependencyType {
  /// `import('./x')`
  Async,
  /// `__prefetchImport('./x')`
  Prefetch,
  /// `require.resolveWeak('./x')`
  Weak,
  /// `import()` that may be resolved synchronously by the runtime.
  MaybeSync,
}

#[test]
fn test_deserialize_module() {
  let module: Module = serde_json::from_str(
    r#"{
      "path": "/proj/src/screens/Home.js",
      "dependencies": [
        { "absolutePath": "/proj/src/lib/util.js", "asyncType": null },
        { "absolutePath": "/proj/src/screens/Settings.js", "asyncType": "async" },
        { "absolutePath": "/proj/src/lib/lazy.js", "asyncType": "maybeSync" }
      ],
      "output": [{ "type": "js/module", "data": { "code": "__d(function() {});", "lineCount": 0 } }]
    }"#,
  )
  .unwrap();

  assert_eq!(&*module.path, "/proj/src/screens/Home.js");
  let async_types = module.dependencies.iter().map(|dep| dep.async_type).collect::<Vec<_>>();
  assert_eq!(
    async_types,
    [None, Some(AsyncDependencyType::Async), Some(AsyncDependencyType::MaybeSync)]
  );
  assert_eq!(module.output.len(), 1);
}

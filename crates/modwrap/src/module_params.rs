use modwrap_common::{Dependency, Module, ModuleId, NormalizedSerializerOptions};
use modwrap_error::SerializeResult;

use crate::{
  dependency_map::{DependencyMap, SplitPaths},
  split_path::{split_path_for_dependency, SourceUrl},
};

/// Arguments appended to a module's registration call: `[id, dependencyMap]`, plus the
/// project relative path of the module in development builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleParams {
  pub module_id: ModuleId,
  pub dependency_map: DependencyMap,
  /// Shown by the runtime as `module.verboseName`.
  pub verbose_name: Option<String>,
}

impl ModuleParams {
  /// Each param as a JavaScript expression.
  pub fn to_json_params(&self) -> serde_json::Result<Vec<String>> {
    let mut params =
      vec![serde_json::to_string(&self.module_id)?, serde_json::to_string(&self.dependency_map)?];
    if let Some(verbose_name) = &self.verbose_name {
      params.push(serde_json::to_string(verbose_name)?);
    }
    Ok(params)
  }

  pub fn paths(&self) -> Option<&SplitPaths> {
    self.dependency_map.paths()
  }

  pub fn into_paths(self) -> SplitPaths {
    self.dependency_map.into_paths()
  }
}

pub fn get_module_params(
  module: &Module,
  options: &NormalizedSerializerOptions,
) -> SerializeResult<ModuleParams> {
  let create_module_id = options.create_module_id.as_ref();
  let module_id = create_module_id.create_module_id(&module.path);

  // A malformed url only matters once there is an async dependency to address with it.
  let source_url = match &options.source_url {
    Some(url) if module.dependencies.iter().any(Dependency::is_async) => {
      Some(SourceUrl::parse(url)?)
    }
    _ => None,
  };

  let mut paths = SplitPaths::default();
  let mut ids = Vec::with_capacity(module.dependencies.len());
  for dependency in &module.dependencies {
    let id = create_module_id.create_module_id(&dependency.absolute_path);
    if dependency.is_async() && (source_url.is_some() || options.include_async_paths) {
      let path = split_path_for_dependency(module, dependency, options, source_url.as_ref())?;
      paths.insert(&id, path);
    }
    ids.push(id);
  }

  let verbose_name = options.dev.then(|| module.path.stabilize(&options.project_root));

  let params =
    ModuleParams { module_id, dependency_map: DependencyMap::new(ids, paths), verbose_name };
  tracing::trace!(module = %module.path, ?params, "module params");
  Ok(params)
}

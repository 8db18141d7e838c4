use arcstr::ArcStr;
use modwrap_common::{Module, ModulePath, NormalizedSerializerOptions};
use modwrap_error::BuildResult;
use modwrap_utils::rayon::{IntoParallelRefIterator, ParallelIterator};

use crate::{
  dependency_map::SplitPaths,
  js_output::is_js_module,
  wrap_module::{wrap_module, WrappedModule},
};

#[derive(Debug, Clone)]
pub struct SerializedModule {
  pub path: ModulePath,
  pub src: ArcStr,
}

#[derive(Debug, Default)]
pub struct SerializedModules {
  /// In the order the modules were given.
  pub modules: Vec<SerializedModule>,
  /// Split bundle paths of every module.
  pub paths: SplitPaths,
}

impl SerializedModules {
  /// Sources joined with a `\n` between each module.
  pub fn join(&self) -> String {
    let size_hint = self.modules.iter().map(|module| module.src.len() + 1).sum::<usize>();
    let mut joined = String::with_capacity(size_hint);
    for (idx, module) in self.modules.iter().enumerate() {
      if idx > 0 {
        joined.push('\n');
      }
      joined.push_str(&module.src);
    }
    joined
  }
}

/// Wraps every JS module of the graph in parallel.
///
/// Non-JS modules (assets, css) are skipped. Failures do not stop the other modules, all of them
/// are reported together.
pub fn serialize_modules(
  modules: &[Module],
  options: &NormalizedSerializerOptions,
) -> BuildResult<SerializedModules> {
  let results = modules
    .par_iter()
    .filter(|module| is_js_module(module))
    .map(|module| wrap_module(module, options).map(|wrapped| (module, wrapped)))
    .collect::<Vec<_>>();

  let mut errors: Vec<anyhow::Error> = vec![];
  let mut serialized = SerializedModules::default();
  for result in results {
    match result {
      Ok((module, WrappedModule { src, paths })) => {
        serialized.paths.extend(paths);
        serialized.modules.push(SerializedModule { path: module.path.clone(), src });
      }
      Err(err) => errors.push(err.into()),
    }
  }

  if !errors.is_empty() {
    return Err(errors.into());
  }

  tracing::debug!(
    modules = serialized.modules.len(),
    split_paths = serialized.paths.len(),
    "serialized modules"
  );
  Ok(serialized)
}

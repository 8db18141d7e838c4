mod dependency_map;
mod js_output;
mod module_params;
mod serialize_modules;
mod split_path;
mod utils;
mod wrap_module;

pub use crate::{
  dependency_map::{DependencyMap, SplitPaths},
  js_output::{get_js_output, is_js_module, is_js_output, JsOutput},
  module_params::{get_module_params, ModuleParams},
  serialize_modules::{serialize_modules, SerializedModule, SerializedModules},
  split_path::{
    dev_split_bundle_path, export_path_for_dependency, export_path_for_dependency_with_options,
    split_path_for_dependency, ExportPathOptions, SourceUrl,
  },
  utils::normalize_options::normalize_options,
  wrap_module::{wrap_module, WrappedModule},
};
pub use modwrap_common::*;
pub use modwrap_error::{BuildError, BuildResult, SerializeError, SerializeResult};

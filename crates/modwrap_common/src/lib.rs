mod create_module_id;
mod module;
mod options;
mod types;

pub use crate::{
  create_module_id::{CreateModuleId, ModuleIdFactory, SharedCreateModuleId},
  module::{AsyncDependencyType, Dependency, Module},
  options::{
    normalized_serializer_options::NormalizedSerializerOptions,
    serializer_options::SerializerOptions,
  },
  types::{
    mixed_output::{MixedOutput, OutputData},
    module_id::ModuleId,
    module_path::ModulePath,
  },
};

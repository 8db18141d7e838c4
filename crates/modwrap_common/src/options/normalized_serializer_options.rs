use std::path::PathBuf;

use arcstr::ArcStr;

use crate::SharedCreateModuleId;

pub struct NormalizedSerializerOptions {
  pub create_module_id: SharedCreateModuleId,
  pub dev: bool,
  pub include_async_paths: bool,
  pub platform: Option<ArcStr>,
  pub project_root: PathBuf,
  pub server_root: PathBuf,
  pub source_url: Option<ArcStr>,
}

impl std::fmt::Debug for NormalizedSerializerOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NormalizedSerializerOptions")
      .field("dev", &self.dev)
      .field("include_async_paths", &self.include_async_paths)
      .field("platform", &self.platform)
      .field("project_root", &self.project_root)
      .field("server_root", &self.server_root)
      .field("source_url", &self.source_url)
      .finish_non_exhaustive()
  }
}

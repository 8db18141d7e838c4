use anyhow::Context;
use arcstr::ArcStr;
use modwrap_common::{NormalizedSerializerOptions, SerializerOptions, SharedCreateModuleId};
use sugar_path::SugarPath;

pub fn normalize_options(
  raw_options: SerializerOptions,
  create_module_id: SharedCreateModuleId,
) -> anyhow::Result<NormalizedSerializerOptions> {
  let project_root = match raw_options.project_root {
    Some(project_root) => project_root.absolutize(),
    None => std::env::current_dir().context("Failed to get current dir")?,
  };
  let server_root = raw_options
    .server_root
    .map_or_else(|| project_root.clone(), |server_root| server_root.absolutize());

  Ok(NormalizedSerializerOptions {
    create_module_id,
    dev: raw_options.dev.unwrap_or(false),
    include_async_paths: raw_options.include_async_paths.unwrap_or(false),
    platform: raw_options.platform.filter(|platform| !platform.is_empty()).map(ArcStr::from),
    project_root,
    server_root,
    source_url: raw_options.source_url.map(ArcStr::from),
  })
}

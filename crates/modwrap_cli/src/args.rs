use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// JSON dump of the module graph: an array of modules.
  pub graph: PathBuf,

  /// JSON file with serializer options, overridden by the flags below.
  #[clap(long, short)]
  pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct SerializerArgs {
  #[clap(long)]
  pub dev: bool,

  #[clap(long)]
  pub include_async_paths: bool,

  #[clap(long, short)]
  pub platform: Option<String>,

  #[clap(long)]
  pub project_root: Option<PathBuf>,

  #[clap(long)]
  pub server_root: Option<PathBuf>,

  #[clap(long)]
  pub source_url: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Write the bundle here instead of stdout.
  #[clap(long, short = 'o')]
  pub out: Option<PathBuf>,

  #[clap(long, short = 's')]
  pub silent: bool,
}

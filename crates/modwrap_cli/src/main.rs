mod args;

use std::{fs, io::Write, sync::Arc, time::Instant};

use ansi_term::Colour;
use anyhow::Context;
use args::{InputArgs, OutputArgs, SerializerArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use modwrap::{
  normalize_options, serialize_modules, Module, ModuleIdFactory, SerializerOptions, SplitPaths,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  serializer: SerializerArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_options(input: &InputArgs, args: SerializerArgs) -> anyhow::Result<SerializerOptions> {
  let mut options = match &input.config {
    Some(config) => {
      let content = fs::read_to_string(config)
        .with_context(|| format!("Failed to read config {}", config.display()))?;
      serde_json::from_str::<SerializerOptions>(&content)
        .with_context(|| format!("Invalid config {}", config.display()))?
    }
    None => SerializerOptions::default(),
  };

  if args.dev {
    options.dev = Some(true);
  }
  if args.include_async_paths {
    options.include_async_paths = Some(true);
  }
  options.platform = args.platform.or(options.platform);
  options.project_root = args.project_root.or(options.project_root);
  options.server_root = args.server_root.or(options.server_root);
  options.source_url = args.source_url.or(options.source_url);
  Ok(options)
}

fn load_graph(input: &InputArgs) -> anyhow::Result<Vec<Module>> {
  let content = fs::read_to_string(&input.graph)
    .with_context(|| format!("Failed to read module graph {}", input.graph.display()))?;
  serde_json::from_str(&content)
    .with_context(|| format!("Invalid module graph {}", input.graph.display()))
}

fn print_split_paths(paths: &SplitPaths) {
  let width = paths.entries().map(|(id, _)| id.len()).max().unwrap_or(0);
  let dim = Colour::White.dimmed();
  for (id, path) in paths.entries() {
    eprintln!("{}{:>width$} {} {}", dim.paint("split "), id, dim.paint("→"), Colour::Cyan.paint(path));
  }
}

fn run(args: Commands) -> anyhow::Result<bool> {
  let start = Instant::now();
  let modules = load_graph(&args.input)?;
  let options = normalize_options(
    load_options(&args.input, args.serializer)?,
    Arc::new(ModuleIdFactory::new()),
  )?;
  tracing::debug!(?options, modules = modules.len(), "serializing module graph");

  let serialized = match serialize_modules(&modules, &options) {
    Ok(serialized) => serialized,
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      }
      return Ok(false);
    }
  };

  let bundle = serialized.join();
  match &args.output.out {
    Some(out) => {
      fs::write(out, &bundle).with_context(|| format!("Failed to write {}", out.display()))?;
    }
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(bundle.as_bytes())?;
      stdout.write_all(b"\n")?;
    }
  }

  if !args.output.silent {
    print_split_paths(&serialized.paths);
    let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
    eprintln!(
      "{} Serialized {} modules in {}",
      Colour::Green.paint("✔"),
      serialized.modules.len(),
      Colour::White.bold().paint(elapsed)
    );
  }
  Ok(true)
}

fn main() -> std::process::ExitCode {
  init_tracing();
  match run(Commands::parse()) {
    Ok(true) => std::process::ExitCode::SUCCESS,
    Ok(false) => std::process::ExitCode::FAILURE,
    Err(err) => {
      eprintln!("{} {:#}", Colour::Red.paint("Error:"), err);
      std::process::ExitCode::FAILURE
    }
  }
}

#[test]
fn verify_cli() {
  use clap::CommandFactory;
  Commands::command().debug_assert();
}

#[test]
fn flags_fill_options() {
  let input = InputArgs { graph: "graph.json".into(), config: None };
  let args = SerializerArgs {
    dev: true,
    include_async_paths: false,
    platform: Some("ios".to_string()),
    project_root: None,
    server_root: Some("/repo".into()),
    source_url: None,
  };
  let options = load_options(&input, args).unwrap();
  assert_eq!(options.dev, Some(true));
  assert_eq!(options.include_async_paths, None);
  assert_eq!(options.platform.as_deref(), Some("ios"));
  assert_eq!(options.server_root, Some("/repo".into()));
}

mod build_error;
mod serialize_error;

pub use crate::{
  build_error::{BuildError, BuildResult},
  serialize_error::{SerializeError, SerializeResult},
};

mod define_call;

pub use crate::define_call::{DefineCall, DefineCallError};

pub mod mixed_output;
pub mod module_id;
pub mod module_path;

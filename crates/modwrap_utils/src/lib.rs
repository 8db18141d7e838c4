pub mod file_name;
pub mod indexmap;
pub mod jsc_safe_url;
pub mod lines_count;
pub mod path_ext;
pub mod rayon;
pub mod sanitize_file_name;
pub mod xxhash;

pub use concat_string::concat_string;

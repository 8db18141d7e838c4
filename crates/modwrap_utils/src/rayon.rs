pub use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

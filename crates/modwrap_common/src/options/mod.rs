pub mod normalized_serializer_options;
pub mod serializer_options;

pub mod normalizer;
pub mod tabularizer;

pub use normalizer::normalize;
pub use tabularizer::tabularize;

mod classification_pipeline;

pub use classification_pipeline::*;

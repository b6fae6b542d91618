// Adapters layer: concrete implementations for external systems (model file, dataset file, completion API).

pub mod dataset;
pub mod gemini;
pub mod model_artifact;

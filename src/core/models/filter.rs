//! Capability predicates over model descriptors.

use super::info::ModelDescriptor;

/// Generation method that marks a model as able to produce content.
pub const GENERATE_CONTENT: &str = "generateContent";

/// Name fragments that mark a generation-capable model as presumably multimodal.
/// A naming heuristic, not a capability flag: it over- and under-selects.
const MULTIMODAL_NAME_HINTS: [&str; 2] = ["vision", "pro"];

/// True when the model lists `generateContent` among its methods (exact match).
pub fn supports_generate_content(model: &ModelDescriptor) -> bool {
    model
        .supported_generation_methods
        .iter()
        .any(|m| m == GENERATE_CONTENT)
}

/// True when the model is generation-capable and its name contains
/// "vision" or "pro" (case-insensitive substring).
pub fn looks_multimodal(model: &ModelDescriptor) -> bool {
    if !supports_generate_content(model) {
        return false;
    }
    let name = model.name.to_lowercase();
    MULTIMODAL_NAME_HINTS.iter().any(|hint| name.contains(hint))
}

/// Models that support `generateContent`, in catalog order.
pub fn generation_capable(models: &[ModelDescriptor]) -> Vec<&ModelDescriptor> {
    models.iter().filter(|m| supports_generate_content(m)).collect()
}

/// Generation-capable models matching the multimodal name heuristic, in catalog order.
pub fn multimodal(models: &[ModelDescriptor]) -> Vec<&ModelDescriptor> {
    models.iter().filter(|m| looks_multimodal(m)).collect()
}

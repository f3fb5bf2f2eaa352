use crate::document::Document;
use crate::error::{HookError, HookResult};
use crate::validator::validate_document;

/// Parse a rendered-document description from YAML and validate it.
pub fn parse_document(yaml: &str) -> HookResult<Document> {
    if yaml.trim().is_empty() {
        return Err(HookError::EmptyDocument);
    }
    let doc: Document = serde_yaml::from_str(yaml)?;
    validate_document(&doc)?;
    Ok(doc)
}

use crate::document::Document;
use crate::error::{HookError, HookResult};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn id_regex() -> &'static Regex {
    static ID_RE: OnceLock<Regex> = OnceLock::new();
    ID_RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap())
}

/// Validate a parsed document: every id well-formed and unique.
///
/// Scroll targets and click dispatch address elements by id, so a duplicate
/// or malformed id is rejected at parse time rather than silently resolving
/// to the wrong element later.
pub fn validate_document(doc: &Document) -> HookResult<()> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result: HookResult<()> = Ok(());
    doc.for_each_element(|el| {
        if result.is_err() {
            return;
        }
        if let Some(id) = &el.id {
            if !id_regex().is_match(id) {
                result = Err(HookError::InvalidId { id: id.clone() });
            } else if !seen.insert(id.clone()) {
                result = Err(HookError::DuplicateId { id: id.clone() });
            }
        }
    });
    result
}

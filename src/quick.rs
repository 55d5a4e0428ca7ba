//! Quick-operation mini forms
//!
//! Small inputs in the page header that jump straight to a page when Enter is
//! pressed: register a new sample, find one, or start a transfer.

/// True for the keypress that submits a quick form
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// `/add/<id>` for a non-blank id
pub fn register_url(id: &str) -> Option<String> {
    non_blank(id).map(|id| format!("/add/{}", id))
}

/// `/find/<id>` for a non-blank id
pub fn find_url(id: &str) -> Option<String> {
    non_blank(id).map(|id| format!("/find/{}", id))
}

/// Query string for a transfer, skipping blank fields.
///
/// Parameters keep the order `fromID`, `toID`, `project`. Returns `None`
/// when all three are blank.
pub fn transfer_params(from: &str, to: &str, project: &str) -> Option<String> {
    let params: Vec<String> = [("fromID", from), ("toID", to), ("project", project)]
        .iter()
        .filter_map(|&(name, value)| non_blank(value).map(|v| format!("{}={}", name, v)))
        .collect();

    if params.is_empty() {
        None
    } else {
        Some(format!("?{}", params.join("&")))
    }
}

/// `/transfer?...` for at least one non-blank field
pub fn transfer_url(from: &str, to: &str, project: &str) -> Option<String> {
    transfer_params(from, to, project).map(|params| format!("/transfer{}", params))
}

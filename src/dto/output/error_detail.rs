use serde::Serialize;

///
/// Body of every error response
///
#[derive(Debug, Serialize)]
pub struct ErrorDetail<T> {
    pub detail: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDetail {
    /// Location of the offending value, e.g. `["body", "title"]`
    pub loc: Vec<String>,
    pub msg: String,
}

impl ValidationDetail {
    pub fn new(loc: &[&str], msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
        }
    }
}

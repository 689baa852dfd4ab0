use serde::{Deserialize, Serialize};

/// A request for a letter of recommendation, keyed by a server-assigned id.
/// Dates are carried as the `datetime-local` strings the form produced; they
/// are never reinterpreted on this side of the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: String,
    pub date_needed: String,
    // some responses carry "true"/"false" instead of a bool
    #[serde(with = "super::boolish")]
    pub done: bool,
}

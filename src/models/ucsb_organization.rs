use serde::{Deserialize, Serialize};

/// A campus organization. `org_code` is the natural key. `inactive` stays a
/// string end to end ("true"/"false") to match the backend's wire traffic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: String,
}

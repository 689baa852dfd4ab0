use serde::{Deserialize, Serialize};

/// Response shape of `/api/systemInfo`; feature flags for the navbar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    #[serde(default, rename = "showSwaggerUILink")]
    pub show_swagger_ui_link: bool,
    #[serde(default)]
    pub source_repo: Option<String>,
}

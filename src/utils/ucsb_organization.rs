//! Request builders and notification messages for UCSB organizations. The
//! natural key `orgCode` rides in the query string; update bodies carry it
//! again alongside the editable fields, as the backend expects.

use crate::backend::{Method, RequestDescriptor};
use crate::components::ucsb_organization_form::UcsbOrganizationFormValues;
use crate::models::ucsb_organization::UcsbOrganization;
use serde_json::{json, Value};

pub const COLLECTION_KEY: &str = "/api/ucsborganization/all";

pub fn all_params() -> RequestDescriptor {
    RequestDescriptor::get(COLLECTION_KEY)
}

pub fn by_code_key(org_code: &str) -> String {
    format!("/api/ucsborganization?orgCode={org_code}")
}

pub fn by_code_params(org_code: &str) -> RequestDescriptor {
    RequestDescriptor::get("/api/ucsborganization").param("orgCode", org_code)
}

pub fn create_params(values: &UcsbOrganizationFormValues) -> RequestDescriptor {
    RequestDescriptor::new(Method::Post, "/api/ucsborganization/post")
        .param("orgCode", &values.org_code)
        .param("orgTranslationShort", &values.org_translation_short)
        .param("orgTranslation", &values.org_translation)
        .param("inactive", &values.inactive)
}

pub fn update_params(values: &UcsbOrganizationFormValues) -> RequestDescriptor {
    RequestDescriptor::new(Method::Put, "/api/ucsborganization")
        .param("orgCode", &values.org_code)
        .body(json!({
            "orgCode": values.org_code,
            "orgTranslationShort": values.org_translation_short,
            "orgTranslation": values.org_translation,
            "inactive": values.inactive,
        }))
}

pub fn delete_params(organization: &UcsbOrganization) -> RequestDescriptor {
    RequestDescriptor::new(Method::Delete, "/api/ucsborganization")
        .param("orgCode", organization.org_code.clone())
}

pub fn created_message(response: &Value) -> String {
    format!(
        "New organization Created - orgCode: {}",
        response
            .get("orgCode")
            .and_then(Value::as_str)
            .unwrap_or_default()
    )
}

pub fn updated_message(response: &Value) -> String {
    format!(
        "UCSB Organization Updated - orgCode: {}",
        response
            .get("orgCode")
            .and_then(Value::as_str)
            .unwrap_or_default()
    )
}

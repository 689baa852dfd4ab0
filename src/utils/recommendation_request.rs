//! Request builders and notification messages for recommendation requests.
//! Creation transmits the form values as query parameters; updates send a
//! JSON body keyed by id. Both shapes are a contract with the backend.

use crate::backend::{Method, RequestDescriptor};
use crate::components::recommendation_request_form::RecommendationRequestFormValues;
use crate::models::recommendation_request::RecommendationRequest;
use serde_json::{json, Value};

pub const COLLECTION_KEY: &str = "/api/recommendationrequest/all";

pub fn all_params() -> RequestDescriptor {
    RequestDescriptor::get(COLLECTION_KEY)
}

pub fn by_id_key(id: &str) -> String {
    format!("/api/recommendationrequest?id={id}")
}

pub fn by_id_params(id: &str) -> RequestDescriptor {
    RequestDescriptor::get("/api/recommendationrequest").param("id", id)
}

pub fn create_params(values: &RecommendationRequestFormValues) -> RequestDescriptor {
    RequestDescriptor::new(Method::Post, "/api/recommendationrequest/post")
        .param("requesterEmail", &values.requester_email)
        .param("professorEmail", &values.professor_email)
        .param("explanation", &values.explanation)
        .param("dateRequested", &values.date_requested)
        .param("dateNeeded", &values.date_needed)
        .param("done", &values.done)
}

pub fn update_params(values: &RecommendationRequestFormValues) -> RequestDescriptor {
    RequestDescriptor::new(Method::Put, "/api/recommendationrequest")
        .param("id", values.id.clone().unwrap_or_default())
        .body(json!({
            "requesterEmail": values.requester_email,
            "professorEmail": values.professor_email,
            "explanation": values.explanation,
            "dateRequested": values.date_requested,
            "dateNeeded": values.date_needed,
            "done": values.done == "true",
        }))
}

pub fn delete_params(request: &RecommendationRequest) -> RequestDescriptor {
    RequestDescriptor::new(Method::Delete, "/api/recommendationrequest")
        .param("id", request.id.to_string())
}

pub fn created_message(response: &Value) -> String {
    format!(
        "New request Created - id: {} requester email: {}",
        response.get("id").and_then(Value::as_i64).unwrap_or_default(),
        response
            .get("requesterEmail")
            .and_then(Value::as_str)
            .unwrap_or_default()
    )
}

pub fn updated_message(response: &Value) -> String {
    format!(
        "Recommendation Request Updated - id: {}",
        response.get("id").and_then(Value::as_i64).unwrap_or_default()
    )
}

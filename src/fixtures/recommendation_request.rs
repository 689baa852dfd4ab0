use crate::models::recommendation_request::RecommendationRequest;

pub fn one_recommendation_request() -> RecommendationRequest {
    RecommendationRequest {
        id: 1,
        requester_email: "@student1".into(),
        professor_email: "@professor1".into(),
        explanation: "explanation1".into(),
        date_requested: "2022-01-03T00:00:00".into(),
        date_needed: "2022-01-10T00:00:00".into(),
        done: true,
    }
}

pub fn three_recommendation_requests() -> Vec<RecommendationRequest> {
    vec![
        RecommendationRequest {
            id: 2,
            requester_email: "@student2".into(),
            professor_email: "@professor2".into(),
            explanation: "explanation2".into(),
            date_requested: "2022-03-11T00:00:00".into(),
            date_needed: "2022-03-18T00:00:00".into(),
            done: true,
        },
        RecommendationRequest {
            id: 3,
            requester_email: "@student3".into(),
            professor_email: "@professor3".into(),
            explanation: "explanation3".into(),
            date_requested: "2022-04-21T00:00:00".into(),
            date_needed: "2022-04-28T00:00:00".into(),
            done: false,
        },
        RecommendationRequest {
            id: 4,
            requester_email: "@student4".into(),
            professor_email: "@professor4".into(),
            explanation: "explanation4".into(),
            date_requested: "2022-05-01T00:00:00".into(),
            date_needed: "2022-05-08T00:00:00".into(),
            done: false,
        },
    ]
}

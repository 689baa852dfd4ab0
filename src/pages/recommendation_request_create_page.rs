use crate::backend::{use_backend_mutation, Backend};
use crate::components::recommendation_request_form::{
    RecommendationRequestForm, RecommendationRequestFormValues,
};
use crate::utils::navigation::Navigator;
use crate::utils::notifications::Notifier;
use crate::utils::recommendation_request;
use leptos::*;

/// Starts ready with empty defaults; on a successful POST it notifies with
/// the created record's identifying fields and redirects to the index.
#[component]
pub fn RecommendationRequestCreatePage(
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
) -> impl IntoView {
    let mutation = use_backend_mutation(
        &backend,
        |values: &RecommendationRequestFormValues| recommendation_request::create_params(values),
        vec![recommendation_request::COLLECTION_KEY.to_string()],
        move |response| notifier.notify(recommendation_request::created_message(response)),
    );
    let is_success = mutation.is_success;

    {
        let navigator = navigator.clone();
        create_effect(move |_| {
            if is_success.get() {
                navigator.push("/recommendationrequest");
            }
        });
    }

    let submit_action = Callback::new(move |values| mutation.mutate(values));

    view! {
        <div class="pt-2">
            <h1>"Create New Recommendation Request"</h1>
            <Show when=move || !is_success.get() fallback=|| ()>
                <RecommendationRequestForm
                    navigator=navigator.clone()
                    submit_action=submit_action
                />
            </Show>
        </div>
    }
}

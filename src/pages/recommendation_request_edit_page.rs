use crate::backend::{use_backend, use_backend_mutation, Backend};
use crate::components::recommendation_request_form::{
    RecommendationRequestForm, RecommendationRequestFormValues,
};
use crate::models::recommendation_request::RecommendationRequest;
use crate::utils::navigation::Navigator;
use crate::utils::notifications::Notifier;
use crate::utils::recommendation_request;
use leptos::*;

/// Loading until the GET resolves (a failed GET leaves the header alone);
/// after a successful PUT it notifies and redirects to the index.
#[component]
pub fn RecommendationRequestEditPage(
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
    #[prop(into)] id: String,
) -> impl IntoView {
    let cache_key = recommendation_request::by_id_key(&id);
    let query = use_backend::<RecommendationRequest>(
        &backend,
        &cache_key,
        recommendation_request::by_id_params(&id),
    );

    let mutation = use_backend_mutation(
        &backend,
        |values: &RecommendationRequestFormValues| recommendation_request::update_params(values),
        vec![cache_key, recommendation_request::COLLECTION_KEY.to_string()],
        move |response| notifier.notify(recommendation_request::updated_message(response)),
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
            <h1>"Edit Recommendation Request"</h1>
            <Show when=move || !is_success.get() fallback=|| ()>
                {
                    let navigator = navigator.clone();
                    move || query.data.get().map(|request| {
                        let navigator = navigator.clone();
                        view! {
                            <RecommendationRequestForm
                                navigator=navigator
                                submit_action=submit_action
                                initial_contents=request
                                button_label="Update"
                            />
                        }
                    })
                }
            </Show>
        </div>
    }
}

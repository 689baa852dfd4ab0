use crate::backend::{use_backend, Backend};
use crate::components::recommendation_request_table::RecommendationRequestTable;
use crate::models::current_user::Capability;
use crate::models::recommendation_request::RecommendationRequest;
use crate::utils::navigation::Navigator;
use crate::utils::notifications::Notifier;
use crate::utils::recommendation_request;
use leptos::*;

#[component]
pub fn RecommendationRequestIndexPage(
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
    #[prop(into)] capability: MaybeSignal<Capability>,
) -> impl IntoView {
    let query = use_backend::<Vec<RecommendationRequest>>(
        &backend,
        recommendation_request::COLLECTION_KEY,
        recommendation_request::all_params(),
    );

    let create_navigator = navigator.clone();

    view! {
        <div class="pt-2">
            {move || capability.get().can_manage.then(|| {
                let navigator = create_navigator.clone();
                view! {
                    <button
                        type="button"
                        class="btn btn-primary"
                        style="float: right;"
                        on:click=move |_| navigator.push("/recommendationrequest/create")
                    >
                        "Create Recommendation Request"
                    </button>
                }
            })}
            <h1>"Recommendation Requests"</h1>
            {move || query.data.get().map(|requests| view! {
                <RecommendationRequestTable
                    requests=requests
                    capability=capability.get()
                    backend=backend.clone()
                    navigator=navigator.clone()
                    notifier=notifier.clone()
                />
            })}
        </div>
    }
}

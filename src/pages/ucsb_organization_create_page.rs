use crate::backend::{use_backend_mutation, Backend};
use crate::components::ucsb_organization_form::{UCSBOrganizationForm, UcsbOrganizationFormValues};
use crate::utils::navigation::Navigator;
use crate::utils::notifications::Notifier;
use crate::utils::ucsb_organization;
use leptos::*;

#[component]
pub fn UCSBOrganizationCreatePage(
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
) -> impl IntoView {
    let mutation = use_backend_mutation(
        &backend,
        |values: &UcsbOrganizationFormValues| ucsb_organization::create_params(values),
        vec![ucsb_organization::COLLECTION_KEY.to_string()],
        move |response| notifier.notify(ucsb_organization::created_message(response)),
    );
    let is_success = mutation.is_success;

    {
        let navigator = navigator.clone();
        create_effect(move |_| {
            if is_success.get() {
                navigator.push("/ucsborganization");
            }
        });
    }

    let submit_action = Callback::new(move |values| mutation.mutate(values));

    view! {
        <div class="pt-2">
            <h1>"Create New Organization"</h1>
            <Show when=move || !is_success.get() fallback=|| ()>
                <UCSBOrganizationForm
                    navigator=navigator.clone()
                    submit_action=submit_action
                />
            </Show>
        </div>
    }
}

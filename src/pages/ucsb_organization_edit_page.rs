use crate::backend::{use_backend, use_backend_mutation, Backend};
use crate::components::ucsb_organization_form::{UCSBOrganizationForm, UcsbOrganizationFormValues};
use crate::models::ucsb_organization::UcsbOrganization;
use crate::utils::navigation::Navigator;
use crate::utils::notifications::Notifier;
use crate::utils::ucsb_organization;
use leptos::*;

#[component]
pub fn UCSBOrganizationEditPage(
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
    #[prop(into)] org_code: String,
) -> impl IntoView {
    let cache_key = ucsb_organization::by_code_key(&org_code);
    let query = use_backend::<UcsbOrganization>(
        &backend,
        &cache_key,
        ucsb_organization::by_code_params(&org_code),
    );

    let mutation = use_backend_mutation(
        &backend,
        |values: &UcsbOrganizationFormValues| ucsb_organization::update_params(values),
        vec![cache_key, ucsb_organization::COLLECTION_KEY.to_string()],
        move |response| notifier.notify(ucsb_organization::updated_message(response)),
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
            <h1>"Edit Organization"</h1>
            <Show when=move || !is_success.get() fallback=|| ()>
                {
                    let navigator = navigator.clone();
                    move || query.data.get().map(|organization| {
                        let navigator = navigator.clone();
                        view! {
                            <UCSBOrganizationForm
                                navigator=navigator
                                submit_action=submit_action
                                initial_contents=organization
                                button_label="Update"
                            />
                        }
                    })
                }
            </Show>
        </div>
    }
}

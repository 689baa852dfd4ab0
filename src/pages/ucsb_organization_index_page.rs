use crate::backend::{use_backend, Backend};
use crate::components::ucsb_organization_table::UCSBOrganizationTable;
use crate::models::current_user::Capability;
use crate::models::ucsb_organization::UcsbOrganization;
use crate::utils::navigation::Navigator;
use crate::utils::notifications::Notifier;
use crate::utils::ucsb_organization;
use leptos::*;

#[component]
pub fn UCSBOrganizationIndexPage(
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
    #[prop(into)] capability: MaybeSignal<Capability>,
) -> impl IntoView {
    let query = use_backend::<Vec<UcsbOrganization>>(
        &backend,
        ucsb_organization::COLLECTION_KEY,
        ucsb_organization::all_params(),
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
                        on:click=move |_| navigator.push("/ucsborganization/create")
                    >
                        "Create UCSBOrganization"
                    </button>
                }
            })}
            <h1>"UCSB Organizations"</h1>
            {move || query.data.get().map(|organizations| view! {
                <UCSBOrganizationTable
                    organizations=organizations
                    capability=capability.get()
                    backend=backend.clone()
                    navigator=navigator.clone()
                    notifier=notifier.clone()
                />
            })}
        </div>
    }
}

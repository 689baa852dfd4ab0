use crate::backend::{use_backend_mutation, Backend};
use crate::models::current_user::Capability;
use crate::models::ucsb_organization::UcsbOrganization;
use crate::utils::navigation::Navigator;
use crate::utils::notifications::{response_message, Notifier};
use crate::utils::ucsb_organization;
use leptos::*;

const TEST_ID: &str = "UCSBOrganizationTable";

type Column = (&'static str, fn(&UcsbOrganization) -> String);

const COLUMNS: [Column; 4] = [
    ("OrgCode", |organization| organization.org_code.clone()),
    ("OrgTranslationShort", |organization| {
        organization.org_translation_short.clone()
    }),
    ("OrgTranslation", |organization| {
        organization.org_translation.clone()
    }),
    ("Inactive", |organization| organization.inactive.clone()),
];

/// One row per organization. Edit/Delete only render for users that can
/// manage records; Delete invalidates the collection so the row disappears on
/// the refetch.
#[component]
pub fn UCSBOrganizationTable(
    organizations: Vec<UcsbOrganization>,
    capability: Capability,
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
) -> impl IntoView {
    let delete_mutation = use_backend_mutation(
        &backend,
        |organization: &UcsbOrganization| ucsb_organization::delete_params(organization),
        vec![ucsb_organization::COLLECTION_KEY.to_string()],
        move |response| notifier.notify(response_message(response)),
    );

    view! {
        <table class="table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|(header, _)| view! { <th>{*header}</th> }).collect::<Vec<_>>()}
                    {capability.can_manage.then(|| view! {
                        <th>"Edit"</th>
                        <th>"Delete"</th>
                    })}
                </tr>
            </thead>
            <tbody>
                {organizations.into_iter().enumerate().map(|(index, organization)| {
                    let cells = COLUMNS.iter().map(|(field, value_of)| view! {
                        <td data-testid=format!("{TEST_ID}-cell-row-{index}-col-{field}")>
                            {value_of(&organization)}
                        </td>
                    }).collect::<Vec<_>>();
                    let actions = capability.can_manage.then(|| {
                        let edit_target = format!("/ucsborganization/edit/{}", organization.org_code);
                        let navigator = navigator.clone();
                        let delete_mutation = delete_mutation.clone();
                        let record = organization.clone();
                        view! {
                            <td>
                                <button
                                    type="button"
                                    class="btn btn-primary"
                                    data-testid=format!("{TEST_ID}-cell-row-{index}-col-Edit-button")
                                    on:click=move |_| navigator.push(&edit_target)
                                >
                                    "Edit"
                                </button>
                            </td>
                            <td>
                                <button
                                    type="button"
                                    class="btn btn-danger"
                                    data-testid=format!("{TEST_ID}-cell-row-{index}-col-Delete-button")
                                    on:click=move |_| delete_mutation.mutate(record.clone())
                                >
                                    "Delete"
                                </button>
                            </td>
                        }
                    });
                    view! { <tr>{cells}{actions}</tr> }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

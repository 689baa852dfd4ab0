/// Application shell: router, navbar, toast area, and the wiring that hands
/// each page its backend, navigator, notifier, and capability.
use crate::backend::{use_backend, Backend, RequestDescriptor};
use crate::models::current_user::CurrentUser;
use crate::models::system_info::SystemInfo;
use crate::pages::recommendation_request_create_page::RecommendationRequestCreatePage;
use crate::pages::recommendation_request_edit_page::RecommendationRequestEditPage;
use crate::pages::recommendation_request_index_page::RecommendationRequestIndexPage;
use crate::pages::ucsb_organization_create_page::UCSBOrganizationCreatePage;
use crate::pages::ucsb_organization_edit_page::UCSBOrganizationEditPage;
use crate::pages::ucsb_organization_index_page::UCSBOrganizationIndexPage;
use crate::utils::navigation::Navigator;
use crate::utils::notifications::{use_toasts, Notifier, Toast};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = Backend::over_http();
    let (toasts, notifier) = use_toasts();

    let current_user = use_backend::<CurrentUser>(
        &backend,
        "/api/currentUser",
        RequestDescriptor::get("/api/currentUser"),
    );
    let system_info = use_backend::<SystemInfo>(
        &backend,
        "/api/systemInfo",
        RequestDescriptor::get("/api/systemInfo"),
    );
    let capability = Signal::derive(move || {
        current_user
            .data
            .get()
            .map(|user| user.capability())
            .unwrap_or_default()
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campusware.css"/>
        <Title text="Campusware"/>
        <Router>
            <AppNavbar current_user=current_user.data system_info=system_info.data/>
            <ToastArea toasts=toasts/>
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/recommendationrequest" view={
                        let backend = backend.clone();
                        let notifier = notifier.clone();
                        move || view! {
                            <RecommendationRequestIndexPage
                                backend=backend.clone()
                                navigator=Navigator::browser()
                                notifier=notifier.clone()
                                capability=capability
                            />
                        }
                    }/>
                    <Route path="/recommendationrequest/create" view={
                        let backend = backend.clone();
                        let notifier = notifier.clone();
                        move || view! {
                            <RecommendationRequestCreatePage
                                backend=backend.clone()
                                navigator=Navigator::browser()
                                notifier=notifier.clone()
                            />
                        }
                    }/>
                    <Route path="/recommendationrequest/edit/:id" view={
                        let backend = backend.clone();
                        let notifier = notifier.clone();
                        move || view! {
                            <RecommendationRequestEditRoute
                                backend=backend.clone()
                                notifier=notifier.clone()
                            />
                        }
                    }/>
                    <Route path="/ucsborganization" view={
                        let backend = backend.clone();
                        let notifier = notifier.clone();
                        move || view! {
                            <UCSBOrganizationIndexPage
                                backend=backend.clone()
                                navigator=Navigator::browser()
                                notifier=notifier.clone()
                                capability=capability
                            />
                        }
                    }/>
                    <Route path="/ucsborganization/create" view={
                        let backend = backend.clone();
                        let notifier = notifier.clone();
                        move || view! {
                            <UCSBOrganizationCreatePage
                                backend=backend.clone()
                                navigator=Navigator::browser()
                                notifier=notifier.clone()
                            />
                        }
                    }/>
                    <Route path="/ucsborganization/edit/:org_code" view={
                        let backend = backend.clone();
                        let notifier = notifier.clone();
                        move || view! {
                            <UCSBOrganizationEditRoute
                                backend=backend.clone()
                                notifier=notifier.clone()
                            />
                        }
                    }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn RecommendationRequestEditRoute(backend: Backend, notifier: Notifier) -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|map| map.get("id").cloned().unwrap_or_default());
    view! {
        <RecommendationRequestEditPage
            backend=backend
            navigator=Navigator::browser()
            notifier=notifier
            id=id
        />
    }
}

#[component]
fn UCSBOrganizationEditRoute(backend: Backend, notifier: Notifier) -> impl IntoView {
    let params = use_params_map();
    let org_code = params.with_untracked(|map| map.get("org_code").cloned().unwrap_or_default());
    view! {
        <UCSBOrganizationEditPage
            backend=backend
            navigator=Navigator::browser()
            notifier=notifier
            org_code=org_code
        />
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="pt-2">
            <h1>"Campus Records"</h1>
            <p>"Manage recommendation requests, organizations, and menu item reviews."</p>
        </div>
    }
}

#[component]
fn AppNavbar(
    current_user: Signal<Option<CurrentUser>>,
    system_info: Signal<Option<SystemInfo>>,
) -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <A class="navbar-brand" href="/">"Campusware"</A>
            <div class="navbar-nav me-auto">
                <A class="nav-link" href="/recommendationrequest">"Recommendation Requests"</A>
                <A class="nav-link" href="/ucsborganization">"UCSB Organizations"</A>
                {move || system_info.get().and_then(|info| {
                    info.show_swagger_ui_link.then(|| view! {
                        <a class="nav-link" href="/swagger-ui/index.html">"Swagger"</a>
                    })
                })}
                {move || system_info.get().and_then(|info| info.source_repo).map(|repo| view! {
                    <a class="nav-link" href=repo>"Source"</a>
                })}
            </div>
            <span class="navbar-text">
                {move || current_user.get().and_then(|user| user.user).map(|info| {
                    format!("Welcome, {}", info.email)
                })}
            </span>
        </nav>
    }
}

#[component]
fn ToastArea(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-area" aria-live="polite">
            {move || toasts.get().into_iter().map(|toast| view! {
                <div class="toast-message" role="status">{toast.message}</div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

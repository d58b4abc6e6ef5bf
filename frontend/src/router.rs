use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAuth, RequireBusiness, RequireStaff},
    pages::{
        activities::ActivitiesPage, admin_activities::AdminActivitiesPage, business::BusinessPage,
        company::CompanyPage, dashboard::DashboardPage, login::LoginPage, profile::ProfilePage,
        register::RegisterPage, AcceptInvitationPage, HomePage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/invitation",
    "/activities",
    "/business",
    "/dashboard",
    "/profile",
    "/company",
    "/admin/activities",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/profile",
    "/company",
    "/admin/activities",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/invitation",
    "/activities",
    "/business",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/invitation" view=AcceptInvitationPage/>
                    <Route path="/activities" view=ActivitiesPage/>
                    <Route path="/business" view=BusinessPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/company" view=ProtectedCompany/>
                    <Route path="/admin/activities" view=ProtectedAdminActivities/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedCompany() -> impl IntoView {
    view! { <RequireAuth><RequireBusiness><CompanyPage/></RequireBusiness></RequireAuth> }
}

#[component]
fn ProtectedAdminActivities() -> impl IntoView {
    view! { <RequireAuth><RequireStaff><AdminActivitiesPage/></RequireStaff></RequireAuth> }
}

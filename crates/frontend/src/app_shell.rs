//! Application shell: the auth gate plus the main two-pane layout.

use crate::dashboards::d400_overview::page::OverviewDashboard;
use crate::dashboards::d401_sales_report::page::SalesReportPage;
use crate::dashboards::d402_financial_report::page::FinancialReportPage;
use crate::domain::a001_category::ui::CategoryList;
use crate::domain::a002_product::ui::ProductList;
use crate::domain::a003_branch::ui::BranchList;
use crate::domain::a004_distributor::ui::DistributorList;
use crate::domain::a005_customer::ui::CustomerList;
use crate::domain::a006_user::ui::UserList;
use crate::domain::a007_role::ui::RoleList;
use crate::layout::header::Header;
use crate::layout::provide_active_section;
use crate::layout::sidebar::Sidebar;
use crate::shared::api::ApiClient;
use crate::system::auth::context::use_auth;
use crate::system::auth::login::LoginPage;
use leptos::prelude::*;

/// Sidebar + header + content pane. Constructed only once a session
/// exists; the API client is built from that session's token and provided
/// to every page via context.
#[component]
fn MainLayout() -> impl IntoView {
    let auth = use_auth();
    let token = auth
        .session
        .with_untracked(|s| s.as_ref().map(|u| u.token.clone()).unwrap_or_default());
    provide_context(ApiClient::from_window(&token));

    let active = provide_active_section();

    view! {
        <div class="app-layout">
            <aside class="app-sidebar">
                <div class="app-sidebar__brand">"POS Back Office"</div>
                <Sidebar />
            </aside>
            <div class="app-main">
                <Header />
                <main class="app-content">
                    {move || match active.0.get() {
                        "a001_category" => view! { <CategoryList /> }.into_any(),
                        "a002_product" => view! { <ProductList /> }.into_any(),
                        "a003_branch" => view! { <BranchList /> }.into_any(),
                        "a004_distributor" => view! { <DistributorList /> }.into_any(),
                        "a005_customer" => view! { <CustomerList /> }.into_any(),
                        "a006_user" => view! { <UserList /> }.into_any(),
                        "a007_role" => view! { <RoleList /> }.into_any(),
                        "d401_sales_report" => view! { <SalesReportPage /> }.into_any(),
                        "d402_financial_report" => view! { <FinancialReportPage /> }.into_any(),
                        _ => view! { <OverviewDashboard /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

/// Auth gate: login page without a session, the layout with one.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.session.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

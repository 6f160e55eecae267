use leptos::prelude::*;

use crate::domain::orders::ui::OrderTablePage;
use crate::domain::overview::OverviewPage;
use crate::domain::vendors::VendorsPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::toast::ToastHost;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use crate::system::users::UsersPage;
use crate::usecases::export_report::ExportReportPage;
use crate::usecases::upload_data::UploadDataPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div style="display: flex; height: 100vh; overflow: hidden; font-family: system-ui, sans-serif;">
            <Sidebar />
            <main style="flex: 1; overflow: auto; background: #fafafa;">
                {move || match ctx.active_page.get() {
                    Page::Overview => view! { <OverviewPage /> }.into_any(),
                    Page::Orders => view! { <OrderTablePage /> }.into_any(),
                    Page::UploadData => view! { <UploadDataPage /> }.into_any(),
                    Page::ExportReport => view! { <ExportReportPage /> }.into_any(),
                    Page::Users => view! { <UsersPage /> }.into_any(),
                    Page::Vendors => view! { <VendorsPage /> }.into_any(),
                }}
            </main>
            <ToastHost />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // App-global state is provided via context; no ambient singletons.
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

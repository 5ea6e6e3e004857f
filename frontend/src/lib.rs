//! Controle de Pátio — painel administrativo (Leptos CSR).
//!
//! Context-driven layout:
//! - `web::route` / `web::router`: route table and History-API engine
//! - `auth`: session state, single owner of the JWT
//! - `api`: REST client bound to the session token
//! - `components`: one module per screen

mod api;
mod auth;
mod components {
    pub mod dashboard;
    mod icons;
    mod layout;
    pub mod login;
    pub mod movimentacoes;
    pub mod pessoas;
    pub mod relatorios;
    pub mod veiculos;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::movimentacoes::MovimentacoesPage;
use crate::components::pessoas::PessoasPage;
use crate::components::relatorios::RelatoriosPage;
use crate::components::veiculos::VeiculosPage;

use leptos::prelude::*;

// Browser-native API wrappers (history routing, confirm/alert).
pub(crate) mod web {
    mod dialog;
    pub mod route;
    pub mod router;

    pub use dialog::{alerta, confirmar};
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Maps the current route to its page component.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Movimentacoes => view! { <MovimentacoesPage /> }.into_any(),
        AppRoute::Relatorios => view! { <RelatoriosPage /> }.into_any(),
        AppRoute::Pessoas => view! { <PessoasPage /> }.into_any(),
        AppRoute::Veiculos => view! { <VeiculosPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página não encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // Restore a persisted session before the first render decides a route.
    init_auth(&auth_ctx);

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}

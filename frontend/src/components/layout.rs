//! Application shell: sidebar navigation plus page header, wrapped around
//! every authenticated screen.

use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::icons::{CarFront, FileText, LayoutDashboard, LogOut, User};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// One sidebar entry; highlighted while its route is active.
#[component]
fn SidebarItem(rotulo: &'static str, rota: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();
    let ativo = move || router.current_route().get() == rota;

    view! {
        <li>
            <a
                class=move || {
                    if ativo() {
                        "active font-medium"
                    } else {
                        ""
                    }
                }
                on:click=move |_| router.navigate(rota.to_path())
            >
                {children()}
                <span class="text-xs font-medium">{rotulo}</span>
            </a>
        </li>
    }
}

#[component]
pub fn DashboardLayout(
    page_title: &'static str,
    page_subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_auth();

    // O roteador observa o sinal de autenticação e cuida do redirect.
    let on_logout = move |_| logout(&ctx);

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-72 bg-base-100 border-r border-base-300 flex flex-col">
                <div class="px-6 py-5 border-b border-base-300 flex items-center gap-3">
                    <div class="h-10 w-10 rounded bg-success flex items-center justify-center text-success-content font-bold text-xl">
                        "T"
                    </div>
                    <div class="leading-tight">
                        <div class="font-semibold text-sm tracking-wide">
                            "Calcário " <span class="font-bold">"Terra Branca"</span>
                        </div>
                        <div class="text-xs opacity-60">"Portaria · Controle de Acesso"</div>
                    </div>
                </div>

                <nav class="flex-1 px-4 py-5 space-y-6 text-sm">
                    <div>
                        <div class="text-[11px] font-semibold opacity-60 uppercase tracking-widest mb-2">
                            "Menu Principal"
                        </div>
                        <ul class="menu menu-sm p-0 w-full space-y-1">
                            <SidebarItem rotulo="Dashboard" rota=AppRoute::Dashboard>
                                <LayoutDashboard attr:class="h-4 w-4" />
                            </SidebarItem>
                            <SidebarItem rotulo="Movimentações" rota=AppRoute::Movimentacoes>
                                <CarFront attr:class="h-4 w-4" />
                            </SidebarItem>
                            <SidebarItem rotulo="Relatórios" rota=AppRoute::Relatorios>
                                <FileText attr:class="h-4 w-4" />
                            </SidebarItem>
                        </ul>
                    </div>
                    <div>
                        <div class="text-[11px] font-semibold opacity-60 uppercase tracking-widest mb-2">
                            "Cadastros"
                        </div>
                        <ul class="menu menu-sm p-0 w-full space-y-1">
                            <SidebarItem rotulo="Pessoas" rota=AppRoute::Pessoas>
                                <User attr:class="h-4 w-4" />
                            </SidebarItem>
                            <SidebarItem rotulo="Veículos" rota=AppRoute::Veiculos>
                                <CarFront attr:class="h-4 w-4" />
                            </SidebarItem>
                        </ul>
                    </div>
                </nav>

                <div class="border-t border-base-300 px-4 py-3 flex items-center justify-between gap-3">
                    <div class="flex items-center gap-3">
                        <div class="h-9 w-9 rounded-full bg-neutral text-neutral-content flex items-center justify-center text-xs font-semibold">
                            "P"
                        </div>
                        <div class="leading-tight">
                            <div class="text-xs font-semibold">"Operador de Portaria"</div>
                            <div class="text-[11px] opacity-60">"Porteiro"</div>
                        </div>
                    </div>
                    <button on:click=on_logout class="btn btn-ghost btn-square btn-sm" title="Sair">
                        <LogOut attr:class="h-4 w-4" />
                    </button>
                </div>
            </aside>

            <main class="flex-1 px-10 py-8 overflow-y-auto">
                <header class="mb-8">
                    <h1 class="text-2xl font-semibold">{page_title}</h1>
                    <p class="text-sm opacity-60 mt-1">{page_subtitle}</p>
                </header>
                {children()}
            </main>
        </div>
    }
}

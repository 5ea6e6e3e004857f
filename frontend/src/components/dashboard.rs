use leptos::prelude::*;
use leptos::task::spawn_local;

use patio_shared::DashboardResumo;
use patio_shared::date::formatar_data_hora;

use crate::auth::{map_api_error, use_auth};
use crate::components::icons::{CarFront, Clock, RefreshCw};
use crate::components::layout::DashboardLayout;

/// Metric tile fed by the aggregated endpoint.
#[component]
fn MetricCard(titulo: &'static str, #[prop(into)] valor: Signal<u64>) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center px-5 py-4 rounded-xl border border-base-300 bg-base-100 shadow-sm">
            <div>
                <p class="text-xs opacity-60 mb-1">{titulo}</p>
                <p class="text-3xl font-semibold">{move || valor.get()}</p>
            </div>
            <div class="h-10 w-10 rounded-lg bg-base-200 flex items-center justify-center">
                <CarFront attr:class="h-5 w-5" />
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_auth();

    let (resumo, set_resumo) = signal(DashboardResumo::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let state = ctx.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                match api.get_dashboard().await {
                    Ok(data) => set_resumo.set(data),
                    Err(err) => set_error.set(Some(map_api_error(&ctx, err))),
                }
                set_loading.set(false);
            });
        }
    };

    // Carga inicial quando a sessão está pronta.
    Effect::new(move |_| {
        let state = ctx.state.get();
        if state.is_authenticated && !state.is_loading {
            load();
        }
    });

    let no_patio = Signal::derive(move || resumo.get().veiculos_no_patio);
    let entradas_hoje = Signal::derive(move || resumo.get().entradas_hoje);
    let saidas_hoje = Signal::derive(move || resumo.get().saidas_hoje);
    let recentes_vazio = move || resumo.with(|r| r.recentes.is_empty());

    view! {
        <DashboardLayout
            page_title="Dashboard de Controle de Pátio"
            page_subtitle="Visão geral do pátio e movimentações recentes."
        >
            <div class="space-y-6">
                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <MetricCard titulo="Veículos no Pátio" valor=no_patio />
                    <MetricCard titulo="Entradas Hoje" valor=entradas_hoje />
                    <MetricCard titulo="Saídas Hoje" valor=saidas_hoje />
                </div>

                <section class="bg-base-100 border border-base-300 rounded-xl shadow-sm">
                    <div class="flex items-center justify-between px-6 py-4 border-b border-base-300">
                        <div>
                            <h2 class="text-sm font-semibold">"Movimentação Recente"</h2>
                            <p class="text-xs opacity-60">"Últimas movimentações registradas"</p>
                        </div>
                        <button
                            on:click=move |_| load()
                            disabled=move || loading.get()
                            class="btn btn-ghost btn-square btn-sm"
                            title="Atualizar"
                        >
                            <RefreshCw attr:class=move || {
                                if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                            } />
                        </button>
                    </div>

                    <Show
                        when=move || !recentes_vazio() || loading.get()
                        fallback=|| view! {
                            <div class="flex flex-col items-center justify-center py-16 opacity-50 text-xs">
                                <div class="h-10 w-10 rounded-full border border-dashed border-base-300 flex items-center justify-center mb-3">
                                    <Clock attr:class="h-5 w-5" />
                                </div>
                                <p class="text-[11px] tracking-wide">"Nenhuma movimentação registrada"</p>
                            </div>
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="table table-zebra w-full text-xs">
                                <thead>
                                    <tr class="uppercase tracking-wide">
                                        <th>"Evento"</th>
                                        <th>"Placa"</th>
                                        <th>"Pessoa"</th>
                                        <th>"Posto"</th>
                                        <th>"Data/Hora"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || resumo.get().recentes
                                        key=|mov| mov.id
                                        children=move |mov| {
                                            let badge = if mov.status == "saiu" {
                                                "badge badge-error badge-outline"
                                            } else {
                                                "badge badge-success badge-outline"
                                            };
                                            view! {
                                                <tr>
                                                    <td>
                                                        <span class=badge>{mov.tipo_evento.clone()}</span>
                                                    </td>
                                                    <td class="font-mono">{mov.placa.clone()}</td>
                                                    <td>{mov.pessoa.clone()}</td>
                                                    <td>{mov.posto_controle.clone()}</td>
                                                    <td>{formatar_data_hora(&mov.data_evento)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>

                    <Show when=move || loading.get()>
                        <div class="flex items-center justify-center py-4 text-sm opacity-60">
                            <span class="loading loading-spinner loading-sm"></span>
                            " Atualizando..."
                        </div>
                    </Show>
                </section>
            </div>
        </DashboardLayout>
    }
}

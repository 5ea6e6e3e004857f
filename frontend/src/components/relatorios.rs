use leptos::prelude::*;
use leptos::task::spawn_local;

use patio_shared::date::{formatar_data_hora, formatar_data_hora_opt, hoje_iso};
use patio_shared::{Movimentacao, ResumoRelatorio};

use crate::auth::{map_api_error, use_auth};
use crate::components::icons::{Calendar, FileText, RefreshCw, Search, Truck, User};
use crate::components::layout::DashboardLayout;

/// Summary tile above the history table.
#[component]
fn ResumoCard(
    titulo: &'static str,
    #[prop(into)] valor: Signal<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 bg-base-100 border border-base-300 rounded-lg">
            <div>
                <p class="text-xs opacity-60">{titulo}</p>
                <p class="text-xl font-semibold">{move || valor.get()}</p>
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn RelatoriosPage() -> impl IntoView {
    let ctx = use_auth();

    let (data_inicio, set_data_inicio) = signal(hoje_iso());
    let (data_fim, set_data_fim) = signal(hoje_iso());
    let (movimentacoes, set_movimentacoes) = signal(Vec::<Movimentacao>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (termo, set_termo) = signal(String::new());

    let load = move || {
        let state = ctx.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            let inicio = data_inicio.get_untracked();
            let fim = data_fim.get_untracked();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                match api.get_relatorio(&inicio, &fim).await {
                    Ok(data) => set_movimentacoes.set(data),
                    Err(err) => set_error.set(Some(map_api_error(&ctx, err))),
                }
                set_loading.set(false);
            });
        }
    };

    // Busca inicial para o dia corrente.
    Effect::new(move |_| {
        let state = ctx.state.get();
        if state.is_authenticated && !state.is_loading {
            load();
        }
    });

    let filtradas = Signal::derive(move || {
        let termo = termo.get();
        let termo = termo.trim().to_string();
        let movs = movimentacoes.get();
        if termo.is_empty() {
            movs
        } else {
            movs.into_iter().filter(|m| m.corresponde(&termo)).collect()
        }
    });
    let resumo = Signal::derive(move || filtradas.with(|m| ResumoRelatorio::calcular(m)));

    let total = Signal::derive(move || resumo.get().total);
    let veiculos_distintos = Signal::derive(move || resumo.get().veiculos_distintos);
    let em_patio = Signal::derive(move || resumo.get().em_patio);
    let finalizadas = Signal::derive(move || resumo.get().finalizadas);

    view! {
        <DashboardLayout
            page_title="Relatório de Histórico"
            page_subtitle="Consulte, filtre e analise todas as movimentações registradas."
        >
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body space-y-6">
                    <div class="space-y-4">
                        <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4">
                            <div class="flex gap-4 flex-wrap">
                                <div class="form-control">
                                    <label for="data_inicio" class="label py-0">
                                        <span class="label-text-alt opacity-60">"Data Início"</span>
                                    </label>
                                    <div class="flex items-center gap-2">
                                        <Calendar attr:class="h-4 w-4 opacity-40" />
                                        <input
                                            type="date"
                                            id="data_inicio"
                                            prop:value=data_inicio
                                            on:input=move |ev| set_data_inicio.set(event_target_value(&ev))
                                            class="input input-bordered input-sm"
                                        />
                                    </div>
                                </div>

                                <div class="form-control">
                                    <label for="data_fim" class="label py-0">
                                        <span class="label-text-alt opacity-60">"Data Fim"</span>
                                    </label>
                                    <div class="flex items-center gap-2">
                                        <Calendar attr:class="h-4 w-4 opacity-40" />
                                        <input
                                            type="date"
                                            id="data_fim"
                                            prop:value=data_fim
                                            on:input=move |ev| set_data_fim.set(event_target_value(&ev))
                                            class="input input-bordered input-sm"
                                        />
                                    </div>
                                </div>
                            </div>

                            <button
                                on:click=move |_| load()
                                disabled=move || loading.get()
                                class="btn btn-primary btn-sm gap-2"
                                title="Atualizar relatório"
                            >
                                <RefreshCw attr:class=move || {
                                    if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                                } />
                                {move || if loading.get() { "Buscando..." } else { "Aplicar Filtro" }}
                            </button>
                        </div>

                        // Filtro local sobre o período já carregado.
                        <div class="relative w-full max-w-md">
                            <Search attr:class="absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 opacity-40" />
                            <input
                                type="text"
                                placeholder="Filtrar por placa, nome ou documento..."
                                prop:value=termo
                                on:input=move |ev| set_termo.set(event_target_value(&ev))
                                class="input input-bordered input-sm w-full pl-10"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        <ResumoCard titulo="Total de registros" valor=total>
                            <FileText attr:class="h-8 w-8 text-primary" />
                        </ResumoCard>
                        <ResumoCard titulo="Veículos distintos" valor=veiculos_distintos>
                            <Truck attr:class="h-8 w-8 text-success" />
                        </ResumoCard>
                        <ResumoCard titulo="Em pátio" valor=em_patio>
                            <User attr:class="h-8 w-8 text-warning" />
                        </ResumoCard>
                        <ResumoCard titulo="Finalizadas" valor=finalizadas>
                            <Calendar attr:class="h-8 w-8 text-success" />
                        </ResumoCard>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full text-sm">
                            <thead>
                                <tr>
                                    <th>"Status"</th>
                                    <th>"Placa / Veículo"</th>
                                    <th>"Pessoa / Tipo"</th>
                                    <th>"Entrada (Data/KM)"</th>
                                    <th>"Saída (Data/KM)"</th>
                                    <th>"Motivo/Setor"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && movimentacoes.with(|m| m.is_empty())>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 opacity-50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Carregando dados..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || filtradas.with(|m| m.is_empty()) && !loading.get()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 opacity-50">
                                            "Nenhuma movimentação encontrada para o período e filtros."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || filtradas.get()
                                    key=|m| m.id
                                    children=move |mov| {
                                        let badge = if mov.aberta() {
                                            "badge badge-warning badge-outline"
                                        } else {
                                            "badge badge-success badge-outline"
                                        };
                                        let status = if mov.aberta() { "No Pátio" } else { "Finalizada" };
                                        let placa = mov
                                            .veiculo
                                            .as_ref()
                                            .map(|v| v.placa.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        let modelo = mov
                                            .veiculo
                                            .as_ref()
                                            .map(|v| v.modelo.clone())
                                            .unwrap_or_default();
                                        let pessoa = mov
                                            .pessoa
                                            .as_ref()
                                            .map(|p| p.nome.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        let pessoa_detalhe = mov
                                            .pessoa
                                            .as_ref()
                                            .map(|p| format!("{} - Doc: {}", p.tipo.label(), p.documento))
                                            .unwrap_or_default();
                                        let entrada = formatar_data_hora(&mov.data_entrada);
                                        let entrada_detalhe = format!(
                                            "KM: {} - Posto: {}",
                                            mov.km_entrada.as_deref().unwrap_or("-"),
                                            mov.posto_controle.as_deref().unwrap_or("-"),
                                        );
                                        let saida = formatar_data_hora_opt(mov.data_saida.as_deref());
                                        let saida_detalhe = {
                                            let mut detalhe =
                                                format!("KM: {}", mov.km_saida.as_deref().unwrap_or("-"));
                                            if let Some(obs) = mov.observacao.as_deref() {
                                                let resumo: String = obs.chars().take(20).collect();
                                                detalhe.push_str(&format!(" - Obs: {resumo}..."));
                                            }
                                            detalhe
                                        };
                                        let setor = mov
                                            .setor_visitado
                                            .as_ref()
                                            .map(|s| s.nome.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        let motivo = mov.motivo_da_visita.clone().unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td>
                                                    <span class=badge>{status}</span>
                                                </td>
                                                <td>
                                                    <div class="font-medium font-mono">{placa}</div>
                                                    <div class="opacity-60 text-xs">{modelo}</div>
                                                </td>
                                                <td>
                                                    <div class="font-medium">{pessoa}</div>
                                                    <div class="opacity-60 text-xs">{pessoa_detalhe}</div>
                                                </td>
                                                <td>
                                                    <div class="font-medium">{entrada}</div>
                                                    <div class="opacity-60 text-xs">{entrada_detalhe}</div>
                                                </td>
                                                <td>
                                                    <div class="font-medium">{saida}</div>
                                                    <div class="opacity-60 text-xs">{saida_detalhe}</div>
                                                </td>
                                                <td class="max-w-xs">
                                                    <div class="font-medium">{setor}</div>
                                                    <div class="opacity-60 text-xs">{motivo}</div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </DashboardLayout>
    }
}

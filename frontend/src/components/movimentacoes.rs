//! Core workflow screen: a plate search that branches into the entry or
//! exit sub-flow, or a terminal "not registered" panel.

mod entrada;
mod saida;
mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use patio_shared::StatusPlaca;

use crate::auth::{map_api_error, use_auth};
use crate::components::icons::{AlertTriangle, Search, Truck};
use crate::components::layout::DashboardLayout;

use self::entrada::EntradaForm;
use self::saida::SaidaForm;
use self::state::FluxoState;

#[component]
pub fn MovimentacoesPage() -> impl IntoView {
    let ctx = use_auth();
    let form = FluxoState::new();

    let handle_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Toda busca parte do zero: nada da tentativa anterior sobrevive.
        form.limpar_busca();
        form.loading.set(true);

        let placa = form.placa.get();
        let state = ctx.state.get();
        let Some(api) = state.api.clone() else {
            form.loading.set(false);
            return;
        };
        spawn_local(async move {
            match api.get_status_placa(&placa).await {
                Ok(resp) => form.status.set(Some(resp.classificar())),
                // Falha na consulta deixa a tela no estado pré-busca.
                Err(err) => form.error.set(Some(map_api_error(&ctx, err))),
            }
            form.loading.set(false);
        });
    };

    // O toast de sucesso some sozinho.
    Effect::new(move |_| {
        if form.aviso.get().is_some() {
            gloo_timers::callback::Timeout::new(3_000, move || form.aviso.set(None)).forget();
        }
    });

    let busca_desabilitada =
        move || form.loading.get() || form.placa.get().chars().count() < 7;

    view! {
        <DashboardLayout
            page_title="Controle de Movimentação"
            page_subtitle="Registre entrada e saída de veículos do pátio."
        >
            <Show when=move || form.aviso.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class="alert alert-success shadow-lg">
                        <span>{move || form.aviso.get().unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body">
                    // 1. Busca principal
                    <form
                        on:submit=handle_search
                        class="flex gap-4 items-end border-b border-base-300 pb-6 mb-6"
                    >
                        <div class="form-control flex-grow max-w-sm">
                            <label class="label" for="placa">
                                <span class="label-text">"Buscar Placa"</span>
                            </label>
                            <div class="relative">
                                <Truck attr:class="absolute left-3 top-1/2 -translate-y-1/2 h-5 w-5 opacity-40" />
                                <input
                                    id="placa"
                                    type="text"
                                    placeholder="Ex: ABC1234"
                                    class="input input-bordered w-full pl-10 text-lg font-bold uppercase"
                                    prop:value=form.placa
                                    on:input=move |ev| {
                                        form.placa.set(event_target_value(&ev).to_uppercase())
                                    }
                                    required
                                />
                            </div>
                        </div>
                        <button type="submit" class="btn btn-primary gap-2" disabled=busca_desabilitada>
                            <Search attr:class="h-5 w-5" />
                            {move || if form.loading.get() { "Buscando..." } else { "Consultar Placa" }}
                        </button>
                    </form>

                    <Show when=move || form.error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-4">
                            <AlertTriangle attr:class="h-5 w-5" />
                            <span>{move || form.error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    // 2. Fluxo derivado da classificação da placa
                    {move || match form.status.get() {
                        Some(StatusPlaca::Fora(veiculo)) => view! {
                            <div class="mt-4 p-6 border-2 border-dashed border-base-300 rounded-xl bg-base-200">
                                <EntradaForm form=form veiculo=veiculo />
                            </div>
                        }
                        .into_any(),
                        Some(StatusPlaca::NoPatio(movimentacao)) => view! {
                            <div class="mt-4 p-6 border-2 border-dashed border-base-300 rounded-xl bg-base-200">
                                <SaidaForm form=form movimentacao=movimentacao />
                            </div>
                        }
                        .into_any(),
                        Some(StatusPlaca::NaoEncontrada) => view! {
                            <div class="mt-4 p-6 border-2 border-dashed border-base-300 rounded-xl bg-base-200">
                                <div class="text-center py-10">
                                    <h3 class="text-xl font-semibold text-error mb-2">
                                        "Placa Não Encontrada"
                                    </h3>
                                    <p>
                                        "O veículo com a placa "
                                        <strong>{move || form.placa.get()}</strong>
                                        " não está cadastrado."
                                    </p>
                                    <p class="text-sm opacity-60 mt-2">
                                        "Por favor, cadastre o veículo antes de registrar a movimentação."
                                    </p>
                                </div>
                            </div>
                        }
                        .into_any(),
                        None => view! { <></> }.into_any(),
                    }}
                </div>
            </div>
        </DashboardLayout>
    }
}

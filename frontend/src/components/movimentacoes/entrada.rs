//! Entry (check-in) sub-flow: resolved vehicle, on-demand person lookup,
//! odometer/reason/sector, control post from the shared mapping.

use leptos::prelude::*;
use leptos::task::spawn_local;

use patio_shared::Veiculo;
use patio_shared::config::{PostoControle, SETORES};

use super::state::FluxoState;
use crate::auth::{map_api_error, use_auth};
use crate::components::icons::{ArrowRightCircle, LogIn, Search};

#[component]
pub fn EntradaForm(form: FluxoState, veiculo: Veiculo) -> impl IntoView {
    let ctx = use_auth();

    let veiculo_rotulo = format!("{} - {}", veiculo.placa, veiculo.modelo);

    // Busca secundária, disparada pelo operador, nunca automática.
    let handle_pessoa_search = move |_| {
        form.error.set(None);
        form.pessoa.set(None);
        let documento = form.pessoa_doc.get();
        if documento.trim().is_empty() {
            return;
        }
        let state = ctx.state.get();
        let Some(api) = state.api.clone() else {
            return;
        };
        spawn_local(async move {
            match api.get_pessoa_por_documento(documento.trim()).await {
                Ok(pessoa) => form.pessoa.set(Some(pessoa)),
                Err(err) => {
                    form.error.set(Some(map_api_error(&ctx, err)));
                    form.pessoa.set(None);
                }
            }
        });
    };

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.error.set(None);

        let req = match form.para_entrada() {
            Ok(req) => req,
            Err(msg) => {
                form.error.set(Some(msg));
                return;
            }
        };

        let state = ctx.state.get();
        let Some(api) = state.api.clone() else {
            return;
        };
        spawn_local(async move {
            match api.registrar_entrada(&req).await {
                Ok(()) => {
                    form.aviso
                        .set(Some("Entrada registrada com sucesso!".to_string()));
                    form.limpar_tudo();
                }
                // Mantém tudo preenchido para corrigir e reenviar.
                Err(err) => form.error.set(Some(map_api_error(&ctx, err))),
            }
        });
    };

    let pronto = move || form.entrada_pronta();

    view! {
        <div class="space-y-6">
            <h3 class="text-2xl font-bold text-success flex items-center gap-2 border-b border-base-300 pb-2">
                <LogIn attr:class="h-6 w-6" />
                "Registro de ENTRADA"
            </h3>

            <div class="p-4 bg-success/10 rounded-lg border border-success/30">
                <p class="text-sm font-semibold text-success">"Veículo Cadastrado:"</p>
                <p class="text-lg font-bold mt-1">{veiculo_rotulo}</p>
            </div>

            <div class="border border-base-300 p-4 rounded-lg">
                <label for="pessoa_doc" class="label">
                    <span class="label-text">"Documento da Pessoa (Motorista/Visitante)"</span>
                </label>
                <div class="flex gap-3">
                    <input
                        id="pessoa_doc"
                        type="text"
                        placeholder="CPF/RG"
                        prop:value=form.pessoa_doc
                        on:input=move |ev| form.pessoa_doc.set(event_target_value(&ev))
                        class="input input-bordered input-sm flex-grow"
                        required
                    />
                    <button
                        type="button"
                        on:click=handle_pessoa_search
                        class="btn btn-secondary btn-sm gap-2"
                    >
                        <Search attr:class="h-4 w-4" />
                        "Buscar Pessoa"
                    </button>
                </div>

                <Show when=move || form.pessoa.get().is_some()>
                    <div class="mt-3 p-3 bg-info/10 rounded-lg">
                        <p class="text-sm font-semibold text-info">"Pessoa Encontrada:"</p>
                        <p class="text-md font-bold">
                            {move || form.pessoa.get().map(|p| p.nome).unwrap_or_default()}
                        </p>
                        <p class="text-xs opacity-70">
                            {move || {
                                form.pessoa
                                    .get()
                                    .map(|p| format!("{} - Doc: {}", p.tipo.label(), p.documento))
                                    .unwrap_or_default()
                            }}
                        </p>
                    </div>
                </Show>
                <Show when=move || {
                    form.pessoa.get().is_none() && !form.pessoa_doc.get().is_empty()
                }>
                    <p class="mt-3 text-sm text-error">
                        "Pessoa não encontrada. Por favor, cadastre em "
                        <strong>"Cadastros > Pessoas"</strong>
                        "."
                    </p>
                </Show>
            </div>

            <form on:submit=handle_submit class="space-y-6">
                <div class="form-control">
                    <label for="km_entrada" class="label">
                        <span class="label-text">"KM de Entrada"</span>
                    </label>
                    <input
                        id="km_entrada"
                        type="number"
                        min="0"
                        step="0.1"
                        placeholder="Informe o KM atual do veículo"
                        prop:value=form.km_entrada
                        on:input=move |ev| form.km_entrada.set(event_target_value(&ev))
                        class="input input-bordered w-full"
                        required
                    />
                </div>

                <div class="form-control">
                    <label for="motivo_visita" class="label">
                        <span class="label-text">"Motivo da Visita"</span>
                    </label>
                    <input
                        id="motivo_visita"
                        type="text"
                        placeholder="Ex: Entrega de carga, visita ao escritório..."
                        prop:value=form.motivo_visita
                        on:input=move |ev| form.motivo_visita.set(event_target_value(&ev))
                        class="input input-bordered w-full"
                        required
                    />
                </div>

                <div class="form-control">
                    <label for="setor_visitado" class="label">
                        <span class="label-text">"Setor Visitado"</span>
                    </label>
                    <select
                        id="setor_visitado"
                        class="select select-bordered w-full"
                        on:change=move |ev| form.setor_id.set(event_target_value(&ev))
                        required
                    >
                        <option value="" selected=move || form.setor_id.get().is_empty()>
                            "Selecione um setor"
                        </option>
                        {SETORES
                            .iter()
                            .map(|(id, nome)| {
                                let id = *id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || form.setor_id.get() == id.to_string()
                                    >
                                        {*nome}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-control">
                    <label for="posto_controle" class="label">
                        <span class="label-text">"Posto de Controle"</span>
                    </label>
                    <select
                        id="posto_controle"
                        class="select select-bordered w-full"
                        on:change=move |ev| form.posto.set(event_target_value(&ev))
                        required
                    >
                        {PostoControle::TODOS
                            .iter()
                            .map(|posto| {
                                let posto = *posto;
                                view! {
                                    <option
                                        value=posto.as_valor()
                                        selected=move || form.posto.get() == posto.as_valor()
                                    >
                                        {posto.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <Show when=move || form.error.get().is_some()>
                    <div class="p-3 text-sm rounded-lg bg-error/10 text-error">
                        {move || form.error.get().unwrap_or_default()}
                    </div>
                </Show>

                <button
                    type="submit"
                    disabled=move || !pronto()
                    class="btn btn-success btn-block btn-lg gap-3"
                >
                    <ArrowRightCircle attr:class="h-6 w-6" />
                    "CONFIRMAR ENTRADA"
                </button>
            </form>
        </div>
    }
}

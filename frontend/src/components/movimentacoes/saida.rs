//! Exit (check-out) sub-flow: shows the open movement and collects the
//! exit odometer plus an optional note.

use leptos::prelude::*;
use leptos::task::spawn_local;

use patio_shared::Movimentacao;
use patio_shared::date::formatar_data_hora;

use super::state::FluxoState;
use crate::auth::{map_api_error, use_auth};
use crate::components::icons::{ArrowLeftCircle, LogOut};

#[component]
fn InfoBox(titulo: &'static str, valor: String) -> impl IntoView {
    view! {
        <div class="p-3 bg-base-100 rounded-lg">
            <p class="text-xs font-medium opacity-60">{titulo}</p>
            <p class="text-sm font-bold mt-1">{valor}</p>
        </div>
    }
}

#[component]
pub fn SaidaForm(form: FluxoState, movimentacao: Movimentacao) -> impl IntoView {
    let ctx = use_auth();

    let veiculo_rotulo = movimentacao
        .veiculo
        .as_ref()
        .map(|v| format!("{} - {}", v.placa, v.modelo))
        .unwrap_or_else(|| "-".to_string());
    let pessoa_rotulo = movimentacao
        .pessoa
        .as_ref()
        .map(|p| format!("{} ({})", p.nome, p.tipo.label()))
        .unwrap_or_else(|| "-".to_string());
    let entrada_em = formatar_data_hora(&movimentacao.data_entrada);
    let posto_entrada = movimentacao
        .posto_controle
        .clone()
        .unwrap_or_else(|| "-".to_string());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.error.set(None);

        let (id, req) = match form.para_saida() {
            Ok(par) => par,
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
            match api.registrar_saida(id, &req).await {
                Ok(()) => {
                    form.aviso
                        .set(Some("Saída registrada com sucesso!".to_string()));
                    form.limpar_tudo();
                }
                // Mantém os valores digitados e mostra o erro do servidor.
                Err(err) => form.error.set(Some(map_api_error(&ctx, err))),
            }
        });
    };

    let km_vazio = move || form.km_saida.get().trim().is_empty();

    view! {
        <div class="space-y-6">
            <h3 class="text-2xl font-bold text-error flex items-center gap-2 border-b border-base-300 pb-2">
                <LogOut attr:class="h-6 w-6" />
                "Registro de SAÍDA"
            </h3>

            <div class="grid grid-cols-2 gap-4">
                <InfoBox titulo="Veículo" valor=veiculo_rotulo />
                <InfoBox titulo="Pessoa" valor=pessoa_rotulo />
                <InfoBox titulo="Entrada em" valor=entrada_em />
                <InfoBox titulo="Posto de Entrada" valor=posto_entrada />
            </div>

            <form on:submit=handle_submit class="space-y-6">
                <div class="form-control">
                    <label for="km_saida" class="label">
                        <span class="label-text">"KM de Saída"</span>
                    </label>
                    <input
                        id="km_saida"
                        type="number"
                        min="0"
                        step="0.1"
                        placeholder="Informe o KM atual do veículo"
                        prop:value=form.km_saida
                        on:input=move |ev| form.km_saida.set(event_target_value(&ev))
                        class="input input-bordered w-full"
                        required
                    />
                </div>

                <div class="form-control">
                    <label for="observacao_saida" class="label">
                        <span class="label-text">"Observações (opcional)"</span>
                    </label>
                    <textarea
                        id="observacao_saida"
                        rows="3"
                        placeholder="Ex: veículo saiu com lacre conferido..."
                        prop:value=form.observacao
                        on:input=move |ev| form.observacao.set(event_target_value(&ev))
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>

                <Show when=move || form.error.get().is_some()>
                    <div class="p-3 text-sm rounded-lg bg-error/10 text-error">
                        {move || form.error.get().unwrap_or_default()}
                    </div>
                </Show>

                <button type="submit" disabled=km_vazio class="btn btn-error btn-block btn-lg gap-3">
                    <ArrowLeftCircle attr:class="h-6 w-6" />
                    "CONFIRMAR SAÍDA"
                </button>
            </form>
        </div>
    }
}

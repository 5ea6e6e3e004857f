use leptos::prelude::*;
use leptos::task::spawn_local;

use patio_shared::{Veiculo, VeiculoPayload, validar_placa};

use crate::auth::{map_api_error, use_auth};
use crate::components::icons::{Pencil, PlusCircle, RefreshCw, Search, Trash2};
use crate::components::layout::DashboardLayout;
use crate::web::{alerta, confirmar};

#[component]
pub fn VeiculosPage() -> impl IntoView {
    let ctx = use_auth();

    let (veiculos, set_veiculos) = signal(Vec::<Veiculo>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (termo, set_termo) = signal(String::new());

    // Modal de criação/edição.
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (modal_aberto, set_modal_aberto) = signal(false);
    let (editando, set_editando) = signal(Option::<Veiculo>::None);
    let (form_placa, set_form_placa) = signal(String::new());
    let (form_modelo, set_form_modelo) = signal(String::new());
    let (form_cor, set_form_cor) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (salvando, set_salvando) = signal(false);

    let load = move || {
        let state = ctx.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                match api.get_veiculos().await {
                    Ok(data) => set_veiculos.set(data),
                    Err(err) => set_error.set(Some(map_api_error(&ctx, err))),
                }
                set_loading.set(false);
            });
        }
    };

    Effect::new(move |_| {
        let state = ctx.state.get();
        if state.is_authenticated && !state.is_loading {
            load();
        }
    });

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if modal_aberto.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let abrir_modal = move |veiculo: Option<Veiculo>| {
        set_form_error.set(None);
        match veiculo {
            Some(v) => {
                set_form_placa.set(v.placa.clone());
                set_form_modelo.set(v.modelo.clone());
                set_form_cor.set(v.cor.clone());
                set_editando.set(Some(v));
            }
            None => {
                set_form_placa.set(String::new());
                set_form_modelo.set(String::new());
                set_form_cor.set(String::new());
                set_editando.set(None);
            }
        }
        set_modal_aberto.set(true);
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);

        // Validação local da placa antes de qualquer chamada de rede.
        let placa = form_placa.get_untracked();
        if let Err(msg) = validar_placa(&placa) {
            set_form_error.set(Some(msg));
            return;
        }

        let state = ctx.state.get_untracked();
        let Some(api) = state.api.clone() else {
            return;
        };

        let payload = VeiculoPayload {
            placa,
            modelo: form_modelo.get_untracked(),
            cor: form_cor.get_untracked(),
        };
        let editando_id = editando.get_untracked().map(|v| v.id);

        set_salvando.set(true);
        spawn_local(async move {
            let resultado = match editando_id {
                Some(id) => api.atualizar_veiculo(id, &payload).await,
                None => api.criar_veiculo(&payload).await,
            };
            match resultado {
                Ok(()) => {
                    set_modal_aberto.set(false);
                    set_editando.set(None);
                    load();
                }
                Err(err) => set_form_error.set(Some(map_api_error(&ctx, err))),
            }
            set_salvando.set(false);
        });
    };

    let on_delete = move |veiculo: Veiculo| {
        if !confirmar(
            "Tem certeza que deseja excluir este veículo? Se ele estiver no pátio, a exclusão será bloqueada.",
        ) {
            return;
        }
        let state = ctx.state.get_untracked();
        let Some(api) = state.api.clone() else {
            return;
        };
        spawn_local(async move {
            match api.excluir_veiculo(veiculo.id).await {
                Ok(()) => load(),
                // A lista permanece intacta; a falha bloqueia com alert.
                Err(err) => alerta(&map_api_error(&ctx, err)),
            }
        });
    };

    let filtrados = move || {
        let termo = termo.get();
        veiculos
            .get()
            .into_iter()
            .filter(|v| v.corresponde(termo.trim()))
            .collect::<Vec<_>>()
    };
    let lista_vazia = move || filtrados().is_empty();
    let em_edicao = move || editando.get().is_some();

    view! {
        <DashboardLayout
            page_title="Cadastro de Veículos"
            page_subtitle="Gerencie veículos registrados para acesso."
        >
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body">
                    <div class="flex justify-between items-center mb-6">
                        <div class="relative w-full max-w-sm">
                            <Search attr:class="absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 opacity-40" />
                            <input
                                type="text"
                                placeholder="Buscar por placa ou modelo..."
                                prop:value=termo
                                on:input=move |ev| set_termo.set(event_target_value(&ev))
                                class="input input-bordered input-sm w-full pl-10"
                            />
                        </div>
                        <div class="flex gap-3">
                            <button
                                on:click=move |_| load()
                                disabled=move || loading.get()
                                class="btn btn-ghost btn-square btn-sm"
                                title="Atualizar lista"
                            >
                                <RefreshCw attr:class=move || {
                                    if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                                } />
                            </button>
                            <button on:click=move |_| abrir_modal(None) class="btn btn-primary btn-sm gap-2">
                                <PlusCircle attr:class="h-4 w-4" />
                                "Novo Veículo"
                            </button>
                        </div>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-4">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full text-sm">
                            <thead>
                                <tr>
                                    <th>"Placa"</th>
                                    <th>"Modelo"</th>
                                    <th>"Cor"</th>
                                    <th class="text-right">"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && veiculos.with(|v| v.is_empty())>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 opacity-50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Carregando dados..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || lista_vazia() && !loading.get()>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 opacity-50">
                                            "Nenhum veículo encontrado."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=filtrados
                                    key=|v| v.id
                                    children=move |veiculo| {
                                        let editar = veiculo.clone();
                                        let excluir = veiculo.clone();
                                        view! {
                                            <tr>
                                                <td class="font-mono font-medium">{veiculo.placa.clone()}</td>
                                                <td class="opacity-70">{veiculo.modelo.clone()}</td>
                                                <td class="opacity-70">{veiculo.cor.clone()}</td>
                                                <td class="text-right space-x-1">
                                                    <button
                                                        on:click=move |_| abrir_modal(Some(editar.clone()))
                                                        class="btn btn-ghost btn-square btn-xs"
                                                        title="Editar"
                                                    >
                                                        <Pencil attr:class="h-4 w-4" />
                                                    </button>
                                                    <button
                                                        on:click=move |_| on_delete(excluir.clone())
                                                        class="btn btn-ghost btn-square btn-xs text-error"
                                                        title="Excluir"
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
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

            // Modal de criação/edição
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_aberto.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if em_edicao() { "Editar Veículo" } else { "Novo Veículo" }}
                    </h3>

                    <form on:submit=on_save class="space-y-4 mt-4">
                        <div class="form-control">
                            <label for="placa" class="label">
                                <span class="label-text">"Placa"</span>
                            </label>
                            <input
                                id="placa"
                                type="text"
                                required
                                maxlength="8"
                                prop:value=form_placa
                                on:input=move |ev| {
                                    set_form_placa.set(event_target_value(&ev).to_uppercase())
                                }
                                // Imutável após o cadastro.
                                disabled=em_edicao
                                class="input input-bordered w-full uppercase"
                            />
                            <Show when=em_edicao>
                                <label class="label">
                                    <span class="label-text-alt opacity-60">
                                        "A placa não pode ser alterada após o cadastro."
                                    </span>
                                </label>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label for="modelo" class="label">
                                <span class="label-text">"Modelo (Ex: Iveco Tector, Toyota Bandeirante)"</span>
                            </label>
                            <input
                                id="modelo"
                                type="text"
                                required
                                prop:value=form_modelo
                                on:input=move |ev| set_form_modelo.set(event_target_value(&ev))
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label for="cor" class="label">
                                <span class="label-text">"Cor"</span>
                            </label>
                            <input
                                id="cor"
                                type="text"
                                required
                                prop:value=form_cor
                                on:input=move |ev| set_form_cor.set(event_target_value(&ev))
                                class="input input-bordered w-full"
                            />
                        </div>

                        <Show when=move || form_error.get().is_some()>
                            <div class="p-3 text-sm rounded-lg bg-error/10 text-error">
                                {move || form_error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_modal_aberto.set(false)
                            >
                                "Cancelar"
                            </button>
                            <button type="submit" disabled=move || salvando.get() class="btn btn-primary">
                                {move || if salvando.get() {
                                    view! { <span class="loading loading-spinner"></span> "Salvando..." }.into_any()
                                } else if em_edicao() {
                                    "Salvar Alterações".into_any()
                                } else {
                                    "Cadastrar Veículo".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </DashboardLayout>
    }
}

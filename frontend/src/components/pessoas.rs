use leptos::prelude::*;
use leptos::task::spawn_local;

use patio_shared::{Pessoa, PessoaPayload, TipoVinculo};

use crate::auth::{map_api_error, use_auth};
use crate::components::icons::{Pencil, PlusCircle, RefreshCw, Search, Trash2};
use crate::components::layout::DashboardLayout;
use crate::web::{alerta, confirmar};

#[component]
pub fn PessoasPage() -> impl IntoView {
    let ctx = use_auth();

    let (pessoas, set_pessoas) = signal(Vec::<Pessoa>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (termo, set_termo) = signal(String::new());

    // Modal de criação/edição.
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (modal_aberto, set_modal_aberto) = signal(false);
    let (editando, set_editando) = signal(Option::<Pessoa>::None);
    let (form_nome, set_form_nome) = signal(String::new());
    let (form_documento, set_form_documento) = signal(String::new());
    let (form_telefone, set_form_telefone) = signal(String::new());
    let (form_tipo, set_form_tipo) = signal(TipoVinculo::Visitante);
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (salvando, set_salvando) = signal(false);

    let load = move || {
        let state = ctx.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                match api.get_pessoas().await {
                    Ok(data) => set_pessoas.set(data),
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

    // Mantém o elemento <dialog> nativo em sincronia com o sinal.
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

    let abrir_modal = move |pessoa: Option<Pessoa>| {
        set_form_error.set(None);
        match pessoa {
            Some(p) => {
                set_form_nome.set(p.nome.clone());
                set_form_documento.set(p.documento.clone());
                set_form_telefone.set(p.telefone.clone().unwrap_or_default());
                set_form_tipo.set(p.tipo);
                set_editando.set(Some(p));
            }
            None => {
                set_form_nome.set(String::new());
                set_form_documento.set(String::new());
                set_form_telefone.set(String::new());
                set_form_tipo.set(TipoVinculo::Visitante);
                set_editando.set(None);
            }
        }
        set_modal_aberto.set(true);
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);

        let state = ctx.state.get_untracked();
        let Some(api) = state.api.clone() else {
            return;
        };

        let telefone = form_telefone.get_untracked();
        let payload = PessoaPayload {
            nome: form_nome.get_untracked(),
            documento: form_documento.get_untracked(),
            telefone: if telefone.trim().is_empty() {
                None
            } else {
                Some(telefone)
            },
            tipo: form_tipo.get_untracked(),
        };
        let editando_id = editando.get_untracked().map(|p| p.id);

        set_salvando.set(true);
        spawn_local(async move {
            let resultado = match editando_id {
                Some(id) => api.atualizar_pessoa(id, &payload).await,
                None => api.criar_pessoa(&payload).await,
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

    let on_delete = move |pessoa: Pessoa| {
        if !confirmar("Tem certeza que deseja excluir esta pessoa?") {
            return;
        }
        let state = ctx.state.get_untracked();
        let Some(api) = state.api.clone() else {
            return;
        };
        spawn_local(async move {
            match api.excluir_pessoa(pessoa.id).await {
                Ok(()) => load(),
                // A lista permanece intacta; a falha bloqueia com alert.
                Err(err) => alerta(&map_api_error(&ctx, err)),
            }
        });
    };

    let filtradas = move || {
        let termo = termo.get();
        pessoas
            .get()
            .into_iter()
            .filter(|p| p.corresponde(termo.trim()))
            .collect::<Vec<_>>()
    };
    let lista_vazia = move || filtradas().is_empty();

    view! {
        <DashboardLayout
            page_title="Cadastro de Pessoas"
            page_subtitle="Gerencie funcionários, terceirizados e visitantes."
        >
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body">
                    <div class="flex justify-between items-center mb-6">
                        <div class="relative w-full max-w-sm">
                            <Search attr:class="absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 opacity-40" />
                            <input
                                type="text"
                                placeholder="Buscar por nome, documento ou telefone..."
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
                                "Nova Pessoa"
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
                                    <th>"Nome"</th>
                                    <th>"Documento"</th>
                                    <th>"Telefone"</th>
                                    <th>"Tipo"</th>
                                    <th class="text-right">"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && pessoas.with(|p| p.is_empty())>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 opacity-50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Carregando dados..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || lista_vazia() && !loading.get()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 opacity-50">
                                            "Nenhuma pessoa encontrada."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=filtradas
                                    key=|p| p.id
                                    children=move |pessoa| {
                                        let badge = match pessoa.tipo {
                                            TipoVinculo::Funcionario => "badge badge-info badge-outline",
                                            TipoVinculo::Terceirizado => "badge badge-warning badge-outline",
                                            TipoVinculo::Visitante => "badge badge-ghost",
                                        };
                                        let editar = pessoa.clone();
                                        let excluir = pessoa.clone();
                                        view! {
                                            <tr>
                                                <td class="font-medium">{pessoa.nome.clone()}</td>
                                                <td class="opacity-70">{pessoa.documento.clone()}</td>
                                                <td class="opacity-70">
                                                    {pessoa.telefone.clone().unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>
                                                    <span class=badge>{pessoa.tipo.label()}</span>
                                                </td>
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
                        {move || if editando.get().is_some() { "Editar Pessoa" } else { "Nova Pessoa" }}
                    </h3>

                    <form on:submit=on_save class="space-y-4 mt-4">
                        <div class="form-control">
                            <label for="nome" class="label">
                                <span class="label-text">"Nome Completo"</span>
                            </label>
                            <input
                                id="nome"
                                type="text"
                                required
                                prop:value=form_nome
                                on:input=move |ev| set_form_nome.set(event_target_value(&ev))
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label for="documento" class="label">
                                <span class="label-text">"Documento (CPF/RG/Passaporte)"</span>
                            </label>
                            <input
                                id="documento"
                                type="text"
                                required
                                prop:value=form_documento
                                on:input=move |ev| set_form_documento.set(event_target_value(&ev))
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label for="telefone" class="label">
                                <span class="label-text">"Telefone"</span>
                            </label>
                            <input
                                id="telefone"
                                type="text"
                                placeholder="(99) 99999-9999"
                                prop:value=form_telefone
                                on:input=move |ev| set_form_telefone.set(event_target_value(&ev))
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label for="tipo" class="label">
                                <span class="label-text">"Tipo de Vínculo"</span>
                            </label>
                            <select
                                id="tipo"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    set_form_tipo
                                        .set(TipoVinculo::parse(&event_target_value(&ev)).unwrap_or_default())
                                }
                            >
                                {TipoVinculo::TODOS
                                    .iter()
                                    .map(|tipo| {
                                        let tipo = *tipo;
                                        view! {
                                            <option
                                                value=tipo.as_str()
                                                selected=move || form_tipo.get() == tipo
                                            >
                                                {tipo.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
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
                                } else if editando.get().is_some() {
                                    "Salvar Alterações".into_any()
                                } else {
                                    "Cadastrar Pessoa".into_any()
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

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, use_auth};
use crate::components::icons::Truck;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_auth();

    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_loading = move || ctx.state.get().is_loading;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || senha.get().is_empty() {
            set_error_msg.set(Some("Informe e-mail e senha.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            // O redirecionamento para o painel fica por conta do roteador,
            // que observa o sinal de autenticação.
            if let Err(err) = login(&ctx, email.get_untracked(), senha.get_untracked()).await {
                set_error_msg.set(Some(err.mensagem()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <Truck attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"Controle de Pátio"</h1>
                            <p class="text-base-content/70">
                                "Entre com suas credenciais para continuar"
                            </p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"E-mail"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="porteiro@terrabranca.com.br"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="senha">
                                    <span class="label-text">"Senha"</span>
                                </label>
                                <input
                                    id="senha"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_senha.set(event_target_value(&ev))
                                    prop:value=senha
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                    } else {
                                        "Entrar".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}

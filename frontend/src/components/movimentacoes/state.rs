//! Signal bundle for the workflow screen. Holds the data, resets it
//! between searches, and converts it to requests via the shared builders.

use leptos::prelude::*;

use patio_shared::config::PostoControle;
use patio_shared::{
    EntradaRequest, Movimentacao, Pessoa, SaidaRequest, StatusPlaca, Veiculo, entrada_completa,
    montar_entrada, montar_saida,
};

/// All screen state. `RwSignal` keeps the bundle `Copy`, so it can be
/// passed straight into the sub-forms as a prop.
#[derive(Clone, Copy)]
pub struct FluxoState {
    pub placa: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub status: RwSignal<Option<StatusPlaca>>,
    pub error: RwSignal<Option<String>>,
    /// Success toast, auto-dismissed.
    pub aviso: RwSignal<Option<String>>,

    // Entrada
    pub pessoa_doc: RwSignal<String>,
    pub pessoa: RwSignal<Option<Pessoa>>,
    pub posto: RwSignal<String>,
    pub km_entrada: RwSignal<String>,
    pub motivo_visita: RwSignal<String>,
    pub setor_id: RwSignal<String>,

    // Saída
    pub km_saida: RwSignal<String>,
    pub observacao: RwSignal<String>,
}

impl FluxoState {
    pub fn new() -> Self {
        Self {
            placa: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            status: RwSignal::new(None),
            error: RwSignal::new(None),
            aviso: RwSignal::new(None),
            pessoa_doc: RwSignal::new(String::new()),
            pessoa: RwSignal::new(None),
            posto: RwSignal::new(PostoControle::default().as_valor().to_string()),
            km_entrada: RwSignal::new(String::new()),
            motivo_visita: RwSignal::new(String::new()),
            setor_id: RwSignal::new(String::new()),
            km_saida: RwSignal::new(String::new()),
            observacao: RwSignal::new(String::new()),
        }
    }

    /// Clears every remnant of the previous search before a new one goes
    /// out — no stale cross-contamination between attempts. The typed
    /// plate and document stay, as operator convenience.
    pub fn limpar_busca(&self) {
        self.error.set(None);
        self.status.set(None);
        self.pessoa.set(None);
        self.km_entrada.set(String::new());
        self.motivo_visita.set(String::new());
        self.setor_id.set(String::new());
        self.km_saida.set(String::new());
        self.observacao.set(String::new());
    }

    /// Back to the pre-search state after a successful submission.
    pub fn limpar_tudo(&self) {
        self.limpar_busca();
        self.placa.set(String::new());
        self.pessoa_doc.set(String::new());
    }

    /// Vehicle resolved by the last search, whichever sub-flow is active.
    pub fn veiculo(&self) -> Option<Veiculo> {
        match self.status.get() {
            Some(StatusPlaca::Fora(v)) => Some(v),
            Some(StatusPlaca::NoPatio(m)) => m.veiculo,
            _ => None,
        }
    }

    pub fn movimentacao_aberta(&self) -> Option<Movimentacao> {
        match self.status.get() {
            Some(StatusPlaca::NoPatio(m)) => Some(m),
            _ => None,
        }
    }

    /// Drives the entry submit button.
    pub fn entrada_pronta(&self) -> bool {
        entrada_completa(
            self.veiculo().as_ref(),
            self.pessoa.get().as_ref(),
            &self.km_entrada.get(),
            &self.motivo_visita.get(),
            &self.setor_id.get(),
        )
    }

    pub fn para_entrada(&self) -> Result<EntradaRequest, String> {
        montar_entrada(
            self.veiculo().as_ref(),
            self.pessoa.get().as_ref(),
            &self.km_entrada.get(),
            &self.motivo_visita.get(),
            &self.setor_id.get(),
            &self.posto.get(),
        )
    }

    pub fn para_saida(&self) -> Result<(i64, SaidaRequest), String> {
        montar_saida(
            self.movimentacao_aberta().as_ref(),
            &self.km_saida.get(),
            &self.observacao.get(),
        )
    }
}

impl Default for FluxoState {
    fn default() -> Self {
        Self::new()
    }
}

//! REST client for the Controle de Pátio backend.
//!
//! One instance exists per session, owned by `auth::AuthState`; every call
//! carries the bearer token the instance was created with.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use patio_shared::{
    DashboardResumo, EntradaRequest, LoginRequest, LoginResponse, Movimentacao, Pessoa,
    PessoaPayload, SaidaRequest, StatusPlacaResponse, Veiculo, VeiculoPayload,
};

/// Error taxonomy of a backend call.
///
/// `Server` carries the body's `error` field verbatim when present, so the
/// screens surface the backend's own text; `Unauthorized` additionally
/// tells the session owner to expire the token.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, CORS, DNS).
    Network(String),
    /// 2xx with a body this client cannot decode.
    Decode(String),
    /// Non-2xx carrying the backend message (or the operation fallback).
    Server { status: u16, message: String },
    /// 401 — token missing, invalid or expired.
    Unauthorized,
}

impl ApiError {
    /// Operator-facing message, already localized.
    pub fn mensagem(&self) -> String {
        match self {
            ApiError::Network(_) => "Falha de conexão com o servidor.".to_string(),
            ApiError::Decode(_) => "Resposta inesperada do servidor.".to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Unauthorized => "Sessão expirada. Faça login novamente.".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "erro de rede: {e}"),
            ApiError::Decode(e) => write!(f, "resposta inválida: {e}"),
            ApiError::Server { status, message } => write!(f, "erro {status}: {message}"),
            ApiError::Unauthorized => write!(f, "não autorizado"),
        }
    }
}

/// Body shape the backend uses for application errors.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Classifies a response, preferring the backend's own error message.
async fn check(res: Response, fallback: &str) -> Result<Response, ApiError> {
    if res.ok() {
        return Ok(res);
    }
    if res.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    let status = res.status();
    let message = match res.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => fallback.to_string(),
    };
    Err(ApiError::Server { status, message })
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatioApi {
    base_url: String,
    token: String,
}

impl PatioApi {
    pub fn new(base_url: String, token: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let res = Request::get(&self.url(path))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let res = check(res, fallback).await?;
        decode(res).await
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let res = builder
            .header("Authorization", &self.bearer())
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(res, fallback).await.map(|_| ())
    }

    async fn delete_json(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let res = Request::delete(&self.url(path))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(res, fallback).await.map(|_| ())
    }

    // =====================================================
    // Autenticação
    // =====================================================

    /// Exchanges credentials for a token. The only call made without one.
    pub async fn login(base_url: &str, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", base_url.trim_end_matches('/'));
        let res = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let res = check(res, "Não foi possível autenticar. Verifique as credenciais.").await?;
        decode(res).await
    }

    // =====================================================
    // Movimentações
    // =====================================================

    pub async fn get_dashboard(&self) -> Result<DashboardResumo, ApiError> {
        self.get_json(
            "/movimentacoes/dashboard",
            "Não foi possível carregar o painel.",
        )
        .await
    }

    /// Classifies a plate as on-site / off-site / unknown.
    pub async fn get_status_placa(&self, placa: &str) -> Result<StatusPlacaResponse, ApiError> {
        self.get_json(
            &format!("/movimentacoes/status/{placa}"),
            "Erro ao consultar status da placa.",
        )
        .await
    }

    pub async fn get_relatorio(
        &self,
        data_inicio: &str,
        data_fim: &str,
    ) -> Result<Vec<Movimentacao>, ApiError> {
        self.get_json(
            &format!("/movimentacoes/relatorio?dataInicio={data_inicio}&dataFim={data_fim}"),
            "Não foi possível carregar o histórico de movimentações.",
        )
        .await
    }

    /// Opens a movement (check-in).
    pub async fn registrar_entrada(&self, req: &EntradaRequest) -> Result<(), ApiError> {
        self.send_json(
            Request::post(&self.url("/movimentacoes/entrada")),
            req,
            "Erro ao registrar entrada.",
        )
        .await
    }

    /// Closes the movement identified by `id` (check-out).
    pub async fn registrar_saida(&self, id: i64, req: &SaidaRequest) -> Result<(), ApiError> {
        self.send_json(
            Request::put(&self.url(&format!("/movimentacoes/saida/{id}"))),
            req,
            "Erro ao registrar saída.",
        )
        .await
    }

    // =====================================================
    // Pessoas
    // =====================================================

    pub async fn get_pessoas(&self) -> Result<Vec<Pessoa>, ApiError> {
        self.get_json("/pessoas", "Não foi possível carregar a lista de pessoas.")
            .await
    }

    /// On-demand lookup used by the entry sub-flow.
    pub async fn get_pessoa_por_documento(&self, documento: &str) -> Result<Pessoa, ApiError> {
        self.get_json(
            &format!("/pessoas/documento/{documento}"),
            "Pessoa não encontrada. Cadastre-a antes de registrar a entrada.",
        )
        .await
    }

    pub async fn criar_pessoa(&self, payload: &PessoaPayload) -> Result<(), ApiError> {
        self.send_json(
            Request::post(&self.url("/pessoas")),
            payload,
            "Erro ao salvar a pessoa. Verifique os dados.",
        )
        .await
    }

    pub async fn atualizar_pessoa(
        &self,
        id: i64,
        payload: &PessoaPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Request::put(&self.url(&format!("/pessoas/{id}"))),
            payload,
            "Erro ao salvar a pessoa. Verifique os dados.",
        )
        .await
    }

    pub async fn excluir_pessoa(&self, id: i64) -> Result<(), ApiError> {
        self.delete_json(
            &format!("/pessoas/{id}"),
            "Erro ao excluir a pessoa. Verifique se não há movimentações associadas.",
        )
        .await
    }

    // =====================================================
    // Veículos
    // =====================================================

    pub async fn get_veiculos(&self) -> Result<Vec<Veiculo>, ApiError> {
        self.get_json("/veiculos", "Não foi possível carregar a lista de veículos.")
            .await
    }

    pub async fn criar_veiculo(&self, payload: &VeiculoPayload) -> Result<(), ApiError> {
        self.send_json(
            Request::post(&self.url("/veiculos")),
            payload,
            "Erro ao salvar o veículo. Verifique os dados.",
        )
        .await
    }

    pub async fn atualizar_veiculo(
        &self,
        id: i64,
        payload: &VeiculoPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Request::put(&self.url(&format!("/veiculos/{id}"))),
            payload,
            "Erro ao salvar o veículo. Verifique os dados.",
        )
        .await
    }

    pub async fn excluir_veiculo(&self, id: i64) -> Result<(), ApiError> {
        self.delete_json(
            &format!("/veiculos/{id}"),
            "Erro ao excluir o veículo. (Pode estar em uso no pátio)",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erro_do_servidor_e_mostrado_ao_pe_da_letra() {
        let err = ApiError::Server {
            status: 409,
            message: "Veículo possui movimentação em aberto.".to_string(),
        };
        assert_eq!(err.mensagem(), "Veículo possui movimentação em aberto.");
    }

    #[test]
    fn erros_de_transporte_tem_mensagem_generica() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).mensagem(),
            "Falha de conexão com o servidor."
        );
        assert_eq!(
            ApiError::Unauthorized.mensagem(),
            "Sessão expirada. Faça login novamente."
        );
    }

    #[test]
    fn url_normaliza_a_barra_final() {
        let api = PatioApi::new("http://localhost:3000/api/".to_string(), "t".to_string());
        assert_eq!(api.url("/pessoas"), "http://localhost:3000/api/pessoas");
        assert_eq!(api.url("pessoas"), "http://localhost:3000/api/pessoas");
    }
}

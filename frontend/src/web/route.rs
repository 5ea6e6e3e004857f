//! Route table — pure domain layer, no DOM or `web_sys` access.

use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Login page (default route).
    #[default]
    Login,
    Dashboard,
    Movimentacoes,
    Relatorios,
    Pessoas,
    Veiculos,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/movimentacoes" => Self::Movimentacoes,
            "/relatorios" => Self::Relatorios,
            "/pessoas" => Self::Pessoas,
            "/veiculos" => Self::Veiculos,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Movimentacoes => "/movimentacoes",
            Self::Relatorios => "/relatorios",
            Self::Pessoas => "/pessoas",
            Self::Veiculos => "/veiculos",
            Self::NotFound => "/404",
        }
    }

    /// Guard: every screen behind the sidebar requires a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// An authenticated operator has no business on the login page.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caminhos_fazem_round_trip() {
        for rota in [
            AppRoute::Login,
            AppRoute::Dashboard,
            AppRoute::Movimentacoes,
            AppRoute::Relatorios,
            AppRoute::Pessoas,
            AppRoute::Veiculos,
        ] {
            assert_eq!(AppRoute::from_path(rota.to_path()), rota);
        }
    }

    #[test]
    fn raiz_resolve_para_login() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
    }

    #[test]
    fn caminho_desconhecido_vira_not_found() {
        assert_eq!(AppRoute::from_path("/usuarios"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/pessoas/1"), AppRoute::NotFound);
    }

    #[test]
    fn paginas_internas_exigem_sessao() {
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Movimentacoes.requires_auth());
        assert!(AppRoute::Relatorios.requires_auth());
        assert!(AppRoute::Pessoas.requires_auth());
        assert!(AppRoute::Veiculos.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
    }

    #[test]
    fn logado_sai_da_tela_de_login() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Dashboard);
    }
}

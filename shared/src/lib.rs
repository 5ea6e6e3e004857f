//! Domain models shared across the Controle de Pátio UI.
//!
//! Everything here is plain serde data plus pure helpers (filters,
//! validation), so the crate tests natively even though the consumer is a
//! WASM frontend.

use serde::{Deserialize, Serialize};

pub mod config;
pub mod date;

mod movimento;
pub use movimento::*;

// =========================================================
// Autenticação
// =========================================================

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Token issued by the backend; the frontend keeps it in browser storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// =========================================================
// Pessoas
// =========================================================

/// Affiliation kind of a person passing the gate.
///
/// Wire values are unaccented, matching the backend enum; `label()` is the
/// accented form shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TipoVinculo {
    Funcionario,
    Terceirizado,
    #[default]
    Visitante,
}

impl TipoVinculo {
    pub const TODOS: [TipoVinculo; 3] = [
        TipoVinculo::Funcionario,
        TipoVinculo::Terceirizado,
        TipoVinculo::Visitante,
    ];

    /// Wire value, also used as the `<select>` option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoVinculo::Funcionario => "Funcionario",
            TipoVinculo::Terceirizado => "Terceirizado",
            TipoVinculo::Visitante => "Visitante",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoVinculo::Funcionario => "Funcionário",
            TipoVinculo::Terceirizado => "Terceirizado",
            TipoVinculo::Visitante => "Visitante",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        Self::TODOS.iter().copied().find(|t| t.as_str() == valor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pessoa {
    pub id: i64,
    pub nome: String,
    pub documento: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub tipo: TipoVinculo,
}

impl Pessoa {
    /// Case-insensitive substring match across nome, documento e telefone.
    pub fn corresponde(&self, termo: &str) -> bool {
        let termo = termo.to_lowercase();
        self.nome.to_lowercase().contains(&termo)
            || self.documento.to_lowercase().contains(&termo)
            || self
                .telefone
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&termo))
    }
}

/// Create/update payload — the id never travels in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PessoaPayload {
    pub nome: String,
    pub documento: String,
    pub telefone: Option<String>,
    pub tipo: TipoVinculo,
}

// =========================================================
// Veículos
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veiculo {
    pub id: i64,
    pub placa: String,
    pub modelo: String,
    #[serde(default)]
    pub cor: String,
}

impl Veiculo {
    /// Case-insensitive substring match across placa e modelo.
    pub fn corresponde(&self, termo: &str) -> bool {
        let termo = termo.to_lowercase();
        self.placa.to_lowercase().contains(&termo)
            || self.modelo.to_lowercase().contains(&termo)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeiculoPayload {
    pub placa: String,
    pub modelo: String,
    pub cor: String,
}

/// Plates carry 7 characters (8 with formatting). Checked before any
/// network call; the plate is immutable after creation.
pub fn validar_placa(placa: &str) -> Result<(), String> {
    let tamanho = placa.trim().chars().count();
    if (7..=8).contains(&tamanho) {
        Ok(())
    } else {
        Err("A placa deve ter entre 7 e 8 caracteres.".to_string())
    }
}

// =========================================================
// Setores
// =========================================================

/// Internal destination area; a closed reference list (`config::SETORES`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setor {
    pub id: i64,
    pub nome: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pessoa() -> Pessoa {
        Pessoa {
            id: 3,
            nome: "Ana Souza".to_string(),
            documento: "111.222.333-44".to_string(),
            telefone: Some("(34) 99999-0000".to_string()),
            tipo: TipoVinculo::Visitante,
        }
    }

    #[test]
    fn placa_valida_entre_7_e_8_caracteres() {
        assert!(validar_placa("ABC123").is_err());
        assert!(validar_placa("ABC1234").is_ok());
        assert!(validar_placa("ABC-1234").is_ok());
        assert!(validar_placa("ABC-12345").is_err());
    }

    #[test]
    fn placa_ignora_espacos_nas_bordas() {
        assert!(validar_placa(" ABC1234 ").is_ok());
        assert!(validar_placa("        ").is_err());
    }

    #[test]
    fn pessoa_corresponde_em_qualquer_campo() {
        let p = pessoa();
        assert!(p.corresponde("ana"));
        assert!(p.corresponde("222.333"));
        assert!(p.corresponde("99999"));
        assert!(!p.corresponde("fulano"));
    }

    #[test]
    fn pessoa_sem_telefone_nao_quebra_o_filtro() {
        let p = Pessoa {
            telefone: None,
            ..pessoa()
        };
        assert!(!p.corresponde("99999"));
        assert!(p.corresponde("SOUZA"));
    }

    #[test]
    fn veiculo_corresponde_por_placa_ou_modelo() {
        let v = Veiculo {
            id: 9,
            placa: "ABC1234".to_string(),
            modelo: "Fusca".to_string(),
            cor: "Azul".to_string(),
        };
        assert!(v.corresponde("abc12"));
        assert!(v.corresponde("fus"));
        assert!(!v.corresponde("azul"));
    }

    #[test]
    fn tipo_vinculo_vai_para_o_fio_sem_acento() {
        let json = serde_json::to_string(&TipoVinculo::Funcionario).unwrap();
        assert_eq!(json, "\"Funcionario\"");
        assert_eq!(TipoVinculo::parse("Terceirizado"), Some(TipoVinculo::Terceirizado));
        assert_eq!(TipoVinculo::parse("Diretor"), None);
        assert_eq!(TipoVinculo::Funcionario.label(), "Funcionário");
    }
}

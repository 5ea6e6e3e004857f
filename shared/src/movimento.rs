//! Movement (entrada/saída) wire types and the pure logic behind the
//! workflow screen: plate-status classification, request builders and the
//! dashboard/report aggregates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::PostoControle;
use crate::{Pessoa, Setor, Veiculo};

// =========================================================
// Movimentação
// =========================================================

/// One stay of a vehicle on the premises: opened at gate-in, closed exactly
/// once at gate-out, never deleted by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movimentacao {
    pub id: i64,
    pub data_entrada: String,
    #[serde(default)]
    pub km_entrada: Option<String>,
    #[serde(default)]
    pub motivo_da_visita: Option<String>,
    #[serde(default)]
    pub posto_controle: Option<String>,
    #[serde(default)]
    pub data_saida: Option<String>,
    #[serde(default)]
    pub km_saida: Option<String>,
    #[serde(default)]
    pub observacao: Option<String>,
    #[serde(default)]
    pub veiculo: Option<Veiculo>,
    #[serde(default)]
    pub pessoa: Option<Pessoa>,
    #[serde(default)]
    pub setor_visitado: Option<Setor>,
}

impl Movimentacao {
    /// Open movement: the vehicle is still on-site.
    pub fn aberta(&self) -> bool {
        self.data_saida.is_none()
    }

    /// Case-insensitive substring match across placa, nome e documento.
    pub fn corresponde(&self, termo: &str) -> bool {
        let termo = termo.to_lowercase();
        if let Some(v) = &self.veiculo {
            if v.placa.to_lowercase().contains(&termo) {
                return true;
            }
        }
        if let Some(p) = &self.pessoa {
            if p.nome.to_lowercase().contains(&termo)
                || p.documento.to_lowercase().contains(&termo)
            {
                return true;
            }
        }
        false
    }
}

// =========================================================
// Consulta de placa
// =========================================================

/// Raw body of `GET /movimentacoes/status/{placa}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPlacaResponse {
    pub status: String,
    #[serde(default)]
    pub movimentacao: Option<Movimentacao>,
    #[serde(default)]
    pub veiculo: Option<Veiculo>,
}

/// The three terminal outcomes of a plate search.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusPlaca {
    /// Open movement exists — the screen moves to the exit sub-flow.
    NoPatio(Movimentacao),
    /// Registered vehicle, currently outside — entry sub-flow.
    Fora(Veiculo),
    /// Plate not registered at all; terminal message, no form.
    NaoEncontrada,
}

impl StatusPlacaResponse {
    /// Collapses the loose wire shape into exactly one of the three states.
    ///
    /// A status the payload does not back up (e.g. `"patio"` without the
    /// movement attached) lands on `NaoEncontrada` rather than rendering a
    /// half-filled form.
    pub fn classificar(self) -> StatusPlaca {
        match self.status.as_str() {
            "patio" => match self.movimentacao {
                Some(m) => StatusPlaca::NoPatio(m),
                None => StatusPlaca::NaoEncontrada,
            },
            "fora" => match self.veiculo {
                Some(v) => StatusPlaca::Fora(v),
                None => StatusPlaca::NaoEncontrada,
            },
            _ => StatusPlaca::NaoEncontrada,
        }
    }
}

// =========================================================
// Registro de entrada / saída
// =========================================================

/// Body of `POST /movimentacoes/entrada`. The odometer goes out as the raw
/// input string; the backend normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntradaRequest {
    pub id_veiculo: i64,
    pub id_pessoa: i64,
    pub km_entrada: String,
    pub motivo_da_visita: String,
    pub id_setor_visitado: i64,
    pub id_posto_controle: i64,
}

/// Body of `PUT /movimentacoes/saida/{id}`. `observacao` serializes as
/// `null` when left blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaidaRequest {
    pub km_saida: String,
    pub observacao: Option<String>,
}

/// Gates the entry submit button: enabled only when vehicle, person,
/// odometer, reason and sector are all resolved.
pub fn entrada_completa(
    veiculo: Option<&Veiculo>,
    pessoa: Option<&Pessoa>,
    km_entrada: &str,
    motivo: &str,
    setor_id: &str,
) -> bool {
    veiculo.is_some()
        && pessoa.is_some()
        && !km_entrada.trim().is_empty()
        && !motivo.trim().is_empty()
        && !setor_id.trim().is_empty()
}

/// Validates the entry form and assembles the request, or returns the
/// message to surface inline.
pub fn montar_entrada(
    veiculo: Option<&Veiculo>,
    pessoa: Option<&Pessoa>,
    km_entrada: &str,
    motivo: &str,
    setor_id: &str,
    posto: &str,
) -> Result<EntradaRequest, String> {
    let (Some(veiculo), Some(pessoa)) = (veiculo, pessoa) else {
        return Err("Veículo ou Pessoa inválida para o registro de Entrada.".to_string());
    };

    const CAMPOS_OBRIGATORIOS: &str =
        "KM de entrada, motivo da visita e setor visitado são obrigatórios.";
    if km_entrada.trim().is_empty() || motivo.trim().is_empty() {
        return Err(CAMPOS_OBRIGATORIOS.to_string());
    }
    let setor: i64 = setor_id
        .trim()
        .parse()
        .map_err(|_| CAMPOS_OBRIGATORIOS.to_string())?;

    let Some(posto) = PostoControle::parse(posto) else {
        return Err("Posto de controle inválido.".to_string());
    };

    Ok(EntradaRequest {
        id_veiculo: veiculo.id,
        id_pessoa: pessoa.id,
        km_entrada: km_entrada.trim().to_string(),
        motivo_da_visita: motivo.trim().to_string(),
        id_setor_visitado: setor,
        id_posto_controle: posto.id(),
    })
}

/// Validates the exit form and assembles the update keyed by the open
/// movement's id.
pub fn montar_saida(
    movimentacao: Option<&Movimentacao>,
    km_saida: &str,
    observacao: &str,
) -> Result<(i64, SaidaRequest), String> {
    let Some(mov) = movimentacao else {
        return Err(
            "Nenhuma movimentação ativa encontrada para registrar a saída.".to_string(),
        );
    };
    if km_saida.trim().is_empty() {
        return Err("O KM de saída é obrigatório.".to_string());
    }
    let observacao = match observacao.trim() {
        "" => None,
        o => Some(o.to_string()),
    };
    Ok((
        mov.id,
        SaidaRequest {
            km_saida: km_saida.trim().to_string(),
            observacao,
        },
    ))
}

// =========================================================
// Dashboard e relatório
// =========================================================

/// Precomputed metrics returned by `GET /movimentacoes/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardResumo {
    #[serde(default)]
    pub veiculos_no_patio: u64,
    #[serde(default)]
    pub entradas_hoje: u64,
    #[serde(default)]
    pub saidas_hoje: u64,
    #[serde(default)]
    pub recentes: Vec<MovimentoRecente>,
}

/// Row of the dashboard's recent-movements table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovimentoRecente {
    pub id: i64,
    pub tipo_evento: String,
    #[serde(default)]
    pub status: String,
    pub placa: String,
    pub pessoa: String,
    pub posto_controle: String,
    pub data_evento: String,
}

/// Counts shown above the report table, derived from the already-filtered
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResumoRelatorio {
    pub total: usize,
    pub veiculos_distintos: usize,
    pub em_patio: usize,
    pub finalizadas: usize,
}

impl ResumoRelatorio {
    pub fn calcular(movimentacoes: &[Movimentacao]) -> Self {
        let total = movimentacoes.len();
        let em_patio = movimentacoes.iter().filter(|m| m.aberta()).count();
        let placas: BTreeSet<&str> = movimentacoes
            .iter()
            .filter_map(|m| m.veiculo.as_ref())
            .map(|v| v.placa.as_str())
            .collect();
        Self {
            total,
            veiculos_distintos: placas.len(),
            em_patio,
            finalizadas: total - em_patio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TipoVinculo;
    use serde_json::json;

    fn veiculo(id: i64, placa: &str, modelo: &str) -> Veiculo {
        Veiculo {
            id,
            placa: placa.to_string(),
            modelo: modelo.to_string(),
            cor: String::new(),
        }
    }

    fn pessoa(id: i64, nome: &str, documento: &str) -> Pessoa {
        Pessoa {
            id,
            nome: nome.to_string(),
            documento: documento.to_string(),
            telefone: None,
            tipo: TipoVinculo::Visitante,
        }
    }

    fn movimentacao(id: i64, placa: &str, saida: Option<&str>) -> Movimentacao {
        Movimentacao {
            id,
            data_entrada: "2026-08-07T08:00:00-03:00".to_string(),
            km_entrada: Some("1000".to_string()),
            motivo_da_visita: Some("entrega".to_string()),
            posto_controle: Some("Portaria Principal".to_string()),
            data_saida: saida.map(str::to_string),
            km_saida: None,
            observacao: None,
            veiculo: Some(veiculo(9, placa, "Fusca")),
            pessoa: Some(pessoa(3, "Ana", "111")),
            setor_visitado: Some(Setor {
                id: 1,
                nome: "Carregamento".to_string(),
            }),
        }
    }

    #[test]
    fn status_patio_leva_ao_fluxo_de_saida() {
        let resp = StatusPlacaResponse {
            status: "patio".to_string(),
            movimentacao: Some(movimentacao(7, "ABC1234", None)),
            veiculo: None,
        };
        match resp.classificar() {
            StatusPlaca::NoPatio(m) => assert_eq!(m.id, 7),
            outro => panic!("classificação inesperada: {outro:?}"),
        }
    }

    #[test]
    fn status_fora_leva_ao_fluxo_de_entrada() {
        let resp = StatusPlacaResponse {
            status: "fora".to_string(),
            movimentacao: None,
            veiculo: Some(veiculo(9, "ABC1234", "Fusca")),
        };
        match resp.classificar() {
            StatusPlaca::Fora(v) => assert_eq!(v.placa, "ABC1234"),
            outro => panic!("classificação inesperada: {outro:?}"),
        }
    }

    #[test]
    fn status_desconhecido_e_terminal() {
        let resp = StatusPlacaResponse {
            status: "fora desconhecido".to_string(),
            movimentacao: None,
            veiculo: None,
        };
        assert_eq!(resp.classificar(), StatusPlaca::NaoEncontrada);
    }

    #[test]
    fn status_sem_payload_coerente_vira_nao_encontrada() {
        // "patio" sem a movimentação anexada não pode abrir o formulário.
        let resp = StatusPlacaResponse {
            status: "patio".to_string(),
            movimentacao: None,
            veiculo: Some(veiculo(9, "ABC1234", "Fusca")),
        };
        assert_eq!(resp.classificar(), StatusPlaca::NaoEncontrada);
    }

    #[test]
    fn entrada_completa_exige_os_cinco_campos() {
        let v = veiculo(9, "ABC1234", "Fusca");
        let p = pessoa(3, "Ana", "111");
        assert!(entrada_completa(Some(&v), Some(&p), "1000", "entrega", "1"));
        assert!(!entrada_completa(None, Some(&p), "1000", "entrega", "1"));
        assert!(!entrada_completa(Some(&v), None, "1000", "entrega", "1"));
        assert!(!entrada_completa(Some(&v), Some(&p), " ", "entrega", "1"));
        assert!(!entrada_completa(Some(&v), Some(&p), "1000", "", "1"));
        assert!(!entrada_completa(Some(&v), Some(&p), "1000", "entrega", ""));
    }

    #[test]
    fn montar_entrada_produz_o_corpo_esperado() {
        let v = veiculo(9, "ABC1234", "Fusca");
        let p = pessoa(3, "Ana", "111");
        let req = montar_entrada(
            Some(&v),
            Some(&p),
            "1000",
            "entrega",
            "1",
            "Portaria Principal",
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "id_veiculo": 9,
                "id_pessoa": 3,
                "km_entrada": "1000",
                "motivo_da_visita": "entrega",
                "id_setor_visitado": 1,
                "id_posto_controle": 1,
            })
        );
    }

    #[test]
    fn montar_entrada_sem_pessoa_ou_veiculo() {
        let v = veiculo(9, "ABC1234", "Fusca");
        let erro = montar_entrada(Some(&v), None, "1000", "entrega", "1", "Portaria Principal")
            .unwrap_err();
        assert_eq!(erro, "Veículo ou Pessoa inválida para o registro de Entrada.");
    }

    #[test]
    fn montar_entrada_exige_km_motivo_e_setor() {
        let v = veiculo(9, "ABC1234", "Fusca");
        let p = pessoa(3, "Ana", "111");
        for (km, motivo, setor) in [("", "entrega", "1"), ("1000", "", "1"), ("1000", "entrega", "")] {
            let erro =
                montar_entrada(Some(&v), Some(&p), km, motivo, setor, "Portaria Principal")
                    .unwrap_err();
            assert_eq!(
                erro,
                "KM de entrada, motivo da visita e setor visitado são obrigatórios."
            );
        }
    }

    #[test]
    fn montar_entrada_rejeita_posto_sem_mapeamento() {
        let v = veiculo(9, "ABC1234", "Fusca");
        let p = pessoa(3, "Ana", "111");
        let erro = montar_entrada(Some(&v), Some(&p), "1000", "entrega", "1", "Portaria Norte")
            .unwrap_err();
        assert_eq!(erro, "Posto de controle inválido.");
    }

    #[test]
    fn montar_saida_envia_observacao_nula_quando_vazia() {
        let mov = movimentacao(7, "ABC1234", None);
        let (id, req) = montar_saida(Some(&mov), "1200", "  ").unwrap();
        assert_eq!(id, 7);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "km_saida": "1200", "observacao": null })
        );
    }

    #[test]
    fn montar_saida_preserva_observacao_preenchida() {
        let mov = movimentacao(7, "ABC1234", None);
        let (_, req) = montar_saida(Some(&mov), "1200", "lacre conferido").unwrap();
        assert_eq!(req.observacao.as_deref(), Some("lacre conferido"));
    }

    #[test]
    fn montar_saida_exige_movimentacao_e_km() {
        assert_eq!(
            montar_saida(None, "1200", "").unwrap_err(),
            "Nenhuma movimentação ativa encontrada para registrar a saída."
        );
        let mov = movimentacao(7, "ABC1234", None);
        assert_eq!(
            montar_saida(Some(&mov), "", "").unwrap_err(),
            "O KM de saída é obrigatório."
        );
    }

    #[test]
    fn resumo_do_relatorio_conta_sobre_o_conjunto_filtrado() {
        let movs = vec![
            movimentacao(1, "ABC1234", None),
            movimentacao(2, "ABC1234", Some("2026-08-07T10:00:00-03:00")),
            movimentacao(3, "XYZ9876", Some("2026-08-07T11:00:00-03:00")),
        ];
        let resumo = ResumoRelatorio::calcular(&movs);
        assert_eq!(resumo.total, 3);
        assert_eq!(resumo.veiculos_distintos, 2);
        assert_eq!(resumo.em_patio, 1);
        assert_eq!(resumo.finalizadas, 2);
    }

    #[test]
    fn filtro_do_relatorio_cobre_placa_nome_e_documento() {
        let mov = movimentacao(1, "ABC1234", None);
        assert!(mov.corresponde("abc12"));
        assert!(mov.corresponde("ana"));
        assert!(mov.corresponde("111"));
        assert!(!mov.corresponde("fusca")); // modelo não entra no filtro do relatório
    }

    #[test]
    fn movimentacao_aberta_enquanto_nao_ha_saida() {
        assert!(movimentacao(1, "ABC1234", None).aberta());
        assert!(!movimentacao(1, "ABC1234", Some("2026-08-07T10:00:00-03:00")).aberta());
    }
}

//! pt-BR date presentation on top of `chrono`.

use chrono::{DateTime, Local};

/// Formats an RFC 3339 stamp as `dd/mm/aaaa hh:mm`, keeping the stamp's
/// own offset. Unparseable input is shown verbatim so a backend quirk
/// never blanks a report cell.
pub fn formatar_data_hora(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// `None` (vehicle still on-site) renders as "-".
pub fn formatar_data_hora_opt(iso: Option<&str>) -> String {
    match iso {
        Some(s) if !s.is_empty() => formatar_data_hora(s),
        _ => "-".to_string(),
    }
}

/// Local date as `aaaa-mm-dd`, the default for the report range inputs.
pub fn hoje_iso() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formata_no_fuso_do_proprio_carimbo() {
        assert_eq!(
            formatar_data_hora("2026-08-07T14:30:00-03:00"),
            "07/08/2026 14:30"
        );
        assert_eq!(formatar_data_hora("2026-01-02T03:04:05Z"), "02/01/2026 03:04");
    }

    #[test]
    fn entrada_ilegivel_passa_adiante() {
        assert_eq!(formatar_data_hora("ontem"), "ontem");
    }

    #[test]
    fn ausencia_vira_traco() {
        assert_eq!(formatar_data_hora_opt(None), "-");
        assert_eq!(formatar_data_hora_opt(Some("")), "-");
        assert_eq!(
            formatar_data_hora_opt(Some("2026-08-07T14:30:00-03:00")),
            "07/08/2026 14:30"
        );
    }

    #[test]
    fn hoje_iso_tem_o_formato_de_input_date() {
        let hoje = hoje_iso();
        assert_eq!(hoje.len(), 10);
        assert_eq!(&hoje[4..5], "-");
        assert_eq!(&hoje[7..8], "-");
    }
}

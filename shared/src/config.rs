//! Client-side reference data: API location, control posts and the sector
//! list consumed by the entry form.

/// Backend REST base. The Node backend serves under `/api` on port 3000.
pub const API_BASE_URL: &str = "http://localhost:3000/api";

/// Physical gate where a movement event is recorded.
///
/// Single owner of the label ↔ numeric-id mapping; every form resolves
/// posts through here instead of carrying its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostoControle {
    #[default]
    Principal,
    Secundaria,
}

impl PostoControle {
    pub const TODOS: [PostoControle; 2] =
        [PostoControle::Principal, PostoControle::Secundaria];

    /// Wire value, also used as the `<select>` option value (unaccented).
    pub fn as_valor(&self) -> &'static str {
        match self {
            PostoControle::Principal => "Portaria Principal",
            PostoControle::Secundaria => "Portaria Secundaria",
        }
    }

    /// Accented label shown to the operator.
    pub fn label(&self) -> &'static str {
        match self {
            PostoControle::Principal => "Portaria Principal",
            PostoControle::Secundaria => "Portaria Secundária",
        }
    }

    /// Numeric id expected by the backend reference table.
    pub fn id(&self) -> i64 {
        match self {
            PostoControle::Principal => 1,
            PostoControle::Secundaria => 2,
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        Self::TODOS.iter().copied().find(|p| p.as_valor() == valor)
    }
}

/// Sectors a visit can be registered against. Kept in lockstep with the
/// backend reference table.
pub const SETORES: &[(i64, &str)] = &[(1, "Carregamento"), (2, "Escritório")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posto_mapeia_para_os_ids_da_tabela() {
        assert_eq!(PostoControle::Principal.id(), 1);
        assert_eq!(PostoControle::Secundaria.id(), 2);
    }

    #[test]
    fn posto_faz_round_trip_pelo_valor() {
        for posto in PostoControle::TODOS {
            assert_eq!(PostoControle::parse(posto.as_valor()), Some(posto));
        }
    }

    #[test]
    fn posto_desconhecido_nao_mapeia() {
        assert_eq!(PostoControle::parse("Portaria Norte"), None);
        assert_eq!(PostoControle::parse(""), None);
        // o rótulo acentuado não é valor de fio
        assert_eq!(PostoControle::parse("Portaria Secundária"), None);
    }
}

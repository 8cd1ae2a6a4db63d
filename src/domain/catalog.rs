// Chart catalog - the fixed set of renderable charts
use crate::domain::sales::{Channel, Measure, SalesField};
use thiserror::Error;

/// One renderable chart: x is always the month, y is one sales metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    pub id: &'static str,
    pub y_field: SalesField,
    pub title: &'static str,
    pub y_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("grafico desconhecido: {0:?}")]
    UnknownChart(String),
}

/// Charts shown by default on first load.
pub const DEFAULT_CHARTS: [&str; 2] = ["Pedidos Totais", "Ganho Total"];

pub const CHARTS: [ChartSpec; 14] = [
    ChartSpec {
        id: "Pedidos Totais",
        y_field: SalesField::Total(Measure::Orders),
        title: "Pedidos Totais por Mes",
        y_label: "Quantidade de Pedidos",
    },
    ChartSpec {
        id: "Ganho Total",
        y_field: SalesField::Total(Measure::Revenue),
        title: "Ganho Total por Mes",
        y_label: "Ganho Total (R$)",
    },
    ChartSpec {
        id: "Entrega Pedidos",
        y_field: SalesField::Channel(Channel::Entrega, Measure::Orders),
        title: "Entrega - Pedidos por Mes",
        y_label: "Pedidos de Entrega",
    },
    ChartSpec {
        id: "Entrega Valor",
        y_field: SalesField::Channel(Channel::Entrega, Measure::Revenue),
        title: "Entrega - Valor por Mes",
        y_label: "Valor de Entrega (R$)",
    },
    ChartSpec {
        id: "Retirada Pedidos",
        y_field: SalesField::Channel(Channel::Retirada, Measure::Orders),
        title: "Retirada - Pedidos por Mes",
        y_label: "Pedidos de Retirada",
    },
    ChartSpec {
        id: "Retirada Valor",
        y_field: SalesField::Channel(Channel::Retirada, Measure::Revenue),
        title: "Retirada - Valor por Mes",
        y_label: "Valor de Retirada (R$)",
    },
    ChartSpec {
        id: "Salao Pedidos",
        y_field: SalesField::Channel(Channel::Salao, Measure::Orders),
        title: "Salao - Pedidos por Mes",
        y_label: "Pedidos no Salao",
    },
    ChartSpec {
        id: "Salao Valor",
        y_field: SalesField::Channel(Channel::Salao, Measure::Revenue),
        title: "Salao - Valor por Mes",
        y_label: "Valor no Salao (R$)",
    },
    ChartSpec {
        id: "Saipos Pedidos",
        y_field: SalesField::Channel(Channel::Saipos, Measure::Orders),
        title: "Saipos - Pedidos por Mes",
        y_label: "Pedidos Saipos",
    },
    ChartSpec {
        id: "Saipos Valor",
        y_field: SalesField::Channel(Channel::Saipos, Measure::Revenue),
        title: "Saipos - Valor por Mes",
        y_label: "Valor Saipos (R$)",
    },
    ChartSpec {
        id: "Telefone Pedidos",
        y_field: SalesField::Channel(Channel::Telefone, Measure::Orders),
        title: "Telefone - Pedidos por Mes",
        y_label: "Pedidos via Telefone",
    },
    ChartSpec {
        id: "Telefone Valor",
        y_field: SalesField::Channel(Channel::Telefone, Measure::Revenue),
        title: "Telefone - Valor por Mes",
        y_label: "Valor via Telefone (R$)",
    },
    ChartSpec {
        id: "Ifood Pedidos",
        y_field: SalesField::Channel(Channel::Ifood, Measure::Orders),
        title: "Ifood - Pedidos por Mes",
        y_label: "Pedidos via Ifood",
    },
    ChartSpec {
        id: "Ifood Valor",
        y_field: SalesField::Channel(Channel::Ifood, Measure::Revenue),
        title: "Ifood - Valor por Mes",
        y_label: "Valor via Ifood (R$)",
    },
];

/// Exact-match lookup by identifier. Identifiers come from the fixed list
/// above, never from the dataset, so no normalization is applied.
pub fn find(id: &str) -> Result<&'static ChartSpec, CatalogError> {
    CHARTS
        .iter()
        .find(|spec| spec.id == id)
        .ok_or_else(|| CatalogError::UnknownChart(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_one_chart_per_metric() {
        assert_eq!(CHARTS.len(), 14);
        for default in DEFAULT_CHARTS {
            assert!(find(default).is_ok());
        }
    }

    #[test]
    fn test_find_exact_match() {
        let spec = find("Ifood Valor").unwrap();
        assert_eq!(
            spec.y_field,
            SalesField::Channel(Channel::Ifood, Measure::Revenue)
        );
        assert_eq!(spec.title, "Ifood - Valor por Mes");
    }

    #[test]
    fn test_find_is_accent_and_case_sensitive() {
        assert!(find("Salão Pedidos").is_err());
        assert!(find("salao pedidos").is_err());
        assert_eq!(
            find("Grafico X"),
            Err(CatalogError::UnknownChart("Grafico X".to_string()))
        );
    }
}

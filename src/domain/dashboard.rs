// Dashboard domain model
use crate::domain::catalog::{CatalogError, ChartSpec};
use crate::domain::sales::SalesRecord;

/// Summary over the currently filtered rows. The average is `None` when the
/// filtered subset has no orders, which the page shows as an explicit dash.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub total_orders: u64,
    pub total_earnings: f64,
    pub avg_earnings_per_order: Option<f64>,
}

/// Which of the two side-by-side page regions a chart lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartColumn {
    Left,
    Right,
}

impl ChartColumn {
    /// Selected charts alternate columns in selection order.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            ChartColumn::Left
        } else {
            ChartColumn::Right
        }
    }
}

/// One chart slot on the page. A selection naming an unknown chart keeps its
/// slot and surfaces the error there instead of aborting the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub column: ChartColumn,
    pub chart: Result<&'static ChartSpec, CatalogError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: String,
    pub rows: Vec<SalesRecord>,
    pub metrics: SummaryMetrics,
    pub panels: Vec<ChartPanel>,
}

// Dashboard service - Use case for building the sales dashboard
use crate::domain::catalog;
use crate::domain::dashboard::{ChartColumn, ChartPanel, Dashboard, SummaryMetrics};
use crate::domain::sales::SalesRecord;

/// Holds the dataset loaded at startup and recomputes the whole dashboard
/// from scratch for every request. No state survives between requests.
#[derive(Clone)]
pub struct DashboardService {
    title: String,
    dataset: Vec<SalesRecord>,
}

impl DashboardService {
    pub fn new(title: String, dataset: Vec<SalesRecord>) -> Self {
        Self { title, dataset }
    }

    /// Month labels offered in the filter control, in dataset order,
    /// de-duplicated.
    pub fn month_options(&self) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for record in &self.dataset {
            if !options.iter().any(|m| *m == record.month) {
                options.push(record.month.clone());
            }
        }
        options
    }

    /// Ordered subsequence of the dataset whose month is in the selection.
    /// An empty selection means an empty subset, not the full dataset.
    pub fn filter_rows(&self, months: &[String]) -> Vec<&SalesRecord> {
        self.dataset
            .iter()
            .filter(|record| months.iter().any(|m| *m == record.month))
            .collect()
    }

    pub fn get_dashboard(&self, months: &[String], charts: &[String]) -> Dashboard {
        let rows: Vec<SalesRecord> = self
            .filter_rows(months)
            .into_iter()
            .cloned()
            .collect();
        let metrics = summarize(&rows);

        let panels = charts
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let chart = catalog::find(id);
                if let Err(err) = &chart {
                    tracing::warn!("skipping chart slot {index}: {err}");
                }
                ChartPanel {
                    column: ChartColumn::for_index(index),
                    chart,
                }
            })
            .collect();

        Dashboard {
            title: self.title.clone(),
            rows,
            metrics,
            panels,
        }
    }
}

/// Sum orders and earnings over the filtered rows. The average is left
/// undefined rather than dividing by a zero order count.
pub fn summarize(rows: &[SalesRecord]) -> SummaryMetrics {
    let total_orders: u64 = rows.iter().map(|r| r.total.orders).sum();
    let total_earnings: f64 = rows.iter().map(|r| r.total.revenue).sum();
    let avg_earnings_per_order = if total_orders == 0 {
        None
    } else {
        Some(total_earnings / total_orders as f64)
    };

    SummaryMetrics {
        total_orders,
        total_earnings,
        avg_earnings_per_order,
    }
}

// ECharts line-chart construction for catalog entries
use crate::domain::catalog::ChartSpec;
use crate::domain::sales::SalesRecord;
use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisType, Symbol},
    series::Line,
};

/// Build the line chart for one catalog entry over the filtered rows:
/// x = month labels in row order, y = the entry's metric, a marker on every
/// point. Empty rows produce a chart with no points, which is not an error.
pub fn line_chart(rows: &[SalesRecord], spec: &ChartSpec) -> Chart {
    let months: Vec<String> = rows.iter().map(|r| r.month.clone()).collect();
    let values: Vec<f64> = rows.iter().map(|r| r.field(spec.y_field)).collect();

    Chart::new()
        .title(Title::new().text(spec.title))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Mes")
                .data(months),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name(spec.y_label))
        .series(
            Line::new()
                .name(spec.id)
                .symbol(Symbol::Circle)
                .show_symbol(true)
                .data(values),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use crate::domain::sales::ChannelSales;

    fn rows() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new(
                "Jan".to_string(),
                ChannelSales::new(10, 100.0),
                [ChannelSales::new(0, 0.0); 6],
            ),
            SalesRecord::new(
                "Fev".to_string(),
                ChannelSales::new(20, 300.0),
                [ChannelSales::new(0, 0.0); 6],
            ),
        ]
    }

    #[test]
    fn test_chart_carries_months_and_values() {
        let spec = catalog::find("Ganho Total").unwrap();
        let options = serde_json::to_string(&line_chart(&rows(), spec)).unwrap();
        assert!(options.contains("Ganho Total por Mes"));
        assert!(options.contains("Jan"));
        assert!(options.contains("300.0"));
    }

    #[test]
    fn test_empty_rows_render_degenerate_chart() {
        let spec = catalog::find("Pedidos Totais").unwrap();
        let options = serde_json::to_string(&line_chart(&[], spec)).unwrap();
        assert!(options.contains("Pedidos Totais por Mes"));
    }
}

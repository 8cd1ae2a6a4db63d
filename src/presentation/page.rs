// HTML rendering of the dashboard page
use crate::domain::catalog;
use crate::domain::dashboard::{ChartColumn, Dashboard};
use crate::presentation::charts::line_chart;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

const STYLE: &str = r#"
body { margin: 0; display: flex; font-family: sans-serif; background: #f7f7f7; }
.sidebar { width: 270px; min-height: 100vh; padding: 1rem; background: #fff; border-right: 1px solid #ddd; }
.sidebar h2 { font-size: 1rem; }
.sidebar label { display: block; margin: 0.15rem 0; }
.sidebar button { margin-top: 0.75rem; }
.metric { margin: 0.5rem 0; }
.metric .label { color: #666; font-size: 0.85rem; }
.metric .value { font-size: 1.3rem; font-weight: bold; }
main { flex: 1; padding: 1rem 2rem; }
.columns { display: flex; gap: 1rem; }
.column { flex: 1; min-width: 0; }
.chart { height: 380px; margin-bottom: 1rem; background: #fff; border: 1px solid #ddd; }
.chart-error { display: flex; align-items: center; justify-content: center; color: #b00; }
"#;

const CONTROLS_SCRIPT: &str = r#"
document.getElementById('controls').addEventListener('submit', function (event) {
    event.preventDefault();
    const join = function (cls) {
        return Array.from(document.querySelectorAll('.' + cls + ':checked'))
            .map(function (box) { return box.value; })
            .join(',');
    };
    const params = new URLSearchParams();
    params.set('months', join('month-box'));
    params.set('charts', join('chart-box'));
    window.location.search = params.toString();
});
"#;

pub fn dashboard_page(
    dashboard: &Dashboard,
    month_options: &[String],
    selected_months: &[String],
    selected_charts: &[String],
) -> Markup {
    let mut left: Vec<Markup> = Vec::new();
    let mut right: Vec<Markup> = Vec::new();
    let mut chart_inits: Vec<String> = Vec::new();

    for (index, panel) in dashboard.panels.iter().enumerate() {
        let body = match &panel.chart {
            Ok(spec) => {
                let dom_id = format!("chart-{index}");
                let chart = line_chart(&dashboard.rows, spec);
                match serde_json::to_string(&chart) {
                    Ok(options) => {
                        chart_inits.push(format!("initChart('{dom_id}', {options});"));
                        html! { div id=(dom_id) class="chart" {} }
                    }
                    Err(err) => {
                        tracing::error!("failed to serialize chart {}: {err}", spec.id);
                        error_card(&format!("Falha ao montar o grafico {:?}", spec.id))
                    }
                }
            }
            Err(err) => error_card(&err.to_string()),
        };
        match panel.column {
            ChartColumn::Left => left.push(body),
            ChartColumn::Right => right.push(body),
        }
    }

    let init_script = format!(
        r#"function initChart(id, option) {{
    const chart = echarts.init(document.getElementById(id));
    chart.setOption(option);
    window.addEventListener('resize', chart.resize);
}}
document.addEventListener('DOMContentLoaded', function () {{
{}
}});"#,
        chart_inits.join("\n")
    );

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { (dashboard.title) }
                script src=(ECHARTS_CDN) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                aside class="sidebar" {
                    form id="controls" {
                        h2 { "Escolha os Meses para Exibir" }
                        @for month in month_options {
                            label {
                                input type="checkbox" class="month-box" value=(month)
                                    checked[selected_months.contains(month)];
                                " " (month)
                            }
                        }
                        h2 { "Escolha os Graficos para Exibir" }
                        @for spec in &catalog::CHARTS {
                            label {
                                input type="checkbox" class="chart-box" value=(spec.id)
                                    checked[selected_charts.iter().any(|id| id == spec.id)];
                                " " (spec.id)
                            }
                        }
                        button type="submit" { "Aplicar" }
                    }
                    h2 { "Resumo dos Dados" }
                    (metric("Pedidos Totais", &dashboard.metrics.total_orders.to_string()))
                    (metric("Ganho Total", &format_brl(dashboard.metrics.total_earnings)))
                    (metric(
                        "Ganho Medio por Pedido",
                        &dashboard
                            .metrics
                            .avg_earnings_per_order
                            .map(format_brl)
                            .unwrap_or_else(|| "-".to_string()),
                    ))
                }
                main {
                    h1 { (dashboard.title) }
                    p { "Visualizacao dos dados de vendas por categoria e mes." }
                    div class="columns" {
                        div class="column" { @for body in &left { (body) } }
                        div class="column" { @for body in &right { (body) } }
                    }
                }
                script { (PreEscaped(CONTROLS_SCRIPT)) }
                script { (PreEscaped(init_script)) }
            }
        }
    }
}

fn metric(label: &str, value: &str) -> Markup {
    html! {
        div class="metric" {
            div class="label" { (label) }
            div class="value" { (value) }
        }
    }
}

fn error_card(message: &str) -> Markup {
    html! { div class="chart chart-error" { (message) } }
}

/// "R$ 1,234.56" as the original dashboard printed it.
pub fn format_brl(amount: f64) -> String {
    let text = format!("{amount:.2}");
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (index, digit) in units.chars().enumerate() {
        if index > 0 && (units.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("R$ {grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::sales::{ChannelSales, SalesRecord};

    #[test]
    fn test_format_brl_groups_thousands() {
        assert_eq!(format_brl(0.0), "R$ 0.00");
        assert_eq!(format_brl(13.333), "R$ 13.33");
        assert_eq!(format_brl(1234.5), "R$ 1,234.50");
        assert_eq!(format_brl(1234567.891), "R$ 1,234,567.89");
    }

    fn service() -> DashboardService {
        DashboardService::new(
            "Dashboard de Vendas da Lanchonete".to_string(),
            vec![SalesRecord::new(
                "Jan".to_string(),
                ChannelSales::new(10, 100.0),
                [ChannelSales::new(0, 0.0); 6],
            )],
        )
    }

    #[test]
    fn test_page_renders_summary_and_chart_slots() {
        let service = service();
        let months = vec!["Jan".to_string()];
        let charts = vec!["Pedidos Totais".to_string(), "Ganho Total".to_string()];
        let dashboard = service.get_dashboard(&months, &charts);
        let page = dashboard_page(&dashboard, &months, &months, &charts).into_string();

        assert!(page.contains("Resumo dos Dados"));
        assert!(page.contains("R$ 100.00"));
        assert!(page.contains("chart-0"));
        assert!(page.contains("chart-1"));
        assert!(page.contains("Pedidos Totais por Mes"));
    }

    #[test]
    fn test_unknown_chart_renders_error_card() {
        let service = service();
        let months = vec!["Jan".to_string()];
        let charts = vec!["Nope".to_string()];
        let dashboard = service.get_dashboard(&months, &charts);
        let page = dashboard_page(&dashboard, &months, &months, &charts).into_string();

        assert!(page.contains("chart-error"));
        assert!(page.contains("Nope"));
    }

    #[test]
    fn test_empty_selection_shows_dash_for_average() {
        let service = service();
        let dashboard = service.get_dashboard(&[], &[]);
        let page = dashboard_page(&dashboard, &["Jan".to_string()], &[], &[]).into_string();

        assert!(page.contains("Ganho Medio por Pedido"));
        assert!(!page.contains("chart-0"));
    }
}

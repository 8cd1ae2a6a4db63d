// HTTP request handlers
use crate::domain::catalog::DEFAULT_CHARTS;
use crate::presentation::app_state::AppState;
use crate::presentation::page;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

/// Multi-select values arrive comma-separated. An absent parameter means
/// "use the default"; a present-but-empty one is an empty selection.
#[derive(Deserialize)]
pub struct DashboardQuery {
    pub months: Option<String>,
    pub charts: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard page. Every request is a full recompute: filter the
/// dataset by the selected months, summarize, and lay out the selected charts.
pub async fn show_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let service = &state.dashboard_service;
    let month_options = service.month_options();

    let months = match &query.months {
        Some(raw) => split_selection(raw),
        None => month_options.clone(),
    };
    let charts = match &query.charts {
        Some(raw) => split_selection(raw),
        None => DEFAULT_CHARTS.iter().map(|id| id.to_string()).collect(),
    };

    let dashboard = service.get_dashboard(&months, &charts);
    Html(page::dashboard_page(&dashboard, &month_options, &months, &charts).into_string())
}

fn split_selection(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_selection() {
        assert_eq!(split_selection("Jan,Fev"), vec!["Jan", "Fev"]);
        assert_eq!(split_selection(" Jan , Fev "), vec!["Jan", "Fev"]);
        assert!(split_selection("").is_empty());
        assert!(split_selection(" , ").is_empty());
    }
}

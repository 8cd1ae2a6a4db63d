// Application layer - Use cases over the loaded dataset
pub mod dashboard_service;
pub mod sales_source;

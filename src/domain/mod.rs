// Domain layer - Sales data model and chart catalog
pub mod catalog;
pub mod dashboard;
pub mod sales;

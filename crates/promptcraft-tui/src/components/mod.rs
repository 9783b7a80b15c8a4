pub mod config_panel;
pub mod dashboard;
pub mod result_view;

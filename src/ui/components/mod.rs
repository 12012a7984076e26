pub mod architecture_panel;
pub mod charts;
pub mod chat_area;
pub mod debug_panel;
pub mod infrastructure_panel;
pub mod input_bar;
pub mod monitoring_panel;
pub mod sidebar;

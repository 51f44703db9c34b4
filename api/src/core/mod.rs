pub mod app_state;
pub mod support_system;

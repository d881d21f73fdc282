pub mod history_manager;
pub mod session_controller;

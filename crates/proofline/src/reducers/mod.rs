pub mod app_reducer;
pub mod session_reducer;
pub mod status_bar_reducer;

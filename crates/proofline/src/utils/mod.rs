pub mod clipboard;
pub mod debounce;

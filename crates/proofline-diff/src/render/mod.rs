//! Rendering of aligned segments.

mod markup;

pub use markup::{escape, render_diff_markup, render_plain_markup, ADD_CLASS, DEL_CLASS};

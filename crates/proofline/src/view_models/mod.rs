//! View models - presentation data derived from state
//!
//! Views only draw what these types precompute. The badge and suggestion
//! models also produce the HTML fragments used by the exported report.

mod badges;
mod output;
mod status_bar;
mod suggestions;

pub use badges::BadgeSet;
pub use output::OutputViewModel;
pub use status_bar::StatusBarViewModel;
pub use suggestions::{render_suggestions, suggestion_text, NO_SUGGESTIONS};

//! Rendering of a [`PolicyIndex`](policy_index_scanner::PolicyIndex)
//!
//! Both renderers are pure: they read the index and a [`LabelSet`] and
//! return a `String`. Writing the result is the publisher's job.

mod escape;
pub mod html;
pub mod labels;
pub mod markdown;

pub use html::render_index_html;
pub use labels::LabelSet;
pub use markdown::render_markdown;

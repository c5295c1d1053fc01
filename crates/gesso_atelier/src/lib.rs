//! # gesso_atelier
//!
//! Atelier - The class-to-function workshop for Gesso.
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop. `gesso_atelier` is where a
//! class component is reworked into a function component: it takes the
//! [`ComponentDescriptor`](gesso_croquis::ComponentDescriptor) sketched by
//! `gesso_croquis` and produces a [`RewritePatch`] of minimal text edits.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gesso_atelier::rewrite_component;
//! use gesso_croquis::{collect_components, EligibilityOptions};
//!
//! for descriptor in collect_components(&unit) {
//!     if let Ok(patch) = rewrite_component(&descriptor, &unit, &EligibilityOptions::default()) {
//!         let fixed = patch.apply(source);
//!     }
//! }
//! ```
//!
//! A declined rewrite is an ordinary outcome. Callers report the component
//! without a fix and move on.

mod error;
mod hoist;
mod patch;
mod rewrite;
mod signature;

pub use error::RewriteError;
pub use patch::RewritePatch;
pub use rewrite::rewrite_component;

//! # gesso_croquis
//!
//! Croquis - The semantic analysis layer for Gesso.
//!
//! ## Name Origin
//!
//! **Croquis** (/kʁɔ.ki/) is a French term for a quick, sketchy drawing that captures
//! the essential features of a subject. `gesso_croquis` sketches React components
//! the same way: it does not build its own AST, it reads the one produced by
//! `oxc_parser` and records just enough about each component for the rules and the
//! rewriter to work from.
//!
//! ## Purpose
//!
//! - **Discovery**: find class, function, arrow and `createReactClass` components
//! - **Metadata**: normalize `propTypes`/`defaultProps`/`contextTypes` declarations
//! - **Usage**: classify how a class or factory component uses its instance
//! - **Ordering**: validate declaration order of default props
//!
//! ## Architecture
//!
//! ```text
//!   oxc_parser (Parse)
//!        ↓
//! gesso_croquis (Semantic Analysis)  ← This crate
//!        ↓
//! gesso_atelier (Rewrite)   gesso_patina (Lint)
//! ```

mod discover;
mod keys;
mod unit;

pub mod component;
pub mod metadata;
pub mod ordering;
pub mod usage;

pub use component::{
    ComponentBase, ComponentDescriptor, ComponentKind, ComponentNode, EligibilityOptions,
    Placement,
};
pub use discover::collect_components;
pub use keys::{is_identifier_key, member_property_name, property_key_name};
pub use metadata::{
    extract_metadata, MetadataEntry, MetadataGroup, MetadataKey, MetadataKind, MetadataSource,
};
pub use ordering::{check_ordering, OrderViolation, OrderingOptions};
pub use unit::SourceUnit;
pub use usage::{
    classify_class, classify_factory, render_method, AccessSite, CapabilityFlags, Container,
    ContainerAccess, InstanceUsage, ThisDestructure,
};

//! Error types for gesso_atelier.

use gesso_carton::CompactString;
use thiserror::Error;

/// Reasons a component cannot be rewritten as a function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Only class components are rewritten
    #[error("component is not a class")]
    NotAClass,

    /// Class expression without a name of its own
    #[error("anonymous class cannot be given a function name")]
    AnonymousBinding,

    /// The class relies on instance behaviour a function cannot express
    #[error("component is not eligible for conversion")]
    Ineligible,

    /// No free name could be synthesized for a binding
    #[error("no free name for binding `{name}`")]
    NameCollision { name: CompactString },

    /// A static member that has no equivalent assignment form
    #[error("static member `{name}` cannot be hoisted")]
    UnsupportedStatic { name: CompactString },

    /// Static members of a class expression have no statement to follow
    #[error("static members of a class expression cannot be hoisted")]
    UnplaceableStatics,

    /// The render method has no body, as in an overload signature
    #[error("render method has no body")]
    MissingRenderBody,
}

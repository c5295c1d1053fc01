//! React component rules (eslint-plugin-react compatible).
//!
//! - `react/jsx-sort-default-props` - Enforce alphabetical order of default props
//! - `react/prefer-stateless-function` - Enforce stateless components to be
//!   written as pure functions

mod jsx_sort_default_props;
mod prefer_stateless_function;

pub use jsx_sort_default_props::JsxSortDefaultProps;
pub use prefer_stateless_function::PreferStatelessFunction;

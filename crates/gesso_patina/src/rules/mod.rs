//! Lint rules for React components.

pub mod react;

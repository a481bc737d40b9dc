//! Command line and kubeconfig parsing
//!
//! Splits the invocation into kubesafe's flags and the wrapped command, and
//! resolves which cluster context the wrapped command targets.

pub mod args;
pub mod kubeconfig;

pub use args::{partition, Invocation, WrapperFlags};
pub use kubeconfig::{Kubeconfig, NamespacedContext};

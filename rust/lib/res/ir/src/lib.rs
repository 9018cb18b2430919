//! resgen Intermediate Representation (IR)
//!
//! Plain data structures shared between:
//! - the nib generator (descriptors in, code model out)
//! - the Swift renderer (code model in, source text out)
//! - the `resgen` binary (catalog JSON on disk)
//!
//! Three layers:
//! 1. Types      — module-qualified type references + capabilities
//! 2. Code       — structs, vars, functions, typealiases
//! 3. Descriptor — parsed nib resources

pub mod types;
pub mod code;
pub mod descriptor;

pub use types::*;
pub use code::*;
pub use descriptor::*;

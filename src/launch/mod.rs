// src/launch/mod.rs

//! Launch specification and command assembly.
//!
//! - [`spec`] holds the fluent [`LaunchSpec`] builder collecting per-launch
//!   options.
//! - [`assemble`] owns the command assembly primitives: `PropertySource`,
//!   `add_system_property` and the final `AssembledCommand` shape, plus the
//!   ordering contract the concrete jobs follow.
//! - [`classpath`] builds the child's classpath from a directory of jars.
//! - [`cleanup`] removes per-session temp directories, best effort.

pub mod assemble;
pub mod classpath;
pub mod cleanup;
pub mod spec;

pub use assemble::{add_system_property, AssembledCommand, EnvProperties, PropertySource};
pub use classpath::append_jar_files;
pub use cleanup::delete_temp_dir;
pub use spec::LaunchSpec;

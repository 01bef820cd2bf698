#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod descriptor;
pub mod error;
pub mod service;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use descriptor::naming::{Keyword, check_identifier, to_snake_case};
pub use descriptor::{ErrorDescriptor, ServiceDescriptors};
pub use error::Error;
pub use service::table::{DescriptorTable, TableError};
pub use service::{EXCEPTION_SUFFIX, ServiceError, normalize_wire_code};
pub use types::ErrorContext;

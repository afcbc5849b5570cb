//! Zoneboard timezone tracker - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `zoneboard::` paths.

pub mod component {
    // Re-export core and service modules at the component level
    pub use zoneboard_core::{config, constants, types};
    pub use zoneboard_service::*;

    // Re-export app depot wiring
    pub mod handler {
        pub use zoneboard_app::store_handler::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use zoneboard_app::*;

    pub mod api {
        pub use zoneboard_app::app::api::*;
    }

    pub mod page {
        pub use zoneboard_app::app::page::*;
    }
}

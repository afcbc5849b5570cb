//! Domain core for Zoneboard: the timezone record store, the timezone
//! catalog, and the clock abstraction the store computes times against.

pub mod clock;
pub mod error;
pub mod store;
pub mod tz;

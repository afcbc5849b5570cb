//! HTTP integration tests for the Zoneboard service.

mod page;
mod records;

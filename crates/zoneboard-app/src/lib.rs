//! Salvo HTTP application for Zoneboard: depot wiring, the JSON API, and
//! the server-rendered table page.

pub mod app;
pub mod error;
pub mod store_handler;

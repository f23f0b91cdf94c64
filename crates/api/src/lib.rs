//! HTTP API: routing and request/response mapping over the shop service.
//!
//! Only JSON bodies and redirects are produced; page rendering is left to
//! whatever front end sits in front of these endpoints.

pub mod app;
pub mod middleware;

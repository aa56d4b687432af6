//! Brevet times viewer server.
//!
//! A web front end that runs one of three predefined queries against a
//! remote brevet times API and shows the result as pretty-printed JSON
//! or an HTML table.

pub mod api;
pub mod domain;
pub mod render;
pub mod web;

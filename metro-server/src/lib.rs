//! Next-metro schedule server.
//!
//! A small web service that answers: "when is the next metro at this
//! station?" Arrivals are computed from a fixed headway and a daily service
//! window that wraps past midnight, with trains in the closing tail of the
//! window flagged as last trains.

pub mod config;
pub mod domain;
pub mod schedule;
pub mod stations;
pub mod web;

//! Attendance-State Resolution and Aggregation Engine
//!
//! This crate determines what a calendar day's attendance status *is* for an
//! employee (present, late, absent, medical leave, disciplinary leave,
//! scheduled day-off, no-record) and aggregates those per-day statuses across
//! a population and date range into dashboard-ready metrics.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod resolution;

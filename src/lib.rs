//! Negotiation Analytics - Outcome analytics engine for multi-party negotiations
//!
//! This crate turns structured negotiation state (parties, issues, stated
//! preferences) into decision-support artifacts: Pareto bundle
//! recommendations, ZOPA feasibility intervals, risk-weighted impacts,
//! per-round offer strategies and a draft settlement package.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

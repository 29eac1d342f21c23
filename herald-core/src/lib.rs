//! Herald Core
//!
//! Core types and pure logic for the Herald deployment notifier.
//!
//! This crate contains:
//! - Invocation arguments: the pipeline metadata a CI run hands to the plugin
//! - Domain logic: state/environment normalization, issue key extraction and
//!   the derivation of deployment fields
//! - DTOs: wire types exchanged with the issue tracker's APIs
//!
//! Nothing in here performs I/O.

pub mod args;
pub mod domain;
pub mod dto;

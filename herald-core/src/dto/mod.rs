//! Data Transfer Objects
//!
//! Wire types exchanged with the issue tracker: tenant lookup, token
//! exchange and bulk deployment submission.

pub mod deployment;
pub mod tenant;
pub mod token;

//! In-process coordination layer for an application's lifecycle.
//!
//! The external component manager drives [`state::ApplicationImpl`]; the
//! [`record::RecordStore`] tracks running components by [`token::Token`];
//! [`callbacks`] fans events out to listeners registered by application code.

pub mod api;
pub mod application;
pub mod callbacks;
pub mod config;
pub mod context;
pub mod error;
pub mod info;
pub mod loader;
pub mod logging;
pub mod record;
pub mod state;
pub mod token;

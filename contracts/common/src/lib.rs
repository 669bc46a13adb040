//! Shared pure helpers for the upgrader contract suite.
//!
//! This crate provides:
//! - [`scaling`] — exact integer rescaling of token amounts between assets
//!   of different decimal precisions.
//!
//! Everything here is deterministic arithmetic with no host dependencies, so
//! contracts and test collaborators can share it freely.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod scaling;

pub use scaling::*;

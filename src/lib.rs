//! StayFinder Application Library
//!
//! This library provides the storefront modules for StayFinder: the hotel
//! catalog and the booking wizard.

pub mod modules;

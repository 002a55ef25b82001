#![cfg_attr(not(test), no_std)]

//! parkgate - Embedded access controller for a single-lane parking gate
//!
//! This library provides platform abstraction, peripheral drivers, and the
//! access-control/occupancy state machine for a small parking facility:
//! RFID credential authentication, free-slot tracking from presence sensors,
//! servo barrier actuation, and SMS status notifications to vehicle owners.

// Platform abstraction layer (all hardware access goes through these traits)
pub mod platform;

// Peripheral drivers using platform abstraction
pub mod devices;

// Access-control and occupancy core (platform-agnostic)
pub mod gate;

// Compiled-in configuration: timing constants and the credential table
pub mod parameters;

//! Evelink Hardware Abstraction Layer
//!
//! This crate defines the two hardware boundaries the Evelink driver sits
//! between, so the same driver code runs against real transports (SPI/QSPI
//! bridges) and against deterministic fakes in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Screen composition / application code  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  evelink-driver (channel + loaders)     │
//! └─────────────────────────────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  MemoryPort   │       │  AssetStore   │
//! │ (this crate)  │       │ (this crate)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::MemoryPort`] - Addressed reads/writes into the chip memory map
//! - [`storage::AssetStore`] - Named read-once byte assets (SD card, flash)

#![no_std]
#![deny(unsafe_code)]

pub mod port;
pub mod storage;

// Re-export key traits at crate root for convenience
pub use port::{MemoryPort, TransportError};
pub use storage::{AssetStore, StorageError};

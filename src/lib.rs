//! Taskpad - a terminal to-do list
//!
//! This library provides a single-screen terminal interface for managing a
//! to-do list held in memory: add, toggle, rename, and remove tasks, with an
//! optional duplicate-title guard and delete confirmation. Nothing is
//! persisted; the list starts empty on every launch.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`tasks`] - Task entities and the in-memory task store
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Task entities and the in-memory task store
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the core types for convenient access
pub use tasks::{AddError, Task, TaskId, TaskStore};

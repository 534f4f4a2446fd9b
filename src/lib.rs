//! Background scenes and dialog state for the Free Sports Training landing
//! page.
//!
//! The scene maths, modal state and page content are plain Rust and build
//! on any target; the WebGL and DOM glue only exists on wasm32.

pub mod animator;
pub mod camera;
pub mod config;
pub mod content;
pub mod error;
pub mod modal;
pub mod particles;
pub mod scene;
pub mod viewport;
pub mod wave;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

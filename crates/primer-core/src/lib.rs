//! Primer Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Primer worksheet
//! composer. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Page-space points ([`geometry`] module)
//! - **Draw**: The drawing surface collaborator, draw state, paths, and the
//!   style guard that keeps shared state consistent ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;

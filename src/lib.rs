//! Prompt assembly and response-contract validation for the calm content
//! tools: five form-driven helpers (content direction, engagement signals,
//! hook clarity, message positioning, weekly reflection) backed by a
//! chat-completion API.
//!
//! Each tool pairs a fixed prompt contract with a strict validator for the
//! untrusted text the model returns. Callers get a fully-typed result or a
//! tagged failure; nothing unchecked crosses into typed code.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod telemetry;

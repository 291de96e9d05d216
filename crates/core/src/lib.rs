//! Core library for sandbox-proxy
//!
//! This crate implements the **Functional Core** of the sandbox-proxy application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`sandbox_proxy_core`** (this crate): Pure transformation functions with zero I/O
//! - **`sandbox-proxy`**: HTTP serving, multipart decoding and the outbound backend call
//!
//! Every function here takes plain data and returns plain data. Reading the
//! multipart stream, resolving environment variables and talking to the
//! chat-completion backend all happen in the shell crate.
//!
//! # Module Organization
//!
//! - [`config`]: Backend configuration and default-value resolution
//! - [`submission`]: Ordered form fields, `code` extraction and file collection
//! - [`request`]: Chat-completion request construction
//! - [`types`]: Wire and domain types shared by the modules above
//!
//! # Example Usage
//!
//! ```rust
//! use sandbox_proxy_core::config::ProxyConfig;
//! use sandbox_proxy_core::request::build_chat_request;
//! use sandbox_proxy_core::submission::{FormField, Submission};
//!
//! let submission = Submission::new(vec![FormField::text("code", "print(1+1)")]);
//! let config = ProxyConfig::resolve(None, None, None);
//!
//! let request = build_chat_request(&config, submission.code());
//!
//! assert_eq!(request.model, "llama3");
//! assert_eq!(request.messages[1].content.as_deref(), Some("print(1+1)"));
//! ```

pub mod config;
pub mod request;
pub mod submission;
pub mod types;

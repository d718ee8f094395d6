//! Page controllers for the school portal front end.
//!
//! This crate is compiled to WebAssembly and replaces the portal's page
//! script. It owns five small controllers that react to user events by
//! reading and writing DOM nodes named by id/class conventions. Controllers
//! never hold element references between calls; every handler looks up what
//! it needs and quietly does nothing when the markup is missing.
//!
//! All controller logic is written against the [`dom::Page`] trait, so the
//! same code drives the live document (feature `hydrate`) and the in-memory
//! [`dom::MemoryPage`] used by native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | `Page` trait, in-memory page, and the `web-sys` page |
//! | [`chat`] | Chatbot panel toggle and transcript |
//! | [`email_gate`] | Paid-material email mirror and Gmail gate |
//! | [`nav`] | Mobile navigation drawer |
//! | [`modal`] | Backdrop dialogs and page scroll lock |
//! | [`password`] | Password visibility toggle |
//! | [`events`] | Document-level click/keydown routing |
//! | [`config`] | Element ids, classes, glyphs, and canned text |
//! | [`consts`] | Default values for [`config`] |
//! | [`error`] | Error types |
//! | `web` | `wasm-bindgen` exports (feature `hydrate`) |

pub mod chat;
pub mod config;
pub mod consts;
pub mod dom;
pub mod email_gate;
pub mod error;
pub mod events;
pub mod modal;
pub mod nav;
pub mod password;

#[cfg(feature = "hydrate")]
pub mod web;

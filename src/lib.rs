// SPDX-License-Identifier: MPL-2.0
//! `smart_gallery` is the view engine behind a media gallery front end.
//!
//! It holds the collection fetched from a media server and derives everything
//! the screens show from it: smart albums, a date-bucketed timeline that grows
//! a page at a time, per-day expand state, and a wrapping lightbox cursor.
//! Rendering and transport stay outside; the engine talks to the server
//! through the [`application::port::MediaSource`] port and hands screens
//! render models from [`app::view`].

#![doc(html_root_url = "https://docs.rs/smart_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;

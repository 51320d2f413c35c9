//! This crate contains the page components and their server-side rendering.
//!
//! Each page is a Dioxus component in [`views`]; [`render`] turns one into a full
//! HTML document with `dioxus-ssr`. Pages are plain forms posting back to the
//! server, so nothing here needs a client-side runtime.

pub mod render;
pub mod views;

pub use render::{add_note_page, dashboard_page, login_page, register_page, update_note_page};

//! Open Graph card renderer.
//!
//! Turns a small structured [`domain::request::CardRequest`] into a complete,
//! self-contained HTML document: fonts are inlined as base64 data URIs, icons
//! as raw SVG and the stylesheet as a single `<style>` block. An external
//! headless browser screenshots the result.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;

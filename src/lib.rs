// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together.
//
// Module responsibilities:
// - `state`: the client state and the reducer that moves it between
//   idle, uploading, parsed and failed.
// - `picker`: choosing a local file and reading it into memory.
// - `api`: the HTTP client that posts the file to the parsing service.
// - `uploader`: one upload cycle expressed as state transitions.
// - `render`: what to draw for a state, and drawing it.
// - `ui`: the interactive menu and the one-shot mode.
pub mod api;
pub mod config;
pub mod error;
pub mod picker;
pub mod render;
pub mod state;
pub mod ui;
pub mod uploader;

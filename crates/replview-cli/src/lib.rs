// NOTE: replview CLI Rationale
//
// Why JSON input?
// - The presenters need a value graph to work on, and JSON is the cheapest
//   way to hand one to a binary
// - JSON objects map onto plain objects (`stdClass` by default); `@class`
//   names the class explicitly
//
// Why present in Plain mode when color is off (not strip Color markup)?
// - Plain output is a stable, bit-exact format of its own
// - Color markup is rendered to ANSI only at the terminal boundary

mod args;
mod commands;
pub mod config;
pub mod convert;
pub mod render;

pub use args::{Cli, ColorChoice, LogLevel};
pub use commands::run;

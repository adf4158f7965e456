//! Static assets served by the website, embedded at build time.
//!
//! The build script walks the `assets/` directory and generates one string
//! constant per file, nested in modules mirroring the directory structure
//! (e.g. [`css::STYLE_CSS`], [`js::MAIN_JS`]).

include!(env!("ASSETS"));

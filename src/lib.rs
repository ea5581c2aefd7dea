//! # qrgen
//!
//! Command-line QR code generation driven by a validated encoder
//! configuration. The crate turns user-facing parameters (desired error
//! tolerance percentage, explicit symbol version, box/border sizing,
//! renderer backend, colors) into an internally consistent configuration,
//! then drives the encode, render and persist sequence. Symbol encoding is
//! delegated to the `qrcode` crate and image persistence to the `image`
//! crate.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use qrgen::{output, render, ECLevel, RenderSpec, SymbolBuilder};
//!
//! # fn main() -> qrgen::Result<()> {
//! // Map a desired error tolerance to a correction level
//! let (level, _advisory) = ECLevel::from_percent(25)?;
//!
//! // Encode with the smallest version that fits the payload
//! let symbol = SymbolBuilder::new("Hello, world!").ec_level(level).build()?;
//!
//! // Render with the default colorable raster backend and persist
//! let (image, _advisories) = render::select_and_render(&symbol, &RenderSpec::default())?;
//! output::write(&image, Path::new("hello.png"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Renderer backends
//!
//! Selecting a backend by name (`svg`, `svgpath`, `svgfill`, `png`) renders
//! through that backend and ignores any explicit colors, surfacing an
//! [`Advisory`]; an unknown name falls back to the default colorable raster
//! renderer.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use qrgen::{output, render, RenderSpec, SymbolBuilder, SymbolVersion};
//!
//! # fn main() -> qrgen::Result<()> {
//! let symbol = SymbolBuilder::new("Hello, world!")
//!     .version(SymbolVersion::new(3)?) // fixed version: no auto-fit
//!     .box_size(8)
//!     .border(4)
//!     .build()?;
//!
//! let spec = RenderSpec { backend: Some("svgpath".into()), ..RenderSpec::default() };
//! let (image, advisories) = render::select_and_render(&symbol, &spec)?;
//! for advisory in &advisories {
//!     eprintln!("{advisory}");
//! }
//! output::write(&image, Path::new("hello.svg"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::{EncodedSymbol, EncoderConfig, SymbolBuilder, MIN_BORDER};
pub use error::{Error, Result};
pub use render::{RenderSpec, RenderedImage, Renderer};
pub use types::{Advisory, Backend, ECLevel, SymbolVersion};

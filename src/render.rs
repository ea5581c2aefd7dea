use image::{DynamicImage, ImageBuffer, Luma, Pixel, Rgb};
use qrcode::Color;

use crate::config::EncodedSymbol;
use crate::error::{Error, Result};
use crate::types::{Advisory, Backend};

// Render spec
//------------------------------------------------------------------------------

/// User-facing rendering parameters, prior to backend resolution.
///
/// A named backend and explicit colors are mutually exclusive in effect: if
/// the name resolves, the colors are ignored and an advisory is surfaced.
#[derive(Debug, Default, Clone)]
pub struct RenderSpec {
    pub backend: Option<String>,
    pub fill_color: Option<String>,
    pub back_color: Option<String>,
}

// Renderer selection
//------------------------------------------------------------------------------

/// Resolved renderer choice.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Renderer {
    /// Explicitly named backend; colors do not apply.
    Named(Backend),
    /// Default colorable raster renderer.
    Default { fill_color: Option<String>, back_color: Option<String> },
}

/// Chooses a renderer for the spec.
///
/// Total over all inputs: a resolved name wins, an unknown name falls back
/// to the default path with an advisory, no name is the default path.
pub fn select(spec: &RenderSpec) -> (Renderer, Vec<Advisory>) {
    let mut advisories = Vec::new();
    if let Some(name) = &spec.backend {
        match Backend::from_name(name) {
            Some(backend) => {
                if spec.fill_color.is_some() || spec.back_color.is_some() {
                    advisories.push(Advisory::ColorsIgnored { backend });
                }
                return (Renderer::Named(backend), advisories);
            }
            None => advisories.push(Advisory::UnknownBackend { name: name.clone() }),
        }
    }
    let renderer = Renderer::Default {
        fill_color: spec.fill_color.clone(),
        back_color: spec.back_color.clone(),
    };
    (renderer, advisories)
}

// Rendered image
//------------------------------------------------------------------------------

/// Output of a renderer, ready to be persisted.
#[derive(Debug)]
pub enum RenderedImage {
    Raster(DynamicImage),
    Vector(String),
}

/// Renders the symbol with the backend resolved from `spec`.
pub fn select_and_render(
    symbol: &EncodedSymbol,
    spec: &RenderSpec,
) -> Result<(RenderedImage, Vec<Advisory>)> {
    let (renderer, advisories) = select(spec);
    let image = match renderer {
        Renderer::Named(Backend::Svg) => RenderedImage::Vector(svg_rects(symbol, false)),
        Renderer::Named(Backend::SvgFill) => RenderedImage::Vector(svg_rects(symbol, true)),
        Renderer::Named(Backend::SvgPath) => RenderedImage::Vector(svg_path(symbol)),
        Renderer::Named(Backend::Png) => {
            RenderedImage::Raster(DynamicImage::ImageLuma8(raster(symbol, BLACK, WHITE)))
        }
        Renderer::Default { fill_color, back_color } => {
            let fill = match fill_color {
                Some(color) => parse_color(&color)?,
                None => Rgb([0, 0, 0]),
            };
            let back = match back_color {
                Some(color) => parse_color(&color)?,
                None => Rgb([255, 255, 255]),
            };
            RenderedImage::Raster(DynamicImage::ImageRgb8(raster(symbol, fill, back)))
        }
    };
    Ok((image, advisories))
}

// Raster surface
//------------------------------------------------------------------------------

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// Scales each module to `box_size` pixels and pads `border` module-widths
/// of light quiet zone on every side.
fn raster<P: Pixel + 'static>(
    symbol: &EncodedSymbol,
    dark: P,
    light: P,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let box_size = symbol.config().box_size;
    let border = symbol.config().border as i64;
    let width = symbol.width() as i64;
    let size = (width + 2 * border) as u32 * box_size;
    let modules = symbol.modules();

    ImageBuffer::from_fn(size, size, |x, y| {
        let c = i64::from(x / box_size) - border;
        let r = i64::from(y / box_size) - border;
        if (0..width).contains(&r) && (0..width).contains(&c) {
            modules[(r * width + c) as usize].select(dark, light)
        } else {
            light
        }
    })
}

// Vector surfaces
//------------------------------------------------------------------------------

fn svg_header(symbol: &EncodedSymbol) -> String {
    let dimension = symbol.width() as u32 + 2 * symbol.config().border;
    let pixels = dimension * symbol.config().box_size;
    let mut out = String::new();
    out += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    out += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{pixels}\" height=\"{pixels}\" viewBox=\"0 0 {dimension} {dimension}\" stroke=\"none\">\n"
    );
    out
}

fn dark_modules(symbol: &EncodedSymbol) -> Vec<(i64, i64)> {
    let width = symbol.width() as i64;
    symbol
        .modules()
        .iter()
        .enumerate()
        .filter(|(_, m)| **m == Color::Dark)
        .map(|(i, _)| (i as i64 / width, i as i64 % width))
        .collect()
}

/// One rect per dark module, optionally over a solid light background.
fn svg_rects(symbol: &EncodedSymbol, background: bool) -> String {
    let border = symbol.config().border as i64;
    let mut out = svg_header(symbol);
    if background {
        out += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    }
    for (r, c) in dark_modules(symbol) {
        out += &format!(
            "\t<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"#000000\"/>\n",
            c + border,
            r + border
        );
    }
    out += "</svg>\n";
    out
}

/// All dark modules as a single path over a solid light background.
fn svg_path(symbol: &EncodedSymbol) -> String {
    let border = symbol.config().border as i64;
    let mut out = svg_header(symbol);
    out += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    out += "\t<path d=\"";
    for (i, (r, c)) in dark_modules(symbol).iter().enumerate() {
        if i != 0 {
            out += " ";
        }
        out += &format!("M{},{}h1v1h-1z", c + border, r + border);
    }
    out += "\" fill=\"#000000\"/>\n";
    out += "</svg>\n";
    out
}

// Color parsing
//------------------------------------------------------------------------------

/// Parses an HTML color name or a `#rgb`/`#rrggbb` hex spec.
fn parse_color(spec: &str) -> Result<Rgb<u8>> {
    let lowered = spec.trim().to_ascii_lowercase();
    let named = match lowered.as_str() {
        "black" => Some([0, 0, 0]),
        "white" => Some([255, 255, 255]),
        "red" => Some([255, 0, 0]),
        "lime" => Some([0, 255, 0]),
        "blue" => Some([0, 0, 255]),
        "green" => Some([0, 128, 0]),
        "yellow" => Some([255, 255, 0]),
        "cyan" | "aqua" => Some([0, 255, 255]),
        "magenta" | "fuchsia" => Some([255, 0, 255]),
        "gray" | "grey" => Some([128, 128, 128]),
        "silver" => Some([192, 192, 192]),
        "maroon" => Some([128, 0, 0]),
        "olive" => Some([128, 128, 0]),
        "navy" => Some([0, 0, 128]),
        "teal" => Some([0, 128, 128]),
        "purple" => Some([128, 0, 128]),
        "orange" => Some([255, 165, 0]),
        _ => None,
    };
    if let Some(rgb) = named {
        return Ok(Rgb(rgb));
    }
    if let Some(hex) = lowered.strip_prefix('#') {
        let channels = match hex.len() {
            3 => hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
                .collect::<Option<Vec<_>>>(),
            6 if hex.is_ascii() => (0..3)
                .map(|i| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok())
                .collect::<Option<Vec<_>>>(),
            _ => None,
        };
        if let Some(channels) = channels {
            return Ok(Rgb([channels[0], channels[1], channels[2]]));
        }
    }
    Err(Error::InvalidParameter(format!("unrecognized color '{spec}'")))
}



#[cfg(test)]
mod color_tests {
    use image::Rgb;
    use test_case::test_case;

    use super::parse_color;

    #[test_case("black", [0, 0, 0])]
    #[test_case("white", [255, 255, 255])]
    #[test_case("ORANGE", [255, 165, 0])]
    #[test_case(" grey ", [128, 128, 128])]
    #[test_case("#abc", [0xaa, 0xbb, 0xcc])]
    #[test_case("#1A2b3C", [0x1a, 0x2b, 0x3c])]
    #[test_case("#000000", [0, 0, 0])]
    fn test_parse_color(spec: &str, expected: [u8; 3]) {
        assert_eq!(parse_color(spec).unwrap(), Rgb(expected));
    }

    #[test_case("")]
    #[test_case("blurple")]
    #[test_case("#12")]
    #[test_case("#12345")]
    #[test_case("#gggggg")]
    fn test_parse_color_rejects(spec: &str) {
        assert!(parse_color(spec).is_err());
    }
}

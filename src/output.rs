use std::fs;
use std::path::Path;

use image::ImageError;

use crate::error::{Error, Result};
use crate::render::RenderedImage;

// Output writer
//------------------------------------------------------------------------------

/// Persists a rendered image at `path` and prints a confirmation line.
///
/// I/O failures map to [`Error::Storage`]. Any other failure out of the image
/// collaborator means the image object itself was built inconsistently and
/// maps to [`Error::RenderData`].
pub fn write(image: &RenderedImage, path: &Path) -> Result<()> {
    match image {
        RenderedImage::Raster(img) => img.save(path).map_err(|e| match e {
            ImageError::IoError(source) => Error::Storage { path: path.to_path_buf(), source },
            other => Error::RenderData(other.to_string()),
        })?,
        RenderedImage::Vector(text) => fs::write(path, text)
            .map_err(|source| Error::Storage { path: path.to_path_buf(), source })?,
    }
    println!("Successfully wrote QR code to file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod writer_tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use super::write;
    use crate::config::SymbolBuilder;
    use crate::error::Error;
    use crate::render::{select_and_render, RenderSpec};

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("qrgen-writer-{}-{name}", std::process::id()))
    }

    fn render(backend: Option<&str>) -> crate::render::RenderedImage {
        let symbol = SymbolBuilder::new("HELLO").box_size(2).build().unwrap();
        let spec = RenderSpec { backend: backend.map(str::to_string), ..RenderSpec::default() };
        select_and_render(&symbol, &spec).unwrap().0
    }

    #[test]
    fn test_write_raster() {
        let path = temp_path("raster.png");
        write(&render(None), &path).unwrap();
        assert!(path.exists());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_vector() {
        let path = temp_path("vector.svg");
        write(&render(Some("svgpath")), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<?xml"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_directory_is_storage_error() {
        let path = temp_path("no-such-dir").join("qr.png");
        let err = write(&render(None), &path).unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
        assert!(err.to_string().contains("no-such-dir"));
    }

    #[test]
    fn test_unsupported_extension_is_render_data_error() {
        let path = temp_path("raster.notaformat");
        let err = write(&render(None), &path).unwrap_err();
        assert!(matches!(err, Error::RenderData(_)));
    }
}

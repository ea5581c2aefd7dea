use std::env;
use std::fs;
use std::path::PathBuf;

use qrgen::{output, render, Advisory, Backend, ECLevel, Error, RenderSpec, SymbolBuilder};

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("qrgen-roundtrip-{}-{name}", std::process::id()))
}

#[test]
fn test_roundtrip_default_backend() {
    let (level, advisory) = ECLevel::from_percent(25).unwrap();
    assert_eq!(level, ECLevel::Q);
    assert!(advisory.is_none());

    let symbol = SymbolBuilder::new("HELLO").ec_level(level).build().unwrap();
    assert_eq!(symbol.version(), 1);

    let (image, advisories) = render::select_and_render(&symbol, &RenderSpec::default()).unwrap();
    assert!(advisories.is_empty());

    let path = temp_path("default.png");
    output::write(&image, &path).unwrap();
    assert!(path.exists());
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_roundtrip_named_backend_with_colors() {
    let symbol = SymbolBuilder::new("HELLO").build().unwrap();
    let spec = RenderSpec {
        backend: Some("svg".to_string()),
        fill_color: Some("red".to_string()),
        back_color: None,
    };
    let (image, advisories) = render::select_and_render(&symbol, &spec).unwrap();
    assert_eq!(advisories, vec![Advisory::ColorsIgnored { backend: Backend::Svg }]);

    let path = temp_path("named.svg");
    output::write(&image, &path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("<svg"));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_repeated_renders_write_identical_files() {
    let symbol = SymbolBuilder::new("HELLO").box_size(3).build().unwrap();
    let spec = RenderSpec::default();

    let first = temp_path("idempotent-1.png");
    let second = temp_path("idempotent-2.png");
    let (image, _) = render::select_and_render(&symbol, &spec).unwrap();
    output::write(&image, &first).unwrap();
    let (image, _) = render::select_and_render(&symbol, &spec).unwrap();
    output::write(&image, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    fs::remove_file(&first).unwrap();
    fs::remove_file(&second).unwrap();
}

#[test]
fn test_write_failure_names_path() {
    let symbol = SymbolBuilder::new("HELLO").build().unwrap();
    let (image, _) = render::select_and_render(&symbol, &RenderSpec::default()).unwrap();

    let path = temp_path("missing-dir").join("qr.png");
    let err = output::write(&image, &path).unwrap_err();
    assert!(matches!(err, Error::Storage { .. }));
    assert!(err.to_string().contains("missing-dir"));
}

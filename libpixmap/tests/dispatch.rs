use libpixmap::{Error, Format};

#[test]
fn known_extensions_resolve_to_their_codec() {
    assert_eq!(Format::from_path("sample.bmp").unwrap(), Format::Bmp);
    assert_eq!(Format::from_path("sample.ppm").unwrap(), Format::Ppm);
    assert_eq!(Format::from_path("photo.jpg").unwrap(), Format::Jpeg);
    assert_eq!(Format::from_path("photo.jpeg").unwrap(), Format::Jpeg);
}

#[test]
fn extension_match_is_case_sensitive() {
    assert!(matches!(
        Format::from_path("photo.JPG"),
        Err(Error::UnrecognizedExtension(_))
    ));
    assert!(matches!(
        Format::from_path("sample.Bmp"),
        Err(Error::UnrecognizedExtension(_))
    ));
}

#[test]
fn unknown_or_missing_extensions_are_unrecognized() {
    for path in ["notes.txt", "archive.tar.gz", "no_extension", ".bmp"] {
        assert!(
            matches!(
                Format::from_path(path),
                Err(Error::UnrecognizedExtension(_))
            ),
            "{path}"
        );
    }
}

use read_tail::Error;

use super::*;

#[test]
fn missing_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.log");

    assert!(matches!(Tail::open(&path), Err(Error::NotFound(p)) if p == path));
}

#[test]
fn unsupported_encoding() {
    let file = file_with(b"a\n");
    let result = TailBuilder::new().encoding("utf-42").open(file.path());

    assert!(matches!(result, Err(Error::UnsupportedEncoding(label)) if label == "utf-42"));
}

#[test]
fn invalid_arguments() {
    let file = file_with(b"a\n");

    assert!(matches!(
        TailBuilder::new().nlines(0).open(file.path()),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        TailBuilder::new().window_size(0).open(file.path()),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        TailBuilder::new().delimiter("").open(file.path()),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn decode_error_surfaces_with_its_chunk() {
    // the broken line is only part of the second chunk
    let file = file_with(b"\xC3\x28\nfine\nalso fine\n");
    let mut tail = tail_of(&file, 2, 4);

    assert_eq!(tail.next().unwrap().unwrap(), vec!["fine", "also fine"]);
    assert!(matches!(
        tail.next(),
        Some(Err(Error::Decode { encoding: "UTF-8" }))
    ));
    assert!(tail.next().is_none());
}

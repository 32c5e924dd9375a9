use std::time::{Duration, Instant};

use rstest::rstest;

use super::*;

#[test]
fn small_file_num_chunks() {
    let file = file_with(thirty_lines().as_bytes());
    let chunks = collect(tail_of(&file, 10, 64));

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].first().map(String::as_str), Some("#2 first line"));
    assert_eq!(chunks[0].last().map(String::as_str), Some("#2 tenth line"));
    assert_eq!(chunks[2].first().map(String::as_str), Some("#0 first line"));
}

#[test]
fn defaults() {
    let file = file_with(thirty_lines().as_bytes());
    let tail = Tail::open(file.path()).unwrap();

    assert_eq!(tail.nlines(), 10);
    assert_eq!(tail.window_size(), tail.file_size());
    assert_eq!(collect(tail).len(), 3);
}

#[rstest]
#[case(b"a\nb\nc\nd\ne\n", 2, 4, &[&["d", "e"][..], &["b", "c"], &["a"]])]
#[case(b"x\ny\nz", 10, 1024, &[&["x", "y", "z"][..]])]
#[case(b"x\ny\nz", 1, 1, &[&["z"][..], &["y"], &["x"]])]
#[case(b"one line", 3, 2, &[&["one line"][..]])]
#[case(b"\n\n\n", 2, 1, &[&["", ""][..], &[""]])]
#[case(b"a\n\nb\n", 3, 2, &[&["a", "", "b"][..]])]
#[case(b"\xEF\xBB\xBFa\nb\n", 10, 2, &[&["a", "b"][..]])]
#[case(b"a\n\xEF\xBB\xBFb", 1, 3, &[&["\u{feff}b"][..], &["a"]])]
fn emitted_chunks(
    #[case] content: &[u8],
    #[case] nlines: usize,
    #[case] window_size: usize,
    #[case] expected: &[&[&str]],
) {
    let file = file_with(content);

    assert_eq!(collect(tail_of(&file, nlines, window_size)), expected);
}

#[test]
fn empty_file_yields_no_chunk() {
    let file = file_with(b"");
    let mut tail = tail_of(&file, 10, 1024);

    assert!(tail.next().is_none());
    assert!(tail.is_closed());
}

#[test]
fn windows_crlf_export() {
    let content = "ip,timestamp\r\n\"10.0.0.1\",\"2017-11-22\"\r\n\"10.0.0.2\",\"2017-11-23\"\r\n";
    let file = file_with(content.as_bytes());
    let tail = TailBuilder::new()
        .nlines(2)
        .window_size(5)
        .delimiter("\r\n")
        .open(file.path())
        .unwrap();

    assert_eq!(
        collect(tail),
        vec![
            vec!["\"10.0.0.1\",\"2017-11-22\"", "\"10.0.0.2\",\"2017-11-23\""],
            vec!["ip,timestamp"],
        ]
    );
}

#[test]
fn latin1_file() {
    let file = file_with(b"caf\xE9\nna\xEFve\n");
    let tail = TailBuilder::new()
        .nlines(1)
        .window_size(3)
        .encoding("latin1")
        .open(file.path())
        .unwrap();

    assert_eq!(collect(tail), vec![vec!["naïve"], vec!["café"]]);
}

#[test]
fn stop_closes_the_file() {
    let file = file_with(thirty_lines().as_bytes());
    let mut tail = tail_of(&file, 5, 16);

    assert_eq!(tail.next().unwrap().unwrap().len(), 5);
    tail.stop();

    assert!(tail.is_closed());
    assert!(tail.get_ref().is_none());
    assert!(matches!(tail.next(), Some(Err(read_tail::Error::AlreadyClosed))));
    assert!(tail.next().is_none());
}

#[test]
fn long_line_in_small_windows() {
    let mut content = vec![b'x'; 4 << 20];
    content.push(b'\n');
    let file = file_with(&content);

    let started = Instant::now();
    let chunks = collect(tail_of(&file, 10, 1024));

    // several minutes if the fragment gets copied or searched again on every window
    assert!(started.elapsed() < Duration::from_secs(20));
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 1);
    assert_eq!(chunks[0][0].len(), 4 << 20);
}

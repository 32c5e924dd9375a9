use std::io::Write;

use read_tail::{Tail, TailBuilder};
use tempfile::NamedTempFile;

mod chunks;
mod errors;
mod round_trip;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn file_with(content: &[u8]) -> NamedTempFile {
    init_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn collect(tail: Tail) -> Vec<Vec<String>> {
    tail.map(|chunk| chunk.unwrap()).collect()
}

fn tail_of(file: &NamedTempFile, nlines: usize, window_size: usize) -> Tail {
    TailBuilder::new()
        .nlines(nlines)
        .window_size(window_size)
        .open(file.path())
        .unwrap()
}

/// Thirty lines, in three blocks of ten.
fn thirty_lines() -> String {
    let ordinals = [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
        "tenth",
    ];

    let mut content = String::new();
    for block in 0..3 {
        for ordinal in ordinals {
            content.push_str(&format!("#{} {} line\n", block, ordinal));
        }
    }
    content
}

use read_tail::TailBuilder;

// cargo run --example tail_file -- <path> [nlines] [window size]
fn main() -> read_tail::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: tail_file <path> [nlines] [window size]");
        std::process::exit(2);
    };
    let nlines = args.next().and_then(|n| n.parse().ok()).unwrap_or(10);
    let window_size = args.next().and_then(|n| n.parse().ok()).unwrap_or(1024);

    let tail = TailBuilder::new()
        .nlines(nlines)
        .window_size(window_size)
        .open(path)?;

    // chunks come from the end of the file, the lines inside of them don't
    for (i, chunk) in tail.enumerate() {
        println!("== chunk {} ==", i);
        for line in chunk? {
            println!("{}", line);
        }
    }
    Ok(())
}

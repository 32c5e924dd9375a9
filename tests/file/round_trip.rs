use proptest::prelude::*;

use super::*;

/// Lines without the delimiter, blank ones included.
fn arb_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zäö€ ]{0,6}", 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Putting the chunks back together in reverse gives back the file's lines.
    #[test]
    fn chunks_rebuild_the_file(
        lines in arb_lines(),
        trailing in any::<bool>(),
        nlines in 1usize..6,
        window_size in 1usize..20,
    ) {
        let mut content = lines.join("\n");
        if trailing && !lines.is_empty() {
            content.push('\n');
        }
        let file = file_with(content.as_bytes());

        let chunks = collect(tail_of(&file, nlines, window_size));

        let rebuilt: Vec<String> = chunks.iter().rev().flatten().cloned().collect();
        // without a trailing delimiter a blank last line looks like the file's own terminator
        let mut expected = lines.clone();
        if !trailing && expected.last().is_some_and(String::is_empty) {
            expected.pop();
        }
        prop_assert_eq!(&rebuilt, &expected);

        prop_assert_eq!(chunks.len(), expected.len().div_ceil(nlines));
        for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
            prop_assert_eq!(chunk.len(), nlines);
        }
    }
}

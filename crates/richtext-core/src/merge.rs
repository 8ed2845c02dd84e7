//! Post-processing passes over top-level content

use crate::ast::Block;

/// Merge runs of consecutive block quotes into one.
///
/// Content is concatenated in order into the first quote of each run.
/// Any other block ends the run. Nested quotes are left alone.
pub fn merge_adjacent_blockquotes(blocks: Vec<Block>) -> Vec<Block> {
    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::BlockQuote(content) => match merged.last_mut() {
                Some(Block::BlockQuote(previous)) => previous.extend(content),
                _ => merged.push(Block::BlockQuote(content)),
            },
            other => merged.push(other),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Inline;

    fn quote(texts: &[&str]) -> Block {
        Block::BlockQuote(
            texts
                .iter()
                .map(|t| Block::Paragraph(vec![Inline::text(*t)]))
                .collect(),
        )
    }

    #[test]
    fn test_merges_consecutive_quotes() {
        let result = merge_adjacent_blockquotes(vec![quote(&["a"]), quote(&["b", "c"])]);
        assert_eq!(result, vec![quote(&["a", "b", "c"])]);
    }

    #[test]
    fn test_other_block_resets_run() {
        let result = merge_adjacent_blockquotes(vec![
            quote(&["a"]),
            Block::Hr,
            quote(&["b"]),
            quote(&["c"]),
        ]);
        assert_eq!(result, vec![quote(&["a"]), Block::Hr, quote(&["b", "c"])]);
    }

    #[test]
    fn test_without_quotes_is_unchanged() {
        let blocks = vec![Block::Paragraph(vec![Inline::text("x")]), Block::Hr];
        assert_eq!(merge_adjacent_blockquotes(blocks.clone()), blocks);
    }

    #[test]
    fn test_nested_quotes_are_not_merged() {
        let nested = Block::BlockQuote(vec![quote(&["a"]), quote(&["b"])]);
        let result = merge_adjacent_blockquotes(vec![nested.clone()]);
        assert_eq!(result, vec![nested]);
    }
}

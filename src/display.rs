use std::fmt::{self, Write};
use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::{Antecedent, ParseTree, Position};

struct Mark {
    words: Range<usize>,
    label: String,
}

/// Renders the words of one sentence with underlined nodes below them.
///
/// ```text
/// John  said  Mary  likes  him
/// ╰──╯NP (0) antecedent
///                          ╰─╯PRP (1, 1, 0, 1, 1, 0) pronoun
/// ```
pub struct ResolutionDisplay<'a> {
    tree: &'a ParseTree,
    marks: Vec<Mark>,
}

impl<'a> ResolutionDisplay<'a> {
    pub fn new(tree: &'a ParseTree) -> Self {
        Self {
            tree,
            marks: Vec::new(),
        }
    }

    /// Underline the node at `pos` with `name`. Positions outside the tree
    /// are ignored.
    pub fn mark(&mut self, pos: &Position, name: &str) -> &mut Self {
        if let (Some(words), Some(node)) = (self.tree.leaf_span(pos), self.tree.node(pos)) {
            if !words.is_empty() {
                self.marks.push(Mark {
                    words,
                    label: format!("{} {} {}", node.label(), pos, name),
                });
            }
        }
        self
    }

    /// Underline the antecedent if it belongs to this sentence.
    pub fn mark_antecedent(&mut self, antecedent: &Antecedent<'_>) -> &mut Self {
        if std::ptr::eq(antecedent.tree, self.tree) {
            self.mark(&antecedent.position, "antecedent");
        }
        self
    }
}

impl<'a> fmt::Display for ResolutionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut word_start_col = Vec::new();
        let mut word_end_col = Vec::new();

        let mut opening_line = String::new();
        for (i, word) in self.tree.leaves().into_iter().enumerate() {
            if i > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            word_start_col.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(word);
            word_end_col.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for mark in &self.marks {
            f.write_char('\n')?;

            let start_col = word_start_col[mark.words.start];
            let end_col = word_end_col[mark.words.end - 1];
            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&mark.label)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underlines_marked_nodes() {
        let tree: ParseTree = "(S (NP (NNP John)) (VP (VBD saw) (NP (DT a) (NN hat))))"
            .parse()
            .unwrap();
        let mut display = ResolutionDisplay::new(&tree);
        display
            .mark(&Position::from([1, 1]), "antecedent")
            .mark(&Position::from([0, 0]), "head");

        insta::assert_snapshot!(display, @r###"
        John  saw  a  hat
                   ╰────╯NP (1, 1) antecedent
        ╰──╯NNP (0, 0) head
        "###);
    }

    #[test]
    fn single_width_word() {
        let tree: ParseTree = "(S (NP (PRP I)) (VP (VBD left)))".parse().unwrap();
        let mut display = ResolutionDisplay::new(&tree);
        display.mark(&Position::from([0]), "x");

        insta::assert_snapshot!(display, @r###"
        I  left
        ╰NP (0) x
        "###);
    }

    #[test]
    fn ignores_positions_outside_tree() {
        let tree: ParseTree = "(S (NP (PRP I)))".parse().unwrap();
        let mut display = ResolutionDisplay::new(&tree);
        display.mark(&Position::from([3]), "missing");
        assert_eq!(display.to_string(), "I");
    }
}

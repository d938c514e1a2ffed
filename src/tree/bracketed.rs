//! Reader for Penn Treebank style bracketed notation.
//!
//! `(S (NP (NNP John)) (VP (VBD left)))`: an opening bracket, a label, then
//! any mix of nested nodes and words. Whitespace between tokens is free.

use super::{Child, ParseTree};
use crate::TreeParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

fn tokenize(input: &str) -> Vec<(usize, Token<'_>)> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '(' => tokens.push((offset, Token::Open)),
            ')' => tokens.push((offset, Token::Close)),
            c if c.is_whitespace() => {}
            _ => {
                let mut end = offset + ch.len_utf8();
                while let Some(&(next_offset, next)) = chars.peek() {
                    if next == '(' || next == ')' || next.is_whitespace() {
                        break;
                    }
                    end = next_offset + next.len_utf8();
                    chars.next();
                }
                tokens.push((offset, Token::Atom(&input[offset..end])));
            }
        }
    }

    tokens
}

struct Reader<'a> {
    tokens: Vec<(usize, Token<'a>)>,
    cursor: usize,
    input_len: usize,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<(usize, Token<'a>)> {
        self.tokens.get(self.cursor).copied()
    }

    fn bump(&mut self) -> Option<(usize, Token<'a>)> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn tree(&mut self) -> Result<ParseTree, TreeParseError> {
        let open = match self.bump() {
            Some((offset, Token::Open)) => offset,
            Some((offset, _)) => return Err(TreeParseError::new(offset, "expected '('")),
            None => {
                return Err(TreeParseError::new(
                    self.input_len,
                    "expected '(', found end of input",
                ))
            }
        };

        let label = match self.peek() {
            Some((_, Token::Atom(label))) => {
                self.cursor += 1;
                Some(label)
            }
            _ => None,
        };

        let mut children = Vec::new();
        loop {
            match self.peek() {
                Some((_, Token::Close)) => {
                    self.cursor += 1;
                    break;
                }
                Some((_, Token::Open)) => children.push(Child::Tree(self.tree()?)),
                Some((_, Token::Atom(word))) => {
                    self.cursor += 1;
                    children.push(Child::Leaf(word.to_string()));
                }
                None => return Err(TreeParseError::new(open, "unclosed '('")),
            }
        }

        match label {
            Some(label) => Ok(ParseTree::new(label, children)),
            // `( (S ...) )` wrapper emitted by treebank tools
            None => {
                let mut children = children.into_iter();
                match (children.next(), children.next()) {
                    (Some(Child::Tree(tree)), None) => Ok(tree),
                    _ => Err(TreeParseError::new(open, "node has no label")),
                }
            }
        }
    }
}

pub(super) fn parse(input: &str) -> Result<ParseTree, TreeParseError> {
    let mut reader = Reader {
        tokens: tokenize(input),
        cursor: 0,
        input_len: input.len(),
    };

    let tree = reader.tree()?;

    if let Some((offset, _)) = reader.peek() {
        return Err(TreeParseError::new(
            offset,
            "unexpected input after the closing bracket",
        ));
    }

    Ok(tree)
}

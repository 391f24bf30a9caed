/*! Bracketed constituency trees.

Trees are stored as an arena of nodes in pre-order, addressed by [NodeId].
Two structurally identical subtrees are still two different nodes: identity is the [NodeId], not the content.
!*/
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Handle to a node of a [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    label: String,
    children: Vec<NodeId>,
}

/// Errors raised while reading a bracketed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    Empty,
    Unbalanced { pos: usize },
    UnexpectedToken { token: String, pos: usize },
    TrailingContent { pos: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Empty => write!(f, "empty tree"),
            TreeError::Unbalanced { pos } => write!(f, "unbalanced brackets at byte {}", pos),
            TreeError::UnexpectedToken { token, pos } => {
                write!(f, "unexpected token {:?} at byte {}", token, pos)
            }
            TreeError::TrailingContent { pos } => {
                write!(f, "trailing content after tree at byte {}", pos)
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// A constituency tree, with words as leaves.
///
/// (De)serializes from/to its bracketed (Penn Treebank) representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tree {
    nodes: Vec<Node>,
    // number of leaves under each node, indexed like `nodes`
    leaves: Vec<usize>,
    root: NodeId,
}

impl Tree {
    fn from_nodes(nodes: Vec<Node>, root: NodeId) -> Self {
        // children always come after their parent in pre-order,
        // so a reverse walk sees every child before its parent.
        let mut leaves = vec![0; nodes.len()];
        for (idx, node) in nodes.iter().enumerate().rev() {
            leaves[idx] = if node.children.is_empty() {
                1
            } else {
                node.children.iter().map(|c| leaves[c.0]).sum()
            };
        }
        Self {
            nodes,
            leaves,
            root,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes (internal nodes and leaves).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.nodes[node.0].label
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes[node.0].children.is_empty()
    }

    /// Number of leaves under `node`. A leaf counts itself.
    pub fn leaf_count(&self, node: NodeId) -> usize {
        self.leaves[node.0]
    }

    fn render(&self, node: NodeId, out: &mut String) {
        if self.is_leaf(node) && node != self.root {
            out.push_str(self.label(node));
            return;
        }
        out.push('(');
        out.push_str(self.label(node));
        for child in self.children(node) {
            out.push(' ');
            self.render(*child, out);
        }
        out.push(')');
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme<'a> {
    Open,
    Close,
    Atom(&'a str),
}

fn lex(s: &str) -> Vec<(usize, Lexeme<'_>)> {
    let mut lexemes = Vec::new();
    let mut atom_start: Option<usize> = None;
    for (pos, c) in s.char_indices() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if let Some(start) = atom_start.take() {
                lexemes.push((start, Lexeme::Atom(&s[start..pos])));
            }
            match c {
                '(' => lexemes.push((pos, Lexeme::Open)),
                ')' => lexemes.push((pos, Lexeme::Close)),
                _ => (),
            }
        } else if atom_start.is_none() {
            atom_start = Some(pos);
        }
    }
    if let Some(start) = atom_start {
        lexemes.push((start, Lexeme::Atom(&s[start..])));
    }
    lexemes
}

impl FromStr for Tree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut nodes: Vec<Node> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut root: Option<NodeId> = None;

        let push = |nodes: &mut Vec<Node>, stack: &[NodeId], label: &str| {
            let id = NodeId(nodes.len());
            nodes.push(Node {
                label: label.to_string(),
                children: Vec::new(),
            });
            if let Some(parent) = stack.last() {
                nodes[parent.0].children.push(id);
            }
            id
        };

        let mut lexemes = lex(s).into_iter().peekable();
        while let Some((pos, lexeme)) = lexemes.next() {
            if root.is_some() {
                return Err(TreeError::TrailingContent { pos });
            }
            match lexeme {
                Lexeme::Open => {
                    // unlabeled nodes, such as the "( (S ...))" root, get an empty label.
                    let label = match lexemes.peek() {
                        Some((_, Lexeme::Atom(label))) => {
                            let label = *label;
                            lexemes.next();
                            label
                        }
                        _ => "",
                    };
                    let id = push(&mut nodes, &stack, label);
                    stack.push(id);
                }
                Lexeme::Close => {
                    let id = stack.pop().ok_or(TreeError::Unbalanced { pos })?;
                    if stack.is_empty() {
                        root = Some(id);
                    }
                }
                Lexeme::Atom(word) => {
                    if stack.is_empty() {
                        return Err(TreeError::UnexpectedToken {
                            token: word.to_string(),
                            pos,
                        });
                    }
                    push(&mut nodes, &stack, word);
                }
            }
        }

        if !stack.is_empty() {
            return Err(TreeError::Unbalanced { pos: s.len() });
        }
        let root = root.ok_or(TreeError::Empty)?;
        Ok(Tree::from_nodes(nodes, root))
    }
}

impl TryFrom<String> for Tree {
    type Error = TreeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Tree> for String {
    fn from(t: Tree) -> String {
        t.to_string()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(self.root, &mut out);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: &str = "(ROOT (S (NP (DT The) (NN cat)) (VP (VBD sat))))";

    #[test]
    fn parse_simple() {
        let t: Tree = CAT.parse().unwrap();
        let root = t.root();
        assert_eq!(t.label(root), "ROOT");
        assert_eq!(t.leaf_count(root), 3);
        // ROOT S NP DT The NN cat VP VBD sat
        assert_eq!(t.len(), 10);

        let s = t.children(root)[0];
        assert_eq!(t.label(s), "S");
        let np = t.children(s)[0];
        assert_eq!(t.leaf_count(np), 2);
        assert!(t.is_leaf(t.children(t.children(np)[0])[0]));
        assert!(!t.is_leaf(np));
    }

    #[test]
    fn roundtrip_display() {
        let t: Tree = CAT.parse().unwrap();
        assert_eq!(t.to_string(), CAT);
    }

    #[test]
    fn whitespace_is_irrelevant() {
        let t: Tree = "( ROOT\n  (S\n\t(NP (DT The) (NN cat))\n (VP (VBD sat)) ) )"
            .parse()
            .unwrap();
        assert_eq!(t.to_string(), CAT);
    }

    #[test]
    fn unlabeled_root() {
        let t: Tree = "( (S (NN hi)))".parse().unwrap();
        assert_eq!(t.label(t.root()), "");
        assert_eq!(t.leaf_count(t.root()), 1);
    }

    #[test]
    fn identical_subtrees_are_distinct() {
        let t: Tree = "(NP (NN dog) (NN dog))".parse().unwrap();
        let kids = t.children(t.root());
        assert_ne!(kids[0], kids[1]);
        assert_eq!(t.label(kids[0]), t.label(kids[1]));
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Tree>(), Err(TreeError::Empty));
        assert_eq!("   ".parse::<Tree>(), Err(TreeError::Empty));
        assert!(matches!(
            "(S (NN a)".parse::<Tree>(),
            Err(TreeError::Unbalanced { .. })
        ));
        assert!(matches!(
            "(S (NN a)))".parse::<Tree>(),
            Err(TreeError::TrailingContent { .. })
        ));
        assert!(matches!(
            "word".parse::<Tree>(),
            Err(TreeError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            "(S (NN a)) (S (NN b))".parse::<Tree>(),
            Err(TreeError::TrailingContent { .. })
        ));
    }

    #[test]
    fn serde_as_string() {
        let t: Tree = serde_json::from_str(&format!("{:?}", CAT)).unwrap();
        assert_eq!(t.leaf_count(t.root()), 3);
        let back = serde_json::to_string(&t).unwrap();
        assert_eq!(back, format!("{:?}", CAT));

        assert!(serde_json::from_str::<Tree>("\"(S\"").is_err());
    }
}

/*! Head finding

A [HeadFinder] picks, for an internal node, the immediate child that carries the linguistic head.
[CollinsHeadFinder] implements the table-driven rules of Collins (1999), as used by the Penn Treebank tooling.
These are syntactic heads: copula and auxiliary verb phrases head on the verb, unlike a semantic head finder.
!*/
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use super::tree::{NodeId, Tree};

/// Finds the head child of a tree node.
///
/// Implementors must return one of `node`'s immediate children (never a deeper descendant), or [None] for leaves.
pub trait HeadFinder {
    fn determine_head(&self, tree: &Tree, node: NodeId) -> Option<NodeId>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// for each category in order, search children left to right
    Left,
    /// for each category in order, search children right to left
    Right,
    /// for each child right to left, check against any category
    RightDis,
}

type Rule = (Direction, &'static [&'static str]);

fn rule(direction: Direction, categories: &'static [&'static str]) -> Rule {
    (direction, categories)
}

lazy_static! {
    static ref COLLINS_RULES: HashMap<&'static str, Vec<Rule>> = {
        use Direction::*;
        let mut m: HashMap<&'static str, Vec<Rule>> = HashMap::new();
        m.insert("ADJP", vec![rule(Left, &["NNS", "QP", "NN", "$", "ADVP", "JJ", "VBN", "VBG", "ADJP", "JJR", "NP", "JJS", "DT", "FW", "RBR", "RBS", "SBAR", "RB"])]);
        m.insert("ADVP", vec![rule(Right, &["RB", "RBR", "RBS", "FW", "ADVP", "TO", "CD", "JJR", "JJ", "IN", "NP", "JJS", "NN"])]);
        m.insert("CONJP", vec![rule(Right, &["CC", "RB", "IN"])]);
        m.insert("FRAG", vec![rule(Right, &[])]);
        m.insert("INTJ", vec![rule(Left, &[])]);
        m.insert("LST", vec![rule(Right, &["LS", ":"])]);
        m.insert("NAC", vec![rule(Left, &["NN", "NNS", "NNP", "NNPS", "NP", "NAC", "EX", "$", "CD", "QP", "PRP", "VBG", "JJ", "JJS", "JJR", "ADJP", "FW"])]);
        m.insert("NX", vec![rule(Left, &[])]);
        m.insert("PP", vec![rule(Right, &["IN", "TO", "VBG", "VBN", "RP", "FW"])]);
        m.insert("PRN", vec![rule(Left, &[])]);
        m.insert("PRT", vec![rule(Right, &["RP"])]);
        m.insert("QP", vec![rule(Left, &["$", "IN", "NNS", "NN", "JJ", "RB", "DT", "CD", "NCD", "QP", "JJR", "JJS"])]);
        m.insert("RRC", vec![rule(Right, &["VP", "NP", "ADVP", "ADJP", "PP"])]);
        m.insert("S", vec![rule(Left, &["TO", "IN", "VP", "S", "SBAR", "ADJP", "UCP", "NP"])]);
        m.insert("SBAR", vec![rule(Left, &["WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT", "S", "SQ", "SINV", "SBAR", "FRAG"])]);
        m.insert("SBARQ", vec![rule(Left, &["SQ", "S", "SINV", "SBARQ", "FRAG"])]);
        m.insert("SINV", vec![rule(Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "S", "SINV", "ADJP", "NP"])]);
        m.insert("SQ", vec![rule(Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "SQ"])]);
        m.insert("UCP", vec![rule(Right, &[])]);
        m.insert("VP", vec![rule(Left, &["TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "ADJP", "NN", "NNS", "NP"])]);
        m.insert("WHADJP", vec![rule(Left, &["CC", "WRB", "JJ", "ADJP"])]);
        m.insert("WHADVP", vec![rule(Right, &["CC", "WRB"])]);
        m.insert("WHNP", vec![rule(Left, &["WDT", "WP", "WP$", "WHADJP", "WHPP", "WHNP"])]);
        m.insert("WHPP", vec![rule(Right, &["IN", "TO", "FW"])]);
        m.insert("X", vec![rule(Right, &[])]);
        m.insert("NP", vec![
            rule(RightDis, &["NN", "NNP", "NNPS", "NNS", "NX", "POS", "JJR"]),
            rule(Left, &["NP"]),
            rule(RightDis, &["$", "ADJP", "PRN"]),
            rule(Right, &["CD"]),
            rule(RightDis, &["JJ", "JJS", "RB", "QP"]),
        ]);
        let root: Vec<Rule> = vec![rule(Left, &["S", "SINV", "SQ", "SBARQ", "FRAG"])];
        m.insert("ROOT", root.clone());
        m.insert("TOP", root);
        m
    };
}

/// Strips functional tags and indices (`NP-SBJ-1` => `NP`, `NP=2` => `NP`).
///
/// Labels starting with `-` (such as `-LRB-` or `-NONE-`) are kept as is.
pub fn basic_category(label: &str) -> &str {
    if label.starts_with('-') {
        return label;
    }
    match label.find(|c| c == '-' || c == '=') {
        Some(0) | None => label,
        Some(idx) => &label[..idx],
    }
}

/// Collins (1999) head rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollinsHeadFinder;

impl CollinsHeadFinder {
    pub fn new() -> Self {
        Self
    }

    fn search(tree: &Tree, children: &[NodeId], rule: &Rule) -> Option<NodeId> {
        let category = |child: &NodeId| basic_category(tree.label(*child));
        let (direction, categories) = rule;
        let head = match direction {
            Direction::Left => categories
                .iter()
                .find_map(|cat| children.iter().find(|child| category(*child) == *cat)),
            Direction::Right => categories
                .iter()
                .find_map(|cat| children.iter().rev().find(|child| category(*child) == *cat)),
            Direction::RightDis => children
                .iter()
                .rev()
                .find(|child| categories.iter().any(|cat| *cat == category(*child))),
        };
        head.copied()
    }
}

impl HeadFinder for CollinsHeadFinder {
    fn determine_head(&self, tree: &Tree, node: NodeId) -> Option<NodeId> {
        let children = tree.children(node);
        match children {
            [] => None,
            [only] => Some(*only),
            _ => {
                let category = basic_category(tree.label(node));
                let rules = match COLLINS_RULES.get(category) {
                    Some(rules) => rules,
                    None => {
                        debug!("no head rule for {:?}, using leftmost child", category);
                        return children.first().copied();
                    }
                };

                if let Some(head) = rules
                    .iter()
                    .find_map(|rule| Self::search(tree, children, rule))
                {
                    return Some(head);
                }

                // nothing matched: default to the direction of the last rule
                match rules.last().map(|(direction, _)| direction) {
                    Some(Direction::Right) | Some(Direction::RightDis) => children.last().copied(),
                    _ => children.first().copied(),
                }
            }
        }
    }
}

/*! Constituency parses

Rebuilds a [Tree] as a flat list of [Constituent]s, in pre-order.

Each constituent covers the token range `[left, right)` computed from the leaf counts of the tree itself:
a child starts where its previous sibling ends. If the tree does not have as many leaves as the tokenization
has tokens, ranges are still built from the tree, and the mismatch is left to [crate::concrete::validate].
!*/
use log::debug;

use crate::concrete::{Constituent, Parse, TokenRefSequence, Uuid};
use crate::trees::{HeadFinder, NodeId, Tree};

use super::Converter;

const PARSE_REFERENCE: &str = " http://www.aclweb.org/anthology-new/D/D10/D10-1002.pdf";

impl<H: HeadFinder> Converter<H> {
    /// Convert `tree`, referencing tokens of the tokenization `tokenization_id`.
    pub fn parse(&self, tree: &Tree, tokenization_id: &Uuid) -> Parse {
        let mut constituents = Vec::with_capacity(tree.len());
        let root = tree.root();
        self.constituent(
            tree,
            root,
            (0, tree.leaf_count(root)),
            tokenization_id,
            &mut constituents,
        );

        Parse {
            uuid: Uuid::generate(),
            metadata: self.metadata.with_suffix(PARSE_REFERENCE),
            constituents,
        }
    }

    /// Push the constituent of `node` and its descendants, returning its id.
    ///
    /// The id of a constituent is its position in `constituents`.
    fn constituent(
        &self,
        tree: &Tree,
        node: NodeId,
        (left, right): (usize, usize),
        tokenization_id: &Uuid,
        constituents: &mut Vec<Constituent>,
    ) -> usize {
        let id = constituents.len();
        constituents.push(Constituent {
            id,
            tag: tree.label(node).to_string(),
            token_sequence: TokenRefSequence::from_range(left, right, None, tokenization_id),
            children: Vec::new(),
            head_child_index: None,
        });

        let head = if tree.is_leaf(node) {
            None
        } else {
            self.head_finder.determine_head(tree, node)
        };

        let mut children = Vec::with_capacity(tree.children(node).len());
        let mut head_child_index = None;
        let mut left_ptr = left;
        for (idx, child) in tree.children(node).iter().enumerate() {
            let width = tree.leaf_count(*child);
            children.push(self.constituent(
                tree,
                *child,
                (left_ptr, left_ptr + width),
                tokenization_id,
                constituents,
            ));
            left_ptr += width;

            if head == Some(*child) {
                head_child_index = Some(idx);
            }
        }

        if head.is_some() && head_child_index.is_none() {
            debug!(
                "head of constituent {} ({}) is not one of its children",
                id,
                tree.label(node)
            );
        }

        let constituent = &mut constituents[id];
        constituent.children = children;
        constituent.head_child_index = head_child_index;
        id
    }
}

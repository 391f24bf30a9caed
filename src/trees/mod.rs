/*! Constituency trees

Arena-backed bracketed trees ([Tree]) and head finding ([HeadFinder]).
!*/
mod headfinder;
mod tree;

pub use headfinder::{basic_category, CollinsHeadFinder, HeadFinder};
pub use tree::{NodeId, Tree, TreeError};

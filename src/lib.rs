/*! # concrete-agiga

Conversion of Annotated Gigaword documents ([agiga]) into Concrete Communications ([concrete]).

- [trees] holds bracketed constituency trees and head finding,
- [convert] holds the conversion itself,
- [io] reads corpora and writes/reads length-delimited Communication streams,
- [pipeline] drives the whole conversion over a set of files.
!*/
pub mod agiga;
pub mod concrete;
pub mod convert;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod trees;

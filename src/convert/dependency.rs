//! Typed dependencies.
use crate::agiga::{Sentence, TypedDependency};
use crate::concrete::{Dependency, DependencyParse, Uuid};
use crate::trees::HeadFinder;

use super::Converter;

const DEPENDENCIES_REFERENCE: &str = "http://nlp.stanford.edu/software/dependencies_manual.pdf";

/// The three dependency sets of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyFlavor {
    Basic,
    Collapsed,
    CollapsedCcProcessed,
}

impl DependencyFlavor {
    /// Flavors, in the order their parses are attached to a tokenization.
    pub const ALL: [DependencyFlavor; 3] = [
        DependencyFlavor::Basic,
        DependencyFlavor::Collapsed,
        DependencyFlavor::CollapsedCcProcessed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DependencyFlavor::Basic => "basic-deps",
            DependencyFlavor::Collapsed => "col-deps",
            DependencyFlavor::CollapsedCcProcessed => "col-ccproc-deps",
        }
    }

    /// Dependencies of this flavor in `sentence`.
    pub fn of<'a>(&self, sentence: &'a Sentence) -> &'a [TypedDependency] {
        match self {
            DependencyFlavor::Basic => &sentence.basic_deps,
            DependencyFlavor::Collapsed => &sentence.col_deps,
            DependencyFlavor::CollapsedCcProcessed => &sentence.col_ccproc_deps,
        }
    }
}

impl<H: HeadFinder> Converter<H> {
    /// Convert a list of typed dependencies.
    ///
    /// Order is kept. Root-attached dependencies (negative governor) get no governor.
    pub fn dependency_parse(
        &self,
        dependencies: &[TypedDependency],
        flavor: DependencyFlavor,
    ) -> DependencyParse {
        let dependencies = dependencies
            .iter()
            .map(|d| Dependency {
                dep: d.dep,
                gov: d.governor(),
                edge_type: d.kind.clone(),
            })
            .collect();

        DependencyParse {
            uuid: Uuid::generate(),
            metadata: self
                .metadata
                .with_suffix(&format!(" {} {}", flavor.name(), DEPENDENCIES_REFERENCE)),
            dependencies,
        }
    }
}

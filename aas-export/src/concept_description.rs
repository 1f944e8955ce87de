//! Concept description resolution
//!
//! Elements refer to their concept description through the first key of
//! their semantic ID. After import the matching description is attached
//! to each submodel and element; before export, descriptions attached in
//! memory but absent from the environment are gathered back.

use aas_core::Reference;
use aas_model::{ConceptDescription, HasSemantics, Identifiable, Submodel};
use std::collections::{HashMap, HashSet};

/// Concept descriptions keyed by identification
pub struct ConceptDescriptionIndex<'a> {
    by_id: HashMap<&'a str, &'a ConceptDescription>,
}

impl<'a> ConceptDescriptionIndex<'a> {
    pub fn new(concept_descriptions: &'a [ConceptDescription]) -> Self {
        Self {
            by_id: concept_descriptions
                .iter()
                .map(|cd| (cd.identification.id.as_str(), cd))
                .collect(),
        }
    }

    /// Description a semantic ID points at
    pub fn lookup(&self, semantic_id: Option<&Reference>) -> Option<&'a ConceptDescription> {
        let key = semantic_id?.first()?;
        self.by_id.get(key.value.as_str()).copied()
    }

    fn attach<T: HasSemantics + ?Sized>(&self, target: &mut T) -> bool {
        match self.lookup(target.semantic_id()) {
            Some(cd) => {
                target.set_concept_description(Some(cd.clone()));
                true
            }
            None => false,
        }
    }
}

/// Attach concept descriptions to submodels and their elements
///
/// Returns the number of attachments made.
pub fn resolve(submodels: &mut [Submodel], concept_descriptions: &[ConceptDescription]) -> usize {
    if concept_descriptions.is_empty() {
        return 0;
    }
    let index = ConceptDescriptionIndex::new(concept_descriptions);
    let mut attached = 0;
    for submodel in submodels.iter_mut() {
        if index.attach(submodel) {
            attached += 1;
        }
        submodel.submodel_elements.for_each_mut(&mut |element| {
            if index.attach(element) {
                attached += 1;
            }
        });
    }
    log::debug!("Attached {} concept description(s)", attached);
    attached
}

/// Append attached descriptions missing from `concept_descriptions`
///
/// Returns the number of descriptions added.
pub fn collect(
    submodels: &[Submodel],
    concept_descriptions: &mut Vec<ConceptDescription>,
) -> usize {
    let mut known: HashSet<String> = concept_descriptions
        .iter()
        .map(|cd| cd.identification().id.clone())
        .collect();
    let mut added = Vec::new();
    let mut take = |cd: Option<&ConceptDescription>| {
        if let Some(cd) = cd {
            if known.insert(cd.identification.id.clone()) {
                added.push(cd.clone());
            }
        }
    };

    for submodel in submodels {
        take(submodel.concept_description());
        submodel
            .submodel_elements
            .walk(|_, element| take(element.concept_description()));
    }

    let count = added.len();
    concept_descriptions.extend(added);
    count
}

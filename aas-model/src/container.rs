//! Ordered, idShort-keyed element container
//!
//! Submodels, collections, entities and annotated relationships hold their
//! children in an [`ElementContainer`]. Paths address nested elements with
//! `/`-separated idShorts, e.g. `Nameplate/Address/Street`.

use crate::elements::{SubmodelElement, is_unknown_kind};
use aas_core::{AasError, AasResult, strings, validate_id_short};
use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementContainer(Vec<SubmodelElement>);

impl ElementContainer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubmodelElement> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SubmodelElement> {
        self.0.iter_mut()
    }

    /// Direct child by idShort
    pub fn find(&self, id_short: &str) -> Option<&SubmodelElement> {
        self.0.iter().find(|e| e.id_short() == id_short)
    }

    pub fn find_mut(&mut self, id_short: &str) -> Option<&mut SubmodelElement> {
        self.0.iter_mut().find(|e| e.id_short() == id_short)
    }

    pub fn contains(&self, id_short: &str) -> bool {
        self.find(id_short).is_some()
    }

    /// Element at a `/`-separated idShort path
    pub fn get(&self, path: &str) -> Option<&SubmodelElement> {
        let mut segments = strings::split_path(path).into_iter();
        let mut current = self.find(segments.next()?)?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut SubmodelElement> {
        let mut segments = strings::split_path(path).into_iter();
        let mut current = self.find_mut(segments.next()?)?;
        for segment in segments {
            current = current.child_mut(segment)?;
        }
        Some(current)
    }

    /// Add a new direct child
    ///
    /// # Errors
    /// - [`AasError::InvalidIdentifier`] if the idShort is malformed
    /// - [`AasError::Conflict`] if a child with the same idShort exists
    pub fn insert(&mut self, element: SubmodelElement) -> AasResult<()> {
        validate_id_short(element.id_short())?;
        if self.contains(element.id_short()) {
            return Err(AasError::Conflict(element.id_short().to_string()));
        }
        self.0.push(element);
        Ok(())
    }

    /// Add a child, skipping it with a warning if the idShort is taken
    ///
    /// Returns whether the element was added.
    pub fn append(&mut self, element: SubmodelElement) -> bool {
        if self.contains(element.id_short()) {
            log::warn!(
                "Skipping duplicate {} '{}'",
                element.model_type(),
                element.id_short()
            );
            return false;
        }
        self.0.push(element);
        true
    }

    /// Insert or replace the element at `path`
    ///
    /// The parent of `path` must exist and hold children. The last segment
    /// must equal the element's idShort. Returns `true` if an existing
    /// element was replaced.
    pub fn create_or_update(&mut self, path: &str, element: SubmodelElement) -> AasResult<bool> {
        let (parent, id_short) = split_last(path)?;
        if id_short != element.id_short() {
            return Err(AasError::InvalidData(format!(
                "Path '{}' does not end in idShort '{}'",
                path,
                element.id_short()
            )));
        }

        let container = self.container_at_mut(parent)?;
        match container.find_mut(id_short) {
            Some(existing) => {
                *existing = element;
                Ok(true)
            }
            None => {
                container.insert(element)?;
                Ok(false)
            }
        }
    }

    /// Remove and return the element at `path`
    ///
    /// # Errors
    /// Returns [`AasError::NotFound`] if nothing lives at `path`.
    pub fn remove(&mut self, path: &str) -> AasResult<SubmodelElement> {
        let (parent, id_short) = split_last(path)?;
        let container = self.container_at_mut(parent)?;
        let index = container
            .0
            .iter()
            .position(|e| e.id_short() == id_short)
            .ok_or_else(|| AasError::NotFound(path.to_string()))?;
        Ok(container.0.remove(index))
    }

    fn container_at_mut(&mut self, path: &str) -> AasResult<&mut ElementContainer> {
        if strings::split_path(path).is_empty() {
            return Ok(self);
        }
        self.get_mut(path)
            .ok_or_else(|| AasError::NotFound(path.to_string()))?
            .children_mut()
            .ok_or_else(|| {
                AasError::InvalidData(format!("Element '{}' holds no child elements", path))
            })
    }

    /// Visit every element with its path, parents before children
    ///
    /// Operation variables are visited as children of their operation.
    pub fn walk<F: FnMut(&str, &SubmodelElement)>(&self, mut f: F) {
        self.walk_inner("", &mut f);
    }

    fn walk_inner(&self, prefix: &str, f: &mut dyn FnMut(&str, &SubmodelElement)) {
        for element in &self.0 {
            let path = strings::join_path(&[prefix, element.id_short()]);
            f(&path, element);
            if let Some(op) = element.as_operation() {
                for variable in op.variables() {
                    let var_path = strings::join_path(&[path.as_str(), variable.id_short()]);
                    f(&var_path, &variable.value);
                    if let Some(children) = variable.value.children() {
                        children.walk_inner(&var_path, f);
                    }
                }
            } else if let Some(children) = element.children() {
                children.walk_inner(&path, f);
            }
        }
    }

    /// Apply `f` to every element in the tree, parents before children
    pub fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut SubmodelElement)) {
        for element in &mut self.0 {
            f(element);
            element.for_each_descendant_mut(f);
        }
    }
}

fn split_last(path: &str) -> AasResult<(&str, &str)> {
    let trimmed = strings::trim_slashes(path);
    if trimmed.is_empty() {
        return Err(AasError::InvalidData("Empty element path".to_string()));
    }
    Ok(match trimmed.rfind('/') {
        Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
        None => ("", trimmed),
    })
}

impl From<Vec<SubmodelElement>> for ElementContainer {
    fn from(elements: Vec<SubmodelElement>) -> Self {
        let mut container = ElementContainer::new();
        for element in elements {
            container.append(element);
        }
        container
    }
}

impl FromIterator<SubmodelElement> for ElementContainer {
    fn from_iter<I: IntoIterator<Item = SubmodelElement>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a> IntoIterator for &'a ElementContainer {
    type Item = &'a SubmodelElement;
    type IntoIter = std::slice::Iter<'a, SubmodelElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for ElementContainer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for element in &self.0 {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ElementContainer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ContainerVisitor;

        impl<'de> Visitor<'de> for ContainerVisitor {
            type Value = ElementContainer;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a list of submodel elements")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut container = ElementContainer::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    match SubmodelElement::from_json(value) {
                        Ok(element) => {
                            container.append(element);
                        }
                        Err(err) if is_unknown_kind(&err) => {
                            log::warn!("Skipping submodel element: {}", err);
                        }
                        Err(err) => return Err(serde::de::Error::custom(err)),
                    }
                }
                Ok(container)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ElementContainer::new())
            }
        }

        deserializer.deserialize_any(ContainerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Operation, Property, SubmodelElementCollection};
    use aas_core::{DataType, ElementValue};
    use serde_json::json;

    fn sample() -> ElementContainer {
        let mut address = SubmodelElementCollection::new("Address");
        address
            .value
            .insert(Property::new("Street", DataType::String).with_value("Main St").into())
            .unwrap();
        let mut nameplate = SubmodelElementCollection::new("Nameplate");
        nameplate.value.insert(address.into()).unwrap();

        let mut container = ElementContainer::new();
        container.insert(nameplate.into()).unwrap();
        container
            .insert(
                Operation::new("Reset")
                    .with_input(Property::new("Force", DataType::Boolean))
                    .into(),
            )
            .unwrap();
        container
    }

    #[test]
    fn test_get_nested_path() {
        let container = sample();
        let street = container.get("Nameplate/Address/Street").unwrap();
        assert_eq!(
            street.as_property().unwrap().value,
            Some(ElementValue::String("Main St".into()))
        );
        assert!(container.get("/Nameplate/Address/").is_some());
        assert!(container.get("Nameplate/Missing").is_none());
        assert!(container.get("Reset/Force").is_some());
        assert!(container.get("").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicates_and_bad_ids() {
        let mut container = sample();
        let err = container
            .insert(SubmodelElementCollection::new("Nameplate").into())
            .unwrap_err();
        assert!(matches!(err, AasError::Conflict(_)));

        let err = container
            .insert(Property::new("1st", DataType::Int).into())
            .unwrap_err();
        assert!(matches!(err, AasError::InvalidIdentifier(_)));

        assert!(!container.append(SubmodelElementCollection::new("Nameplate").into()));
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_create_or_update_and_remove() {
        let mut container = sample();
        let replaced = container
            .create_or_update(
                "Nameplate/Address/Street",
                Property::new("Street", DataType::String).with_value("High St").into(),
            )
            .unwrap();
        assert!(replaced);

        let created = container
            .create_or_update(
                "Nameplate/Address/Zip",
                Property::new("Zip", DataType::String).with_value("12345").into(),
            )
            .unwrap();
        assert!(!created);
        assert!(container.get("Nameplate/Address/Zip").is_some());

        let err = container
            .create_or_update("Nameplate/Other", Property::new("Zip", DataType::String).into())
            .unwrap_err();
        assert!(matches!(err, AasError::InvalidData(_)));

        let err = container
            .create_or_update("Missing/Zip", Property::new("Zip", DataType::String).into())
            .unwrap_err();
        assert!(matches!(err, AasError::NotFound(_)));

        let removed = container.remove("Nameplate/Address/Zip").unwrap();
        assert_eq!(removed.id_short(), "Zip");
        assert!(matches!(
            container.remove("Nameplate/Address/Zip"),
            Err(AasError::NotFound(_))
        ));
    }

    #[test]
    fn test_walk_visits_all_paths() {
        let mut paths = Vec::new();
        sample().walk(|path, _| paths.push(path.to_string()));
        assert_eq!(
            paths,
            vec![
                "Nameplate",
                "Nameplate/Address",
                "Nameplate/Address/Street",
                "Reset",
                "Reset/Force",
            ]
        );
    }

    #[test]
    fn test_for_each_mut_reaches_variables() {
        let mut container = sample();
        let mut count = 0;
        container.for_each_mut(&mut |element| {
            element.meta_mut().category = Some("PARAMETER".into());
            count += 1;
        });
        assert_eq!(count, 5);
        assert_eq!(
            container.get("Reset/Force").unwrap().meta().category.as_deref(),
            Some("PARAMETER")
        );
    }

    #[test]
    fn test_lenient_decoding() {
        let container: ElementContainer = serde_json::from_value(json!([
            {"modelType": {"name": "Property"}, "idShort": "A", "valueType": "int", "value": "1"},
            {"modelType": {"name": "Hologram"}, "idShort": "B"},
            {"idShort": "C"},
            {"modelType": {"name": "Property"}, "idShort": "A", "value": "2"}
        ]))
        .unwrap();
        assert_eq!(container.len(), 1);
        assert_eq!(
            container.find("A").unwrap().as_property().unwrap().value,
            Some(ElementValue::Integer(1))
        );

        let broken: Result<ElementContainer, _> = serde_json::from_value(json!([
            {"modelType": {"name": "Property"}, "idShort": "A", "valueType": "int", "value": "x"}
        ]));
        assert!(broken.is_err());

        let empty: ElementContainer = serde_json::from_value(Value::Null).unwrap();
        assert!(empty.is_empty());
    }
}

//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::module::{PackageEntry, ResolutionDocument};

    /// Generate a valid package name (lowercase alphanumeric with hyphens)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,30}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a dependency outside the module (standard library style)
    pub fn external_dependency() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("std.core".to_string()),
            Just("std.collection".to_string()),
            Just("std.math".to_string()),
            Just("std.io".to_string()),
        ]
    }

    /// Generate a resolution document in valid resolver order.
    ///
    /// Package entries only require entries listed after them, plus
    /// external packages. The last entry is the module root, requiring
    /// every package.
    pub fn resolution_document(module: &'static str) -> impl Strategy<Value = ResolutionDocument> {
        prop::collection::btree_set(package_name(), 0..8)
            .prop_flat_map(|names| {
                let names: Vec<String> = names.into_iter().collect();
                let n = names.len();
                (
                    Just(names),
                    prop::collection::vec(prop::collection::vec(any::<bool>(), n), n),
                    prop::collection::vec(prop::option::of(external_dependency()), n),
                )
            })
            .prop_map(move |(names, edges, externals)| {
                let qualified: Vec<String> =
                    names.iter().map(|name| format!("{module}/{name}")).collect();

                let mut resolves: Vec<PackageEntry> = qualified
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let mut requires: Vec<String> = qualified
                            .iter()
                            .enumerate()
                            .filter(|&(j, _)| j > i && edges[i][j])
                            .map(|(_, dep)| dep.clone())
                            .collect();
                        if let Some(external) = &externals[i] {
                            requires.push(external.clone());
                        }
                        PackageEntry::new(name.clone(), requires)
                    })
                    .collect();

                resolves.push(PackageEntry::new(module, qualified));
                ResolutionDocument::new(resolves)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_package_name_generator(name in package_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_resolution_document_generator(doc in resolution_document("circuits")) {
            prop_assert!(!doc.is_empty());
            let root = doc.resolves.last().unwrap();
            prop_assert_eq!(root.package_name.as_str(), "circuits");
            prop_assert_eq!(root.requires.len(), doc.len() - 1);
        }
    }
}

//! Build order rendering
//!
//! The resolver already lists packages dependents-first, ending with the
//! module root. The build order is that list reversed, without the root.
//! No order is computed here.

use std::collections::HashMap;

use crate::core::module::ResolutionDocument;
use crate::error::OrderError;

/// Package names in build order, dependencies first, module root dropped
pub fn order(document: &ResolutionDocument) -> Vec<&str> {
    let mut names: Vec<&str> = document.package_names().collect();
    names.reverse();
    names.into_iter().skip(1).collect()
}

/// Check that the document is a valid reverse build order.
///
/// Every dependency that is itself an entry must be listed after the
/// entry requiring it. Dependencies outside the document are ignored, as
/// is the module root, which never appears in the build order.
pub fn verify_order(document: &ResolutionDocument) -> Result<(), OrderError> {
    let positions: HashMap<&str, usize> = document
        .package_names()
        .enumerate()
        .map(|(index, name)| (name, index))
        .collect();

    let built = document.len().saturating_sub(1);
    for (index, entry) in document.resolves.iter().enumerate().take(built) {
        for dependency in &entry.requires {
            match positions.get(dependency.as_str()) {
                Some(&dep_index) if dep_index <= index => {
                    return Err(OrderError::DependencyAfterDependent {
                        package: entry.package_name.clone(),
                        dependency: dependency.clone(),
                    });
                }
                _ => {}
            }
        }
    }

    tracing::debug!("Resolution order verified for {} packages", document.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::artifact::render_trailing;
    use crate::core::module::PackageEntry;
    use crate::test_utils::generators::resolution_document;
    use proptest::prelude::*;

    fn entry(name: &str, requires: &[&str]) -> PackageEntry {
        PackageEntry::new(name, requires.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_order_reverses_and_drops_root() {
        let doc = ResolutionDocument::new(vec![entry("A", &[]), entry("B", &[]), entry("C", &[])]);
        let names = order(&doc);
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(render_trailing(&names), "B A ");
    }

    #[test]
    fn test_order_single_entry_is_empty() {
        let doc = ResolutionDocument::new(vec![entry("circuits", &[])]);
        assert!(order(&doc).is_empty());
    }

    #[test]
    fn test_order_empty_document() {
        assert!(order(&ResolutionDocument::default()).is_empty());
    }

    #[test]
    fn test_order_puts_dependencies_first() {
        let doc = ResolutionDocument::new(vec![
            entry("circuits/app", &["circuits/graphs"]),
            entry("circuits/graphs", &["circuits/utils"]),
            entry("circuits/utils", &[]),
            entry("circuits", &["circuits/app"]),
        ]);
        assert_eq!(
            order(&doc),
            vec!["circuits/utils", "circuits/graphs", "circuits/app"]
        );
        assert!(verify_order(&doc).is_ok());
    }

    #[test]
    fn test_verify_rejects_dependency_listed_first() {
        let doc = ResolutionDocument::new(vec![
            entry("circuits/utils", &[]),
            entry("circuits/app", &["circuits/utils"]),
            entry("circuits", &["circuits/app"]),
        ]);
        let err = verify_order(&doc).unwrap_err();
        assert_eq!(
            err,
            OrderError::DependencyAfterDependent {
                package: "circuits/app".to_string(),
                dependency: "circuits/utils".to_string(),
            }
        );
    }

    #[test]
    fn test_verify_rejects_self_dependency() {
        let doc = ResolutionDocument::new(vec![
            entry("circuits/a", &["circuits/a"]),
            entry("circuits", &["circuits/a"]),
        ]);
        assert!(verify_order(&doc).is_err());
    }

    #[test]
    fn test_verify_skips_module_root() {
        let doc = ResolutionDocument::new(vec![entry("circuits", &["circuits"])]);
        assert!(verify_order(&doc).is_ok());
    }

    #[test]
    fn test_verify_ignores_external_dependencies() {
        let doc = ResolutionDocument::new(vec![
            entry("circuits/app", &["std.collection", "std.math"]),
            entry("circuits", &["circuits/app"]),
        ]);
        assert!(verify_order(&doc).is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_order_drops_exactly_one_entry(doc in resolution_document("circuits")) {
            let names = order(&doc);
            prop_assert_eq!(names.len(), doc.len().saturating_sub(1));
        }

        #[test]
        fn test_generated_documents_verify(doc in resolution_document("circuits")) {
            prop_assert!(verify_order(&doc).is_ok());
        }

        #[test]
        fn test_order_is_idempotent(doc in resolution_document("circuits")) {
            prop_assert_eq!(render_trailing(&order(&doc)), render_trailing(&order(&doc)));
        }
    }
}

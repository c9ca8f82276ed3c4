//! Resolution of the categories participating in a generation.

use mashup_core::{ElementType, GenerationConfig, OptionalCategory};

/// The categories a generation draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategories {
    optional: Vec<OptionalCategory>,
}

impl ResolvedCategories {
    /// Enabled optional categories, in fixed order.
    pub fn optional(&self) -> &[OptionalCategory] {
        &self.optional
    }

    /// Every resolved element type: core first, then enabled optional ones.
    pub fn element_types(&self) -> Vec<ElementType> {
        ElementType::CORE
            .into_iter()
            .chain(self.optional.iter().map(|c| c.element_type()))
            .collect()
    }
}

/// Determine which categories the config pulls into a generation.
pub fn resolve_categories(config: &GenerationConfig) -> ResolvedCategories {
    let optional = OptionalCategory::ALL
        .into_iter()
        .filter(|c| c.is_enabled(config))
        .collect();
    ResolvedCategories { optional }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_only() {
        let resolved = resolve_categories(&GenerationConfig::core_only());
        assert_eq!(resolved.element_types(), ElementType::CORE.to_vec());
        assert!(resolved.optional().is_empty());
    }

    #[test]
    fn test_default_config_order() {
        let resolved = resolve_categories(&GenerationConfig::default());
        assert_eq!(
            resolved.element_types(),
            vec![
                ElementType::Persona,
                ElementType::Problem,
                ElementType::Technology,
                ElementType::BusinessModel,
                ElementType::Format,
                ElementType::ActionVerb,
                ElementType::Trend,
            ]
        );
        assert!(!resolved.element_types().contains(&ElementType::Channel));
    }

    #[test]
    fn test_everything_has_no_duplicates() {
        let resolved = resolve_categories(&GenerationConfig::everything());
        let types = resolved.element_types();
        assert_eq!(types.len(), 8);
        let unique: std::collections::HashSet<_> = types.iter().collect();
        assert_eq!(unique.len(), types.len());
        assert_eq!(types[5], ElementType::Channel);
    }
}

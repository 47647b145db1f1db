use intake_model::QuestionnaireDefinition;

use crate::error::RegistryError;

/// Variant documents compiled into the binary, in site display order.
const VARIANT_SOURCES: &[(&str, &str)] = &[
    ("gdpr", include_str!("../data/gdpr.toml")),
    ("iso-27001", include_str!("../data/iso-27001.toml")),
    ("soc2", include_str!("../data/soc2.toml")),
    ("nis2", include_str!("../data/nis2.toml")),
    ("hipaa", include_str!("../data/hipaa.toml")),
    ("pci-dss", include_str!("../data/pci-dss.toml")),
    ("iso-9001", include_str!("../data/iso-9001.toml")),
    ("iso-13485", include_str!("../data/iso-13485.toml")),
    ("iso-14001", include_str!("../data/iso-14001.toml")),
];

/// All nine questionnaire variants, parsed and verified.
///
/// Loading is the schema-defect firewall: every definition is structurally
/// verified here, so downstream code can assume unique question ids,
/// well-formed reveal conditions, and a required email question.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    variants: Vec<QuestionnaireDefinition>,
}

impl SchemaRegistry {
    /// Parse and verify every embedded variant document.
    pub fn load() -> Result<Self, RegistryError> {
        let mut variants = Vec::with_capacity(VARIANT_SOURCES.len());
        for (variant, source) in VARIANT_SOURCES {
            let definition: QuestionnaireDefinition =
                toml::from_str(source).map_err(|source| RegistryError::Parse {
                    variant,
                    source: Box::new(source),
                })?;
            if definition.id != *variant {
                return Err(RegistryError::IdMismatch {
                    variant,
                    declared: definition.id,
                });
            }
            definition
                .verify()
                .map_err(|source| RegistryError::Invalid { variant, source })?;
            variants.push(definition);
        }
        Ok(Self { variants })
    }

    /// Variants in site display order.
    pub fn variants(&self) -> &[QuestionnaireDefinition] {
        &self.variants
    }

    pub fn get(&self, id: &str) -> Option<&QuestionnaireDefinition> {
        self.variants.iter().find(|definition| definition.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|definition| definition.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_variant_loads_and_verifies() {
        let registry = SchemaRegistry::load().expect("embedded variants are well-formed");
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn lookup_by_id() {
        let registry = SchemaRegistry::load().expect("registry loads");
        assert!(registry.get("gdpr").is_some());
        assert!(registry.get("iso-27001").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn variant_ids_match_file_names() {
        let registry = SchemaRegistry::load().expect("registry loads");
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "gdpr",
                "iso-27001",
                "soc2",
                "nis2",
                "hipaa",
                "pci-dss",
                "iso-9001",
                "iso-13485",
                "iso-14001",
            ]
        );
    }
}

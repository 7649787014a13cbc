use std::collections::HashSet;

use flockdx_core::BirdType;
use flockdx_knowledge::{Disease, DiseasePool, KnowledgeBase};

/// Whether a disease from its pool can occur in a flock of `bird_type`.
///
/// General diseases must be tagged for the bird type; layer-specific
/// diseases apply to every layer flock; nutritional deficiencies apply to
/// all flocks.
pub fn applies_to(disease: &Disease, bird_type: BirdType) -> bool {
    match disease.pool {
        DiseasePool::General => disease.affects(bird_type),
        DiseasePool::LayerSpecific => bird_type == BirdType::Layer,
        DiseasePool::Nutritional => true,
    }
}

/// Diseases that can be scored for a flock of `bird_type`, in file order.
///
/// A disease listed in more than one pool is kept once, at its first
/// position.
pub fn applicable_diseases(kb: &KnowledgeBase, bird_type: BirdType) -> Vec<&Disease> {
    let mut seen = HashSet::new();
    kb.all_diseases()
        .filter(|d| applies_to(d, bird_type))
        .filter(|d| {
            let first = seen.insert(d.id());
            if !first {
                tracing::debug!(disease = d.id(), "skipping duplicate applicable disease");
            }
            first
        })
        .collect()
}

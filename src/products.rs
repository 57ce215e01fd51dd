//! Productos sugeridos (fitosanitarios y fertilizantes) por enfermedad.

use serde::Serialize;

use crate::models::DiseaseId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Pesticide,
    Fertilizer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: ProductKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductRecommendations {
    pub pesticides: &'static [Product],
    pub fertilizers: &'static [Product],
}

const fn pesticide(name: &'static str, description: &'static str) -> Product {
    Product { name, description, kind: ProductKind::Pesticide }
}

const fn fertilizer(name: &'static str, description: &'static str) -> Product {
    Product { name, description, kind: ProductKind::Fertilizer }
}

const LEAF_SPOT: ProductRecommendations = ProductRecommendations {
    pesticides: &[
        pesticide("Copper Fungicide", "Controls fungal leaf spot diseases"),
        pesticide("Neem Oil", "Organic treatment for leaf spots"),
    ],
    fertilizers: &[
        fertilizer("Balanced NPK Fertilizer", "Strengthens plant immunity"),
        fertilizer("Potassium Rich Fertilizer", "Improves disease resistance"),
    ],
};

const BLIGHT: ProductRecommendations = ProductRecommendations {
    pesticides: &[
        pesticide("Carbendazim", "Systemic fungicide for blight control"),
        pesticide("Mancozeb", "Protective fungicide for blight"),
    ],
    fertilizers: &[
        fertilizer("Organic Compost", "Improves soil health and plant vigor"),
        fertilizer("Calcium Fertilizer", "Strengthens cell walls against blight"),
    ],
};

const RUST: ProductRecommendations = ProductRecommendations {
    pesticides: &[
        pesticide("Propiconazole", "Effective against rust diseases"),
        pesticide("Sulfur Dust", "Organic rust control"),
    ],
    fertilizers: &[
        fertilizer("Nitrogen Fertilizer", "Promotes healthy leaf growth"),
        fertilizer("Iron Chelate", "Prevents iron deficiency"),
    ],
};

const POWDERY_MILDEW: ProductRecommendations = ProductRecommendations {
    pesticides: &[
        pesticide("Potassium Bicarbonate", "Organic powdery mildew control"),
        pesticide("Triforine", "Systemic mildew fungicide"),
    ],
    fertilizers: &[
        fertilizer("Phosphorus Fertilizer", "Improves root development"),
        fertilizer("Micronutrient Mix", "Boosts overall plant health"),
    ],
};

const DEFAULT: ProductRecommendations = ProductRecommendations {
    pesticides: &[
        pesticide("Multi-Purpose Fungicide", "Broad spectrum disease control"),
        pesticide("Neem Oil Spray", "Organic pest and disease control"),
    ],
    fertilizers: &[
        fertilizer("Complete NPK Fertilizer", "Balanced nutrition for plant health"),
        fertilizer("Organic Compost", "Natural soil enrichment"),
    ],
};

pub fn recommendations_for(id: DiseaseId) -> ProductRecommendations {
    match id {
        DiseaseId::LeafSpot => LEAF_SPOT,
        DiseaseId::Blight => BLIGHT,
        DiseaseId::Rust => RUST,
        DiseaseId::PowderyMildew => POWDERY_MILDEW,
        _ => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blight_gets_blight_fungicides() {
        let products = recommendations_for(DiseaseId::Blight);
        assert_eq!(products.pesticides[0].name, "Carbendazim");
        assert!(products.pesticides.iter().all(|p| p.kind == ProductKind::Pesticide));
        assert!(products.fertilizers.iter().all(|p| p.kind == ProductKind::Fertilizer));
    }

    #[test]
    fn unmapped_diseases_use_default_list() {
        assert_eq!(recommendations_for(DiseaseId::Thrips), DEFAULT);
        assert_eq!(recommendations_for(DiseaseId::Unknown), DEFAULT);
    }

    #[test]
    fn product_kind_serializes_as_type() {
        let value = serde_json::to_value(recommendations_for(DiseaseId::Rust)).unwrap();
        assert_eq!(value["fertilizers"][1]["type"], "fertilizer");
    }
}

//! Component type classification from names and node kinds.

use figura_core::{DesignNode, NodeKind};

use crate::model::ComponentType;

/// Classifies a component root by keyword, falling back to its kind.
pub struct ComponentClassifier {
    /// Keywords that suggest specific types, checked in order.
    type_keywords: Vec<(ComponentType, Vec<&'static str>)>,
}

impl ComponentClassifier {
    pub fn new() -> Self {
        Self {
            type_keywords: vec![
                (ComponentType::Button, vec!["button", "btn", "cta"]),
                (ComponentType::Input, vec!["input", "text field", "textfield", "search"]),
                (ComponentType::Card, vec!["card", "tile", "panel"]),
                (ComponentType::List, vec!["list", "feed", "timeline"]),
                (ComponentType::Navigation, vec!["nav", "menu", "tab bar", "tabbar", "breadcrumb"]),
                (ComponentType::Modal, vec!["modal", "dialog", "popup", "overlay"]),
                (ComponentType::Form, vec!["form"]),
                (ComponentType::Image, vec!["image", "img", "photo", "avatar"]),
                (ComponentType::Icon, vec!["icon"]),
            ],
        }
    }

    /// Classify a node by name, then by kind.
    pub fn classify(&self, node: &DesignNode) -> ComponentType {
        let name = node.name.to_lowercase();
        let by_name = self
            .type_keywords
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
            .map(|(ty, _)| *ty);
        if let Some(ty) = by_name {
            return ty;
        }

        match node.kind {
            NodeKind::Text => ComponentType::Text,
            _ if node.has_image_fill() => ComponentType::Image,
            kind if kind.is_container() => ComponentType::Container,
            _ => ComponentType::Shape,
        }
    }
}

impl Default for ComponentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

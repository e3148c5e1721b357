//! Display grouping: one group per main component, variants listed
//! separately inside each group since a set's variants may differ in
//! token usage.

use tether_core::types::collections::FxHashMap;

use crate::aggregate::types::{ComponentMatch, MatchGroup, VariantGroup};

/// Group accepted matches by main component id, preserving encounter
/// order. Loose components (no main component id) form their own group.
pub(crate) fn group_matches(matches: &[ComponentMatch]) -> Vec<MatchGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: FxHashMap<String, MatchGroup> = FxHashMap::default();

    for m in matches {
        let key = m.identity().to_string();
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            MatchGroup {
                key,
                name: m.component_name.clone(),
                variants: Vec::new(),
            }
        });
        match group
            .variants
            .iter_mut()
            .find(|v| v.variant_name == m.variant_name)
        {
            Some(variant) => variant.component_ids.push(m.component_id.clone()),
            None => group.variants.push(VariantGroup {
                variant_name: m.variant_name.clone(),
                component_ids: vec![m.component_id.clone()],
            }),
        }
    }

    order.into_iter().filter_map(|key| groups.remove(&key)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentKind, ComponentProperties};

    fn entry(id: &str, main: Option<&str>, variant: Option<&str>) -> ComponentMatch {
        let component = ComponentProperties {
            id: id.to_string(),
            name: "Button".to_string(),
            kind: ComponentKind::Component,
            main_component_id: main.map(str::to_string),
            variant_name: variant.map(str::to_string),
            colors: vec![],
            typography: vec![],
            spacing: vec![],
            effects: vec![],
            children: vec![],
        };
        ComponentMatch::from_details(&component, vec![])
    }

    #[test]
    fn variants_of_one_main_component_share_a_group() {
        let matches = vec![
            entry("1:1", Some("1:0"), Some("state=default")),
            entry("1:2", Some("1:0"), Some("state=hover")),
            entry("1:3", Some("1:0"), Some("state=default")),
        ];
        let groups = group_matches(&matches);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "1:0");
        assert_eq!(groups[0].variants.len(), 2);
        let default = &groups[0].variants[0];
        assert_eq!(default.variant_name.as_deref(), Some("state=default"));
        assert_eq!(default.component_ids, vec!["1:1", "1:3"]);
    }

    #[test]
    fn loose_component_is_its_own_group() {
        let matches = vec![
            entry("1:1", Some("1:0"), None),
            entry("9:9", None, None),
        ];
        let groups = group_matches(&matches);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].key, "9:9");
    }

    #[test]
    fn groups_preserve_encounter_order() {
        let matches = vec![
            entry("b:1", Some("b:0"), None),
            entry("a:1", Some("a:0"), None),
            entry("b:2", Some("b:0"), None),
        ];
        let groups = group_matches(&matches);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["b:0", "a:0"]);
    }
}

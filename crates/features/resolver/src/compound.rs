use crate::merged::MergedProps;
use bemkit_domain::{CompoundRule, ModifierValue};
use std::borrow::Cow;

/// A compound rule with its class list normalized at build time.
#[derive(Debug, Clone)]
pub(crate) struct Compound {
    conditions: Vec<(String, ModifierValue)>,
    classes: Vec<String>,
}

impl From<CompoundRule> for Compound {
    fn from(rule: CompoundRule) -> Self {
        Self { conditions: rule.modifiers.into_iter().collect(), classes: rule.class.into_vec() }
    }
}

impl Compound {
    /// AND over all conditions; a prop missing from both props and defaults never matches.
    pub(crate) fn matches(&self, props: &MergedProps<'_>) -> bool {
        self.conditions.iter().all(|(name, required)| props.get(name) == Some(required))
    }
}

/// Appends the classes of every matching rule, in declaration order.
pub(crate) fn append_compound_classes<'a>(
    rules: &'a [Compound],
    props: &MergedProps<'_>,
    tokens: &mut Vec<Cow<'a, str>>,
) {
    for rule in rules.iter().filter(|rule| rule.matches(props)) {
        tokens.extend(rule.classes.iter().map(|class| Cow::Borrowed(class.as_str())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemkit_domain::{Props, props};

    fn run(rules: &[Compound], props: &Props) -> Vec<String> {
        let defaults = Props::new();
        let merged = MergedProps::new(props, &defaults);
        let mut tokens = Vec::new();
        append_compound_classes(rules, &merged, &mut tokens);
        tokens.into_iter().map(Cow::into_owned).collect()
    }

    #[test]
    fn fires_only_when_every_condition_holds() {
        let rules = [Compound::from(
            CompoundRule::new("btn--danger-lg").when("tone", "danger").when("size", "lg"),
        )];

        assert_eq!(run(&rules, &props! { "tone" => "danger", "size" => "lg" }), ["btn--danger-lg"]);
        assert!(run(&rules, &props! { "tone" => "danger", "size" => "sm" }).is_empty());
        assert!(run(&rules, &props! { "tone" => "danger" }).is_empty());
    }

    #[test]
    fn several_rules_fire_in_order() {
        let rules = [
            Compound::from(CompoundRule::new(["b", "c"]).when("open", true)),
            Compound::from(CompoundRule::new("a").when("open", true)),
            Compound::from(CompoundRule::new("never").when("open", false)),
        ];

        assert_eq!(run(&rules, &props! { "open" => true }), ["b", "c", "a"]);
    }

    #[test]
    fn unconditional_rule_always_fires() {
        let rules = [Compound::from(CompoundRule::new("always"))];
        assert_eq!(run(&rules, &Props::new()), ["always"]);
    }

    #[test]
    fn comparison_is_strict() {
        let rules = [Compound::from(CompoundRule::new("lvl-1").when("level", 1))];
        assert!(run(&rules, &props! { "level" => "1" }).is_empty());
        assert_eq!(run(&rules, &props! { "level" => 1 }), ["lvl-1"]);
    }
}

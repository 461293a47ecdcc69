use bemkit_classes::ClassName;
use bemkit_domain::{CompoundRule, Props};
use bemkit_resolver::BemElement;
use proptest::prelude::*;

const SIZES: [&str; 3] = ["sm", "md", "lg"];
const TONES: [&str; 3] = ["info", "warn", "error"];

fn resolver(compound_classes: &[String]) -> BemElement {
    let mut builder = BemElement::builder("box").modifier("size", SIZES).modifier("tone", TONES);
    for (i, class) in compound_classes.iter().enumerate() {
        builder = builder.compound(CompoundRule::new(class.as_str()).when("size", SIZES[i % SIZES.len()]));
    }
    builder.build().expect("resolver")
}

fn props_strategy() -> impl Strategy<Value = Props> {
    (
        proptest::option::of(proptest::sample::select(SIZES.to_vec())),
        proptest::option::of(proptest::sample::select(TONES.to_vec())),
        proptest::option::of("[a-z]{1,5}"),
    )
        .prop_map(|(size, tone, noise)| {
            let mut props = Props::new();
            if let Some(size) = size {
                props.set("size", size);
            }
            if let Some(tone) = tone {
                props.set("tone", tone);
            }
            if let Some(noise) = noise {
                props.set("unknown", noise);
            }
            props
        })
}

proptest! {
    #[test]
    fn tokens_are_strictly_increasing(
        compounds in proptest::collection::vec("box(--[a-z]{1,3})?", 0..6),
        props in props_strategy(),
    ) {
        let class = resolver(&compounds).with(&props);
        let tokens: Vec<&str> = class.split(' ').collect();
        prop_assert!(tokens.windows(2).all(|w| w[0] < w[1]), "not strictly sorted: {}", class);
        prop_assert!(tokens.contains(&"box"));
    }

    #[test]
    fn resolution_is_idempotent(props in props_strategy()) {
        let resolver = resolver(&["box--x".to_owned()]);
        prop_assert_eq!(resolver.with(&props), resolver.with(&props));
    }

    #[test]
    fn unknown_keys_never_change_output(props in props_strategy(), noise in "[a-z]{1,8}") {
        let resolver = resolver(&[]);
        let noisy = props.clone().with("unrelated", noise);
        prop_assert_eq!(resolver.with(&props), resolver.with(&noisy));
    }
}

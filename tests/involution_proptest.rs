//! Property-based tests: mirroring twice gives back the input
//!
//! Every rewrite the engine performs is its own inverse, so for the inputs it
//! fully understands `flip(flip(x)) == x`.

use cssjanus::{flip_lines, MirrorOptions};
use proptest::prelude::*;

fn flip(line: &str) -> String {
    flip_lines(&[line], &MirrorOptions::default())
        .unwrap()
        .remove(0)
}

fn side() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("left"), Just("right")]
}

fn quantity() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("-")],
        0u32..1000,
        prop_oneof![Just(""), Just("px"), Just("em"), Just("%"), Just("pt")],
    )
        .prop_map(|(sign, value, unit)| format!("{sign}{value}{unit}"))
}

fn length() -> impl Strategy<Value = String> {
    (1u32..100, prop_oneof![Just("px"), Just("em")])
        .prop_map(|(value, unit)| format!("{value}{unit}"))
}

proptest! {
    #[test]
    fn float_flips_back(s in side()) {
        let line = format!(".a {{ float: {s} }}");
        let once = flip(&line);
        prop_assert_ne!(&once, &line);
        prop_assert_eq!(flip(&once), line);
    }

    #[test]
    fn padding_side_flips_back(s in side(), value in length()) {
        let line = format!("padding-{s}: {value}");
        prop_assert_eq!(flip(&flip(&line)), line);
    }

    #[test]
    fn four_part_notation_flips_back(values in prop::collection::vec(quantity(), 4)) {
        let line = format!("margin: {}", values.join(" "));
        let once = flip(&line);
        let expected = format!(
            "margin: {} {} {} {}",
            values[0], values[3], values[2], values[1]
        );
        prop_assert_eq!(&once, &expected);
        prop_assert_eq!(flip(&once), line);
    }

    #[test]
    fn border_radius_flips_back(values in prop::collection::vec(length(), 2..=4usize)) {
        prop_assume!(values.len() != 3);
        let line = format!("border-radius: {}", values.join(" "));
        prop_assert_eq!(flip(&flip(&line)), line);
    }

    #[test]
    fn background_percentage_flips_back(x in 0u32..=100, y in 0u32..=100) {
        let line = format!("background-position: {x}% {y}%");
        let once = flip(&line);
        prop_assert_eq!(&once, &format!("background-position: {}% {y}%", 100 - x));
        prop_assert_eq!(flip(&once), line);
    }

    #[test]
    fn cursor_flips_back(
        prefix in prop_oneof![Just(""), Just("n"), Just("s")],
        east in any::<bool>(),
    ) {
        let direction = if east { "e" } else { "w" };
        let line = format!("cursor: {prefix}{direction}-resize");
        prop_assert_eq!(flip(&flip(&line)), line);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use cmdtree::{execute_quiet, resolve, ArgSet, CmdError, Command};
use proptest::prelude::*;

fn string_args(count: usize) -> (ArgSet, Vec<cmdtree::Slot<String>>) {
    let mut args = ArgSet::new();
    let slots = (0..count)
        .map(|i| args.string(&format!("arg{i}"), "positional"))
        .collect();
    (args, slots)
}

/// root -> {a -> {b, c}, d}
fn tree() -> Command {
    Command::new("root")
        .subcommand(
            Command::new("a")
                .subcommand(Command::new("b").runner_fn(|| Ok(())))
                .subcommand(Command::new("c").runner_fn(|| Ok(()))),
        )
        .subcommand(Command::new("d").runner_fn(|| Ok(())))
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        Just("d".to_string()),
        "[a-z-]{0,4}",
    ]
}

proptest! {
    #[test]
    fn prop_wrong_count_is_length_mismatch(
        declared in 0usize..6,
        tokens in prop::collection::vec(".*", 0..8),
    ) {
        prop_assume!(tokens.len() != declared);
        let (mut args, slots) = string_args(declared);

        let err = args.parse(&tokens).unwrap_err();
        let is_mismatch = matches!(
            err,
            CmdError::ArgLengthMismatch { expected, actual }
                if expected == declared && actual == tokens.len()
        );
        prop_assert!(is_mismatch);
        prop_assert!(!args.is_parsed());
        prop_assert!(slots.iter().all(|s| !s.is_set()));
    }

    #[test]
    fn prop_right_count_of_strings_always_parses(
        tokens in prop::collection::vec(".*", 0..8),
    ) {
        let (mut args, slots) = string_args(tokens.len());
        args.parse(&tokens).unwrap();
        prop_assert!(args.is_parsed());
        for (slot, token) in slots.iter().zip(&tokens) {
            prop_assert_eq!(slot.get(), Some(token.clone()));
        }
    }

    #[test]
    fn prop_bad_token_keeps_earlier_slots(
        good in prop::collection::vec("[0-9]{1,5}", 0..5),
        bad in "[a-z]{1,5}",
    ) {
        let mut args = ArgSet::new();
        let slots: Vec<_> = (0..=good.len())
            .map(|i| args.uint64(&format!("n{i}"), "number"))
            .collect();
        let mut tokens = good.clone();
        tokens.push(bad);

        let err = args.parse(&tokens).unwrap_err();
        let failed_at_last = matches!(
            err,
            CmdError::ArgConversion { index, .. } if index == good.len()
        );
        prop_assert!(failed_at_last);
        prop_assert!(!args.is_parsed());
        for (slot, token) in slots.iter().zip(&good) {
            prop_assert_eq!(slot.get(), Some(token.parse::<u64>().unwrap()));
        }
        prop_assert!(!slots[good.len()].is_set());
    }

    #[test]
    fn prop_resolution_consumes_only_matching_prefix(
        tokens in prop::collection::vec(token(), 0..10),
    ) {
        let root = tree();
        let (node, rest) = resolve(&root, &tokens);
        let consumed = tokens.len() - rest.len();
        prop_assert!(consumed <= 2);
        prop_assert_eq!(&tokens[consumed..], rest);

        if consumed > 0 {
            prop_assert_eq!(node.name(), tokens[consumed - 1].as_str());
        } else {
            prop_assert_eq!(node.name(), "root");
        }
        if let Some(next) = rest.first() {
            prop_assert!(node.find_subcommand(next).is_none());
        }
    }

    #[test]
    fn prop_internal_node_never_runs(
        tokens in prop::collection::vec(token(), 0..10),
    ) {
        let mut root = tree();
        let target = resolve(&root, &tokens).0.name().to_string();
        let result = execute_quiet(&mut root, &tokens);
        if target == "root" || target == "a" {
            prop_assert!(result.unwrap_err().is_usage());
        }
    }
}

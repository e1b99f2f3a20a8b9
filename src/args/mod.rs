// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Positional argument sets
//!
//! An [`ArgSet`] is an ordered list of declared positional args. Each
//! registration returns a typed [`Slot`] that receives the converted token
//! once [`ArgSet::parse`] succeeds for that position.
//!
//! Parsing is exact: the token count must equal the number of registered args.
//! Conversion runs in registration order and stops at the first failure.
//! Slots written before the failing position keep their new values.

pub mod convert;
pub mod slot;

use std::fmt;
use std::time::Duration;

use crate::error::{CmdError, Result};

pub use convert::{Convert, Kind};
pub use slot::Slot;
use slot::SlotWriter;

/// Declaration of a single positional arg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: String,
    pub description: String,
    pub kind: Kind,
}

struct Arg {
    spec: ArgSpec,
    writer: Box<dyn SlotWriter>,
}

/// Ordered set of typed positional args
#[derive(Default)]
pub struct ArgSet {
    args: Vec<Arg>,
    parsed: bool,
}

impl ArgSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the next positional arg and get the slot it will be written to.
    pub fn register<T: Convert>(&mut self, name: &str, description: &str) -> Slot<T> {
        let slot = Slot::<T>::empty();
        self.args.push(Arg {
            spec: ArgSpec {
                name: name.to_string(),
                description: description.to_string(),
                kind: T::KIND,
            },
            writer: Box::new(slot.clone()),
        });
        slot
    }

    pub fn bool(&mut self, name: &str, description: &str) -> Slot<bool> {
        self.register(name, description)
    }

    pub fn duration(&mut self, name: &str, description: &str) -> Slot<Duration> {
        self.register(name, description)
    }

    pub fn float64(&mut self, name: &str, description: &str) -> Slot<f64> {
        self.register(name, description)
    }

    pub fn int(&mut self, name: &str, description: &str) -> Slot<isize> {
        self.register(name, description)
    }

    pub fn int64(&mut self, name: &str, description: &str) -> Slot<i64> {
        self.register(name, description)
    }

    pub fn string(&mut self, name: &str, description: &str) -> Slot<String> {
        self.register(name, description)
    }

    pub fn uint(&mut self, name: &str, description: &str) -> Slot<usize> {
        self.register(name, description)
    }

    pub fn uint64(&mut self, name: &str, description: &str) -> Slot<u64> {
        self.register(name, description)
    }

    /// Convert `tokens` into the registered slots.
    ///
    /// Fails with [`CmdError::ArgLengthMismatch`] before touching any slot when
    /// the count is wrong, and with [`CmdError::ArgConversion`] at the first
    /// token that does not convert. There is no rollback of earlier slots.
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<()> {
        if tokens.len() != self.args.len() {
            return Err(CmdError::ArgLengthMismatch {
                expected: self.args.len(),
                actual: tokens.len(),
            });
        }

        for (index, (arg, token)) in self.args.iter().zip(tokens).enumerate() {
            let token = token.as_ref();
            tracing::trace!(index, name = %arg.spec.name, token, "converting positional arg");
            arg.writer
                .write(token)
                .map_err(|source| CmdError::ArgConversion {
                    index,
                    name: arg.spec.name.clone(),
                    source,
                })?;
        }

        self.parsed = true;
        Ok(())
    }

    /// Arg names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.args.iter().map(|a| a.spec.name.clone()).collect()
    }

    /// Arg descriptions in registration order.
    pub fn descriptions(&self) -> Vec<String> {
        self.args.iter().map(|a| a.spec.description.clone()).collect()
    }

    pub fn specs(&self) -> impl Iterator<Item = &ArgSpec> + '_ {
        self.args.iter().map(|a| &a.spec)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// True only after a fully successful [`ArgSet::parse`].
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }
}

impl fmt::Debug for ArgSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgSet")
            .field("specs", &self.specs().collect::<Vec<_>>())
            .field("parsed", &self.parsed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_parse_every_kind() {
        let mut args = ArgSet::new();
        let b = args.bool("skipped", "this is how we skip it");
        let d = args.duration("how long", "this is how long we skip");
        let f = args.float64("pi", "what is pi");
        let i = args.int("an int", "make this 10");
        let i64_ = args.int64("an int64", "make this 1000000");
        let s = args.string("bobbyjones", "no idea");
        let u = args.uint("a uint", "some uint");
        let u64_ = args.uint64("a uint64", "some uint64");

        args.parse(&[
            "true",
            "10s",
            "10.5",
            "10",
            "1000000",
            "bobby jones lived here",
            "15",
            "16",
        ])
        .unwrap();

        assert_eq!(b.get(), Some(true));
        assert_eq!(d.get(), Some(Duration::from_secs(10)));
        assert_eq!(f.get(), Some(10.5));
        assert_eq!(i.get(), Some(10));
        assert_eq!(i64_.get(), Some(1_000_000));
        assert_eq!(s.get().as_deref(), Some("bobby jones lived here"));
        assert_eq!(u.get(), Some(15));
        assert_eq!(u64_.get(), Some(16));
        assert!(args.is_parsed());
    }

    #[test]
    fn test_length_mismatch_touches_nothing() {
        let mut args = ArgSet::new();
        let hello = args.bool("hello", "world");
        let bye = args.uint64("bye", "now");

        let err = args.parse(&["short"]).unwrap_err();
        assert!(matches!(
            err,
            CmdError::ArgLengthMismatch {
                expected: 2,
                actual: 1
            }
        ));

        let err = args.parse(&["true", "1", "now"]).unwrap_err();
        assert!(matches!(
            err,
            CmdError::ArgLengthMismatch {
                expected: 2,
                actual: 3
            }
        ));

        assert!(!hello.is_set());
        assert!(!bye.is_set());
        assert!(!args.is_parsed());
    }

    #[test]
    fn test_conversion_failure_is_not_rolled_back() {
        let mut args = ArgSet::new();
        let first = args.string("first", "");
        let second = args.int("second", "");
        let third = args.string("third", "");

        let err = args.parse(&["kept", "12.5", "never"]).unwrap_err();
        match err {
            CmdError::ArgConversion {
                index,
                name,
                source,
            } => {
                assert_eq!(index, 1);
                assert_eq!(name, "second");
                assert!(matches!(source, ConvertError::Int { .. }));
            }
            other => panic!("expected ArgConversion, got {other:?}"),
        }

        assert_eq!(first.get().as_deref(), Some("kept"));
        assert!(!second.is_set());
        assert!(!third.is_set());
        assert!(!args.is_parsed());
    }

    #[test]
    fn test_each_kind_reports_its_error() {
        let cases: [(fn(&mut ArgSet), &str); 7] = [
            (|a: &mut ArgSet| { a.bool("v", ""); }, "wat"),
            (|a: &mut ArgSet| { a.duration("v", ""); }, "uhhh"),
            (|a: &mut ArgSet| { a.float64("v", ""); }, "uhhh"),
            (|a: &mut ArgSet| { a.int("v", ""); }, "12.5"),
            (|a: &mut ArgSet| { a.int64("v", ""); }, "12.5"),
            (|a: &mut ArgSet| { a.uint("v", ""); }, "12.5"),
            (|a: &mut ArgSet| { a.uint64("v", ""); }, "12.5"),
        ];

        for (register, token) in cases {
            let mut args = ArgSet::new();
            register(&mut args);
            let err = args.parse(&[token]).unwrap_err();
            assert!(
                matches!(err, CmdError::ArgConversion { index: 0, .. }),
                "token {token} gave {err:?}"
            );
            assert!(!args.is_parsed());
        }
    }

    #[test]
    fn test_names_and_descriptions_keep_order() {
        let mut args = ArgSet::new();
        args.string("number", "the phone number");
        args.string("message", "the message to send");

        assert_eq!(args.names(), vec!["number", "message"]);
        assert_eq!(
            args.descriptions(),
            vec!["the phone number", "the message to send"]
        );
        assert_eq!(args.len(), 2);
        let kinds: Vec<Kind> = args.specs().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![Kind::String, Kind::String]);
    }

    #[test]
    fn test_empty_set_accepts_no_tokens() {
        let mut args = ArgSet::new();
        assert!(args.is_empty());
        args.parse::<&str>(&[]).unwrap();
        assert!(args.is_parsed());
    }

    #[test]
    fn test_parse_accepts_owned_strings() {
        let mut args = ArgSet::new();
        let n = args.uint64("n", "");
        let tokens = vec!["99".to_string()];
        args.parse(&tokens).unwrap();
        assert_eq!(n.get(), Some(99));
    }
}

//! Drop effect vocabulary and the allowed-effects token encoding.
//!
//! A drag source advertises which transfer effects it allows; the platform
//! expects that set collapsed into a single canonical token written into the
//! transfer carrier's allowed-effects field. [`AllowedEffects`] owns the
//! canonicalization (dedup and sort) and the token rule.

use crate::constants::{EFFECT_TOKEN_ALL, EFFECT_TOKEN_NONE};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic operation a drop will perform, negotiated between source and
/// target.
///
/// Variant order matches the lexicographic order of the platform names,
/// which the token encoding relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    Copy,
    Link,
    Move,
}

impl DropEffect {
    /// Platform name of this effect
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Link => "link",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for DropEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropEffect {
    type Err = ConfigError;

    fn from_str(name: &str) -> ConfigResult<Self> {
        match name {
            "copy" => Ok(Self::Copy),
            "link" => Ok(Self::Link),
            "move" => Ok(Self::Move),
            _ => Err(ConfigError::UnknownEffect {
                name: name.to_string(),
            }),
        }
    }
}

/// Canonical set of effects a drag source allows.
///
/// Construction dedupes and sorts, so the encoded token is independent of
/// input order and repetition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedEffects {
    effects: Vec<DropEffect>,
}

impl AllowedEffects {
    /// The empty set; encodes as `"none"`
    pub fn none() -> Self {
        Self::default()
    }

    /// The full move/copy/link set; encodes as `"all"`
    pub fn all() -> Self {
        Self::from_iter([DropEffect::Copy, DropEffect::Link, DropEffect::Move])
    }

    /// Parse a set from platform effect names.
    pub fn parse<I, S>(names: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| DropEffect::from_str(name.as_ref()))
            .collect()
    }

    /// Whether the set contains `effect`
    pub fn contains(&self, effect: DropEffect) -> bool {
        self.effects.contains(&effect)
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Canonical token for the carrier's allowed-effects field.
    ///
    /// - empty set: `"none"`
    /// - one effect: its name
    /// - all three effects: `"all"`
    /// - otherwise: names sorted ascending, the first emitted verbatim, each
    ///   subsequent one appended with its first character upper-cased
    ///   (`"copyMove"`)
    pub fn token(&self) -> String {
        match self.effects.as_slice() {
            [] => EFFECT_TOKEN_NONE.to_string(),
            [single] => single.as_str().to_string(),
            [_, _, _] => EFFECT_TOKEN_ALL.to_string(),
            sorted => {
                let mut token = String::new();
                for effect in sorted {
                    if token.is_empty() {
                        token.push_str(effect.as_str());
                    } else {
                        token.push_str(&capitalize(effect.as_str()));
                    }
                }
                token
            }
        }
    }
}

impl FromIterator<DropEffect> for AllowedEffects {
    fn from_iter<I: IntoIterator<Item = DropEffect>>(iter: I) -> Self {
        let mut effects: Vec<DropEffect> = iter.into_iter().collect();
        effects.sort();
        effects.dedup();
        Self { effects }
    }
}

impl From<DropEffect> for AllowedEffects {
    fn from(effect: DropEffect) -> Self {
        Self {
            effects: vec![effect],
        }
    }
}

impl From<Vec<DropEffect>> for AllowedEffects {
    fn from(effects: Vec<DropEffect>) -> Self {
        effects.into_iter().collect()
    }
}

impl<const N: usize> From<[DropEffect; N]> for AllowedEffects {
    fn from(effects: [DropEffect; N]) -> Self {
        effects.into_iter().collect()
    }
}

impl From<&[DropEffect]> for AllowedEffects {
    fn from(effects: &[DropEffect]) -> Self {
        effects.iter().copied().collect()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

//! Materialised tree paths.
//!
//! A path is a concatenation of fixed-width base-36 steps, one per level, so
//! `"0001"` is the tree root, `"00010001"` its first child, and so on. Ancestor
//! and descendant checks are prefix comparisons, which is what lets a store
//! answer "descendant of" with a single indexed range scan.

use serde::{Deserialize, Serialize};

use crate::constants::TREE_PATH_STEP_LEN;
use crate::errors::{AlmanacError, AlmanacResult};

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MAX_STEP: u32 = 36u32.pow(TREE_PATH_STEP_LEN as u32) - 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreePath(String);

impl TreePath {
    /// Path of the tree root.
    pub fn root() -> Self {
        Self(encode_step(1))
    }

    pub fn parse(raw: &str) -> AlmanacResult<Self> {
        let invalid = |reason: &str| AlmanacError::InvalidPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };
        if raw.is_empty() {
            return Err(invalid("empty path"));
        }
        if raw.len() % TREE_PATH_STEP_LEN != 0 {
            return Err(invalid("length is not a multiple of the step width"));
        }
        if !raw.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(invalid("characters outside [0-9A-Z]"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Path of the `index`-th child (1-based) of this node.
    pub fn child(&self, index: u32) -> AlmanacResult<Self> {
        if index == 0 || index > MAX_STEP {
            return Err(AlmanacError::InvalidPath {
                path: self.0.clone(),
                reason: format!("child index {index} out of range 1..={MAX_STEP}"),
            });
        }
        Ok(Self(format!("{}{}", self.0, encode_step(index))))
    }

    /// Number of steps. The root has depth 1.
    pub fn depth(&self) -> usize {
        self.0.len() / TREE_PATH_STEP_LEN
    }

    pub fn is_root(&self) -> bool {
        self.depth() == 1
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - TREE_PATH_STEP_LEN].to_string()))
        }
    }

    /// Strict descendant: `self` lies somewhere below `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &TreePath) -> bool {
        self.0.len() > ancestor.0.len() && self.0.starts_with(&ancestor.0)
    }

    pub fn is_child_of(&self, parent: &TreePath) -> bool {
        self.depth() == parent.depth() + 1 && self.is_descendant_of(parent)
    }

    /// All strict ancestors, from the root downwards.
    pub fn ancestors(&self) -> Vec<TreePath> {
        (1..self.depth())
            .map(|depth| Self(self.0[..depth * TREE_PATH_STEP_LEN].to_string()))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn encode_step(mut value: u32) -> String {
    let mut buf = [b'0'; TREE_PATH_STEP_LEN];
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    buf.iter().map(|&b| b as char).collect()
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TreePath {
    type Error = AlmanacError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TreePath> for String {
    fn from(path: TreePath) -> Self {
        path.0
    }
}

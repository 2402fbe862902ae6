//! Surface Value Object
//!
//! Identifies which of the three front ends a remember-me entry belongs
//! to. The set is closed: the ledger is scoped per surface and entries
//! never leak across surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Front-end surface tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Desktop,
    Terminal,
    Web,
}

/// Error returned when parsing an unknown surface tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown surface '{0}'")]
pub struct SurfaceParseError(pub String);

impl Surface {
    /// All known surfaces, in declaration order
    pub const ALL: [Surface; 3] = [Surface::Desktop, Surface::Terminal, Surface::Web];

    /// Stable tag used as the ledger discriminator column
    pub const fn as_str(&self) -> &'static str {
        match self {
            Surface::Desktop => "desktop",
            Surface::Terminal => "terminal",
            Surface::Web => "web",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = SurfaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Surface::Desktop),
            "terminal" => Ok(Surface::Terminal),
            "web" => Ok(Surface::Web),
            other => Err(SurfaceParseError(other.to_string())),
        }
    }
}

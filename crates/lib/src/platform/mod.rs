//! Target platform identifiers.
//!
//! The set of platforms is closed: descriptors key their platform-specific
//! data by [`PlatformId`], and unknown platform names are rejected when parsed.

pub mod arch;
pub mod os;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use arch::Arch;
use os::Os;

/// A supported target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlatformId {
  Win64,
  Mac,
  Linux,
  LinuxArm64,
}

/// Error returned when a platform name is not part of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform '{name}' (expected one of: {})", supported_names())]
pub struct ParsePlatformError {
  pub name: String,
}

fn supported_names() -> String {
  PlatformId::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
}

impl PlatformId {
  /// Every supported platform, in a stable order.
  pub const ALL: [PlatformId; 4] = [Self::Win64, Self::Mac, Self::Linux, Self::LinuxArm64];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Win64 => "Win64",
      Self::Mac => "Mac",
      Self::Linux => "Linux",
      Self::LinuxArm64 => "LinuxArm64",
    }
  }

  pub fn os(&self) -> Os {
    match self {
      Self::Win64 => Os::Windows,
      Self::Mac => Os::MacOs,
      Self::Linux | Self::LinuxArm64 => Os::Linux,
    }
  }

  pub fn arch(&self) -> Arch {
    match self {
      Self::Win64 | Self::Linux => Arch::X86_64,
      Self::Mac => Arch::Universal,
      Self::LinuxArm64 => Arch::Aarch64,
    }
  }

  /// Returns the platform triple string (e.g., "x86_64-windows")
  pub fn triple(&self) -> String {
    format!("{}-{}", self.arch(), self.os())
  }

  /// Map the host system onto a supported platform.
  ///
  /// Returns `None` if the host is not one of the supported platforms.
  pub fn current() -> Option<Self> {
    match (Os::current()?, Arch::current()?) {
      (Os::Windows, Arch::X86_64) => Some(Self::Win64),
      (Os::MacOs, _) => Some(Self::Mac),
      (Os::Linux, Arch::X86_64) => Some(Self::Linux),
      (Os::Linux, Arch::Aarch64) => Some(Self::LinuxArm64),
      _ => None,
    }
  }
}

impl fmt::Display for PlatformId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for PlatformId {
  type Err = ParsePlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|p| p.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| ParsePlatformError { name: s.to_string() })
  }
}

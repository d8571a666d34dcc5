use std::fmt;

use serde::{Deserialize, Serialize};

/// CPU architectures a plan can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
  X86_64,
  Aarch64,
  /// Fat binaries covering several architectures at once.
  Universal,
}

impl Arch {
  /// Detect the host CPU architecture at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::ARCH {
      "x86_64" => Some(Self::X86_64),
      "aarch64" => Some(Self::Aarch64),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::Aarch64 => "aarch64",
      Self::Universal => "universal",
    }
  }

  /// The architecture tag used in third-party library file names.
  ///
  /// Universal binaries have no single tag, so `None` is returned.
  pub fn library_tag(&self) -> Option<&'static str> {
    match self {
      Self::X86_64 => Some("x64"),
      Self::Aarch64 => Some("arm64"),
      Self::Universal => None,
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

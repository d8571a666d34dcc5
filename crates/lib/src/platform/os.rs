use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating system families a plan can target.
///
/// The family decides the library naming convention: prefixes, archive and
/// shared-object extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the host operating system at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
    }
  }

  /// File name prefix for libraries (`lib` on Unix-likes).
  pub fn library_prefix(&self) -> &'static str {
    match self {
      Self::Windows => "",
      Self::Linux | Self::MacOs => "lib",
    }
  }

  /// Extension of a static archive, or of an import library on Windows.
  pub fn static_library_extension(&self) -> &'static str {
    match self {
      Self::Windows => "lib",
      Self::Linux | Self::MacOs => "a",
    }
  }

  /// Extension of a shared library loaded at runtime.
  pub fn shared_library_extension(&self) -> &'static str {
    match self {
      Self::Windows => "dll",
      Self::Linux => "so",
      Self::MacOs => "dylib",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

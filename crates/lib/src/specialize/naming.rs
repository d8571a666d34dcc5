//! Library file-name synthesis.
//!
//! A pure mapping from (platform, library template) to concrete file names.
//! The stem is the base name followed by the present qualifiers, joined with
//! `-`; the platform's OS family then decides prefix and extensions:
//!
//! | family  | prefix | static / import | shared   |
//! |---------|--------|-----------------|----------|
//! | Windows |        | `.lib`          | `.dll`   |
//! | macOS   | `lib`  | `.a`            | `.dylib` |
//! | Linux   | `lib`  | `.a`            | `.so`    |
//!
//! On Windows a shared library is linked through its `.lib` import library;
//! elsewhere the shared object itself is handed to the linker.

use thiserror::Error;

use crate::consts::QUALIFIER_SEPARATOR;
use crate::descriptor::{ArchQualifier, LibrarySpec, LinkKind};
use crate::platform::PlatformId;
use crate::platform::os::Os;

/// Concrete file names for one library on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFileNames {
  /// The file handed to the linker.
  pub link: String,
  /// The shared artifact loaded at runtime, staged when requested.
  pub shared: String,
}

/// A library template that cannot be turned into a file name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
  #[error("library base name is empty")]
  EmptyName,

  #[error("library '{library}' has an empty {component} qualifier")]
  EmptyQualifier { library: String, component: &'static str },

  #[error("library '{library}' needs an architecture tag but {platform} has none")]
  NoArchitectureTag { library: String, platform: PlatformId },
}

/// The name stem shared by all files of a library, e.g. `boost_atomic-vc143-mt-x64-1_81`.
pub fn library_stem(platform: PlatformId, spec: &LibrarySpec) -> Result<String, NamingError> {
  if spec.name.trim().is_empty() {
    return Err(NamingError::EmptyName);
  }

  let q = &spec.qualifiers;
  let arch = match &q.arch {
    None => None,
    Some(ArchQualifier::Literal(tag)) => Some(tag.as_str()),
    Some(ArchQualifier::Platform) => Some(platform.arch().library_tag().ok_or_else(|| {
      NamingError::NoArchitectureTag {
        library: spec.name.clone(),
        platform,
      }
    })?),
  };

  let components = [
    ("toolset", q.toolset.as_deref()),
    ("threading", q.threading.as_deref()),
    ("architecture", arch),
    ("version", q.version.as_deref()),
  ];

  let mut parts = vec![spec.name.as_str()];
  for (component, value) in components {
    match value {
      None => {}
      Some(v) if v.trim().is_empty() => {
        return Err(NamingError::EmptyQualifier {
          library: spec.name.clone(),
          component,
        });
      }
      Some(v) => parts.push(v),
    }
  }

  Ok(parts.join(QUALIFIER_SEPARATOR))
}

/// Synthesize the link and shared file names of a library for a platform.
pub fn library_file_names(platform: PlatformId, spec: &LibrarySpec) -> Result<LibraryFileNames, NamingError> {
  let os = platform.os();
  let stem = library_stem(platform, spec)?;
  let base = format!("{}{}", os.library_prefix(), stem);

  let shared = format!("{}.{}", base, os.shared_library_extension());
  let link = match (spec.link, os) {
    (LinkKind::Static, _) | (LinkKind::Shared, Os::Windows) => {
      format!("{}.{}", base, os.static_library_extension())
    }
    (LinkKind::Shared, _) => shared.clone(),
  };

  Ok(LibraryFileNames { link, shared })
}

/// Join a directory and a file name with `/`, independent of the host OS.
pub fn join_path(directory: &str, file: &str) -> String {
  let directory = directory.trim_end_matches(['/', '\\']);
  if directory.is_empty() {
    file.to_string()
  } else {
    format!("{}/{}", directory, file)
  }
}

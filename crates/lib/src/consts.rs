/// Token standing for the directory the final binary is written to.
pub const TARGET_OUTPUT_DIR: &str = "$(TargetOutputDir)";

/// Separator between a library's base name and its qualifiers.
pub const QUALIFIER_SEPARATOR: &str = "-";

/// Length of the truncated plan fingerprint.
pub const PLAN_HASH_PREFIX_LEN: usize = 20;

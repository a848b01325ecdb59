//! Default configuration values

/// Module manifest, read from the project directory
pub const MODULE_FILE: &str = "module.json";

/// Resolution document refreshed by the resolver tool
pub const RESOLVE_FILE: &str = "module-resolve.json";

/// Directory holding compiled package artifacts
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Extension of compiled package artifacts
pub const DEFAULT_ARTIFACT_EXT: &str = "cjo";

/// Resolver tool that refreshes the resolution document
pub const DEFAULT_RESOLVER: &str = "cpm";

/// Resolver subcommand used for the refresh
pub const RESOLVER_UPDATE_SUBCOMMAND: &str = "update";

/// Compiler used for dependency scans
pub const DEFAULT_COMPILER: &str = "cjc";

/// Compiler flag selecting dependency-scan mode
pub const SCAN_FLAG: &str = "--scan-dependency";

/// Module name passed to the compiler scan.
///
/// Deliberately independent of `module.json`.
pub const DEFAULT_SCAN_MODULE: &str = "circuits";

/// Package declared at the top of a bundle
pub const DEFAULT_BUNDLE_PACKAGE: &str = "code";

/// Import declared at the top of a bundle
pub const DEFAULT_BUNDLE_IMPORT: &str = "core.*";

/// Bundle file name, relative to the source directory
pub const DEFAULT_BUNDLE_OUTPUT: &str = "code.cj";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;

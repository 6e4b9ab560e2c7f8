//! Debian mirror addressing for package-contents indices.

use anyhow::{Result, bail};

/// Default Debian mirror base URL.
pub const DEFAULT_MIRROR: &str = "http://ftp.uk.debian.org/debian";

/// Default distribution suite.
pub const DEFAULT_SUITE: &str = "stable";

/// Archive component the contents index is read from.
const COMPONENT: &str = "main";

/// Architectures the Debian archive publishes a contents index for.
pub const SUPPORTED_ARCHITECTURES: &[&str] = &[
    "amd64", "arm64", "armel", "armhf", "i386", "mips", "mips64el", "mipsel", "ppc64el", "riscv64",
    "s390x",
];

/// Rejects architecture identifiers the archive does not publish.
/// Called before any network activity.
pub fn validate_architecture(arch: &str) -> Result<()> {
    if !SUPPORTED_ARCHITECTURES.contains(&arch) {
        bail!(
            "unsupported architecture {:?}; supported architectures: {}",
            arch,
            SUPPORTED_ARCHITECTURES.join(", ")
        );
    }
    Ok(())
}

/// Builds the URL of the `Contents-<arch>.gz` index on the given mirror.
pub fn contents_url(mirror: &str, suite: &str, arch: &str) -> String {
    format!(
        "{}/dists/{}/{}/Contents-{}.gz",
        mirror.trim_end_matches('/'),
        suite,
        COMPONENT,
        arch
    )
}

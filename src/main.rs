use anyhow::Result;
use clap::Parser;
use pkgstats::application::{TopPackagesOptions, top_packages};
use pkgstats::mirror;

/// pkgstats - Debian package statistics
///
/// Downloads the Contents index for the given architecture from a Debian
/// mirror and prints the packages that own the most files, one
/// "<package> <count>" pair per line.
///
/// Examples:
///   pkgstats amd64          # Top 10 packages for amd64
///   pkgstats arm64 -n 25    # Top 25 packages for arm64
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Target architecture (e.g. amd64, arm64, i386)
    #[arg(value_name = "ARCH")]
    arch: String,

    /// Number of packages to report
    #[arg(
        short = 'n',
        long = "top",
        value_name = "N",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    top: u32,

    /// Debian mirror base URL (also via PKGSTATS_MIRROR)
    #[arg(
        long = "mirror",
        env = "PKGSTATS_MIRROR",
        value_name = "URL",
        default_value = mirror::DEFAULT_MIRROR
    )]
    mirror: String,

    /// Distribution suite to query
    #[arg(long = "suite", value_name = "SUITE", default_value = mirror::DEFAULT_SUITE)]
    suite: String,

    /// Keep the downloaded index in the current directory
    #[arg(short = 'k', long = "keep")]
    keep: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let options = TopPackagesOptions {
        mirror: cli.mirror,
        suite: cli.suite,
        keep_download: cli.keep,
    };
    let statistics = top_packages(&cli.arch, cli.top as usize, &options).await?;

    for entry in &statistics.top {
        println!("{} {}", entry.name, entry.files);
    }
    Ok(())
}

//! gittime: estimate programming time with prompts of git metadata
//!
//! This binary walks a commit range, shows each commit's metadata and
//! line changes alongside a default time estimate, and accumulates the
//! user's confirmed or overridden estimates into a grand total.

use clap::Parser;

mod app;
mod config;
mod render;
mod workdir;

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so prompts on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    app::run(&config)
}

use std::sync::Arc;

use clap::Parser;

use version_updater::config::Config;
use version_updater::git::GitClient;
use version_updater::log;
use version_updater::registry::NpmRegistry;
use version_updater::updater::Updater;

/// Checks tracked upstream packages for new releases, rewrites their local
/// version files and commits the changes to the current repository.
#[derive(Parser)]
#[command(version, about)]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Args::parse();
    log::init()?;

    let workdir = std::env::current_dir()?;
    let updater = Updater::new(
        Arc::new(NpmRegistry::default()),
        GitClient::new(&workdir),
        workdir,
    );

    updater.run(&Config::builtin()).await?;

    Ok(())
}

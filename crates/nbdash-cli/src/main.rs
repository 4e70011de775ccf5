mod commands;

use std::path::PathBuf;

use clap::Parser;
use nbdash_core::DashboardMode;

#[derive(Parser)]
#[command(name = "nbdash", about = "Build a dashboard container image from a notebook")]
#[command(version)]
pub(crate) struct Cli {
    /// Image name suffix (the image tag becomes nbdash-<name>)
    #[arg(long)]
    name: String,

    /// Build from a local notebook file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Build from a notebook URL
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Build from an nbgallery notebook URL
    #[arg(long, value_name = "URL")]
    gallery: Option<String>,

    /// Dashboard mode (voila or nbparameterise)
    #[arg(long, default_value = "voila")]
    mode: DashboardMode,

    /// Maintainer label for the image
    #[arg(long)]
    maintainer: Option<String>,

    /// Title label for the image
    #[arg(long)]
    title: Option<String>,

    /// Description label for the image
    #[arg(long)]
    description: Option<String>,

    /// Run the container build after staging
    #[arg(long)]
    build: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    commands::run(cli).await
}

use std::path::PathBuf;

use nbdash_build::metadata::{CallerMetadata, MetadataSet};
use nbdash_build::stage::{CONTEXT_PREFIX, Stager};
use nbdash_core::NbdashConfig;
use nbdash_docker::DockerClient;
use nbdash_source::{NotebookSource, ResolvedNotebook, SourceClient};

/// Execute the full staging pipeline and, if requested, the image build.
pub(crate) async fn run(cli: crate::Cli) -> anyhow::Result<()> {
    let working_dir = PathBuf::from(".");
    let config = NbdashConfig::load(&working_dir)?;

    // Origin validation happens before the context directory is touched.
    let source = NotebookSource::from_flags(cli.file, cli.url, cli.gallery)?;

    let stager = Stager::create(&working_dir, &cli.name, cli.mode, &config.image.base_image)?;
    println!("Staging build context at {}", stager.context_dir().display());

    let ResolvedNotebook {
        mut notebook,
        filename,
        origin_url,
    } = SourceClient::new().resolve(&source).await?;

    let caller = CallerMetadata {
        maintainer: cli.maintainer.or(config.metadata.maintainer),
        title: cli.title,
        description: cli.description,
    };
    let metadata = MetadataSet::collect(origin_url.as_deref(), &notebook, &caller);

    let context_dir = stager.stage(&mut notebook, &filename, &metadata)?;
    println!("Staged {filename}");

    if cli.build {
        let image_tag = format!("{CONTEXT_PREFIX}-{name}", name = cli.name);
        println!("Building image {image_tag}...");

        let client = DockerClient::new(config.docker.program);
        let outcome = client.build(&context_dir, &image_tag).await?;

        if outcome.success {
            println!("Built {image_tag}");
        } else {
            tracing::warn!(image_tag, "container build failed");
            println!("Container build failed:");
            println!("{}", outcome.output);
        }
    }

    Ok(())
}

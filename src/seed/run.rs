//! Seed command runner.

use anyhow::Context;
use seed_client::HttpTargetClient;
use seed_populate::{SeedArgs, SeedPopulator};

use super::prompt::{resolve_request, DialoguerPrompt};
use crate::TargetOpts;

/// Run the seed command: resolve the request, then populate the target.
pub async fn run_seed(target: TargetOpts, args: SeedArgs) -> anyhow::Result<()> {
    let request = resolve_request(&args, &mut DialoguerPrompt)?;
    let client_config = target.client_config().context("Invalid target options")?;

    if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would seed {} agents and {} estates with {} generators (type {}, seed={:?})",
            request.agents,
            request.estates,
            request.variant,
            request.variant.selector(),
            args.seed
        );
        tracing::info!(
            "[DRY-RUN] Target: {} (schema={}, timeout={:?})",
            client_config.base_url,
            client_config.schema,
            client_config.timeout
        );
        return Ok(());
    }

    tracing::info!(
        "Seeding {} with {} generators (type {})",
        client_config.base_url,
        request.variant,
        request.variant.selector()
    );

    let client = HttpTargetClient::new(client_config).context("Failed to create target client")?;
    let mut populator = SeedPopulator::new(client, request.variant, args.seed);

    let metrics = populator
        .populate(request.agents, request.estates)
        .await
        .context("Seeding aborted")?;

    if metrics.application_errors > 0 {
        tracing::warn!(
            "Target reported {} application error(s) during the run",
            metrics.application_errors
        );
    }

    tracing::info!(
        "Submitted {} agents and {} estates ({} agents available for correlation)",
        metrics.agents.records_submitted,
        metrics.estates.records_submitted,
        metrics.agents_correlated
    );

    Ok(())
}

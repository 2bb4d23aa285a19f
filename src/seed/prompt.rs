//! Collecting the seed request from flags or an interactive prompt.

use anyhow::Context;
use seed_generator::SchemaVariant;
use seed_populate::SeedArgs;

/// A fully resolved request: how many of each entity, in which dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRequest {
    pub agents: u64,
    pub estates: u64,
    pub variant: SchemaVariant,
}

/// Source of answers when no counts were given on the command line.
pub trait Prompter {
    fn agents_count(&mut self) -> anyhow::Result<u64>;
    fn estates_count(&mut self) -> anyhow::Result<u64>;
    fn variant_selector(&mut self) -> anyhow::Result<u8>;
}

/// Terminal prompt.
pub struct DialoguerPrompt;

impl Prompter for DialoguerPrompt {
    fn agents_count(&mut self) -> anyhow::Result<u64> {
        dialoguer::Input::<u64>::new()
            .with_prompt("Enter agents count")
            .interact_text()
            .context("Failed to get user input")
    }

    fn estates_count(&mut self) -> anyhow::Result<u64> {
        dialoguer::Input::<u64>::new()
            .with_prompt("Enter estates count")
            .interact_text()
            .context("Failed to get user input")
    }

    fn variant_selector(&mut self) -> anyhow::Result<u8> {
        let options: Vec<String> = SchemaVariant::ALL
            .iter()
            .map(|(code, variant)| format!("{code}. {variant}"))
            .collect();
        dialoguer::Input::<u8>::new()
            .with_prompt(format!(
                "Enter generators type number ({})",
                options.join(", ")
            ))
            .interact_text()
            .context("Failed to get user input")
    }
}

/// Resolve counts and variant.
///
/// If neither count flag is set, all three values come from `prompt`;
/// otherwise a missing count means zero. An unknown variant selector is an
/// error, raised before anything touches the network.
pub fn resolve_request(args: &SeedArgs, prompt: &mut dyn Prompter) -> anyhow::Result<SeedRequest> {
    let (agents, estates, selector) = if args.needs_prompt() {
        let agents = prompt.agents_count()?;
        let estates = prompt.estates_count()?;
        let selector = prompt.variant_selector()?;
        (agents, estates, selector)
    } else {
        (
            args.agents.unwrap_or(0),
            args.estates.unwrap_or(0),
            args.variant,
        )
    };

    let variant = SchemaVariant::from_selector(selector)?;

    Ok(SeedRequest {
        agents,
        estates,
        variant,
    })
}

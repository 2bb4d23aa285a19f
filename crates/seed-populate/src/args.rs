//! CLI argument definitions for the seeder.

use clap::Args;

/// What to generate.
///
/// When neither count is given the entry point prompts for both counts and
/// the schema variant.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Count of agents to generate
    #[arg(short = 'a', long = "agent", value_name = "COUNT")]
    pub agents: Option<u64>,

    /// Count of estates to generate
    #[arg(short = 'e', long = "estate", value_name = "COUNT")]
    pub estates: Option<u64>,

    /// Type of generators (1 = Favihome.Com, 2 = Estate Inc)
    #[arg(short = 't', long = "type", default_value = "1", value_name = "NUMBER")]
    pub variant: u8,

    /// Random seed for reproducible records (OS-seeded when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry-run mode: validate arguments without contacting the target
    #[arg(long)]
    pub dry_run: bool,
}

impl SeedArgs {
    /// True when the counts must be collected interactively.
    pub fn needs_prompt(&self) -> bool {
        self.agents.is_none() && self.estates.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        seed: SeedArgs,
    }

    #[test]
    fn test_short_flags() {
        let cli = TestCli::try_parse_from(["seed", "-a", "10", "-e", "25", "-t", "2"]).unwrap();
        assert_eq!(cli.seed.agents, Some(10));
        assert_eq!(cli.seed.estates, Some(25));
        assert_eq!(cli.seed.variant, 2);
        assert!(!cli.seed.needs_prompt());
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["seed"]).unwrap();
        assert_eq!(cli.seed.variant, 1);
        assert!(cli.seed.seed.is_none());
        assert!(!cli.seed.dry_run);
        assert!(cli.seed.needs_prompt());
    }

    #[test]
    fn test_single_count_skips_prompt() {
        let cli = TestCli::try_parse_from(["seed", "--estate", "5"]).unwrap();
        assert!(!cli.seed.needs_prompt());
        assert_eq!(cli.seed.agents, None);
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(TestCli::try_parse_from(["seed", "-a", "-3"]).is_err());
        assert!(TestCli::try_parse_from(["seed", "--estate", "lots"]).is_err());
    }
}

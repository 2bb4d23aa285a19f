//! Two-phase agent and estate populator.

use crate::error::PopulatorError;
use crate::metrics::{PhaseMetrics, PopulateMetrics};
use crate::progress::{Phase, ProgressSchedule};
use seed_client::{QueryResponse, TargetClient};
use seed_generator::{RandomFields, RecordGenerator, SchemaVariant};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Query listing every agent the target knows about.
pub const AGENT_QUERY: &str = r#"{
    Agent {
        uuid
        phone
        name
        estates {
            uuid
        }
    }
}"#;

/// Type name of agents in the query response.
pub const AGENT_TYPE: &str = "Agent";

/// Result of the agent correlation query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Correlation {
    /// Target-assigned agent uuids, in response order.
    pub agent_ids: Vec<String>,
    /// Application errors reported alongside the data.
    pub application_errors: usize,
}

impl Correlation {
    /// Collect agent uuids from a query response. Entries without a string
    /// `uuid` are skipped.
    pub fn from_response(response: &QueryResponse) -> Self {
        let agents = response.data_list(AGENT_TYPE);
        let agent_ids: Vec<String> = agents
            .iter()
            .filter_map(|agent| agent.get("uuid").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        let skipped = agents.len() - agent_ids.len();
        if skipped > 0 {
            warn!("Skipped {skipped} agents without a uuid in the query response");
        }

        Self {
            agent_ids,
            application_errors: response.error_count(),
        }
    }
}

/// Drives agent generation, agent correlation, and estate generation
/// against a target.
pub struct SeedPopulator<C: TargetClient> {
    client: C,
    generator: Box<dyn RecordGenerator>,
    fields: RandomFields,
}

impl<C: TargetClient> SeedPopulator<C> {
    /// Create a populator for one of the built-in schema variants.
    ///
    /// # Arguments
    ///
    /// * `client` - Connection to the target
    /// * `variant` - Schema dialect of the generated records
    /// * `seed` - Optional RNG seed; `None` seeds from the OS
    pub fn new(client: C, variant: SchemaVariant, seed: Option<u64>) -> Self {
        Self::with_generator(client, variant.generator(), RandomFields::new(seed))
    }

    /// Create a populator with any record generator.
    pub fn with_generator(
        client: C,
        generator: Box<dyn RecordGenerator>,
        fields: RandomFields,
    ) -> Self {
        Self {
            client,
            generator,
            fields,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run both phases: agents first, then correlation and estates.
    ///
    /// A phase with a zero count is skipped entirely; in particular no
    /// correlation query is issued when no estates are requested.
    pub async fn populate(
        &mut self,
        agents: u64,
        estates: u64,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!("Seeding {} agents and {} estates", agents, estates);

        if agents > 0 {
            metrics.agents = self.populate_agents(agents).await?;
        }

        if estates > 0 {
            let phase_start = Instant::now();
            let correlation = self.correlate_agents().await?;
            metrics.agents_correlated = correlation.agent_ids.len() as u64;
            metrics.application_errors += correlation.application_errors;

            metrics.estates = self
                .populate_estates(estates, &correlation.agent_ids)
                .await?;
            metrics.estates.duration = phase_start.elapsed();
        }

        metrics.total_duration = start_time.elapsed();

        info!(
            "Seeding complete: {} records in {:?} ({:.2} records/sec)",
            metrics.records_submitted(),
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }

    /// Generate and submit `count` agents.
    pub async fn populate_agents(&mut self, count: u64) -> Result<PhaseMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PhaseMetrics::default();
        let schedule = ProgressSchedule::new(count);

        for number in 1..=count {
            let record = serde_json::to_value(self.generator.make_agent(&mut self.fields))?;
            self.submit(Phase::Agents, number, &record).await?;
            metrics.records_submitted += 1;

            if schedule.after_record(number) {
                info!("{} {} generated", number, Phase::Agents.plural());
                metrics.progress_reports.push(number);
            }
        }

        info!("Total: {} {} generated", count, Phase::Agents.plural());
        metrics.duration = start_time.elapsed();
        Ok(metrics)
    }

    /// Fetch the uuids of every agent the target knows about.
    ///
    /// Application errors in the response are logged and counted, and the
    /// data that did come back is used as is.
    pub async fn correlate_agents(&self) -> Result<Correlation, PopulatorError> {
        let response = self
            .client
            .query(AGENT_QUERY)
            .await
            .map_err(PopulatorError::Correlation)?;

        if let Some(errors) = response.application_errors() {
            warn!("Agent query reported errors: {errors}");
        }

        let correlation = Correlation::from_response(&response);
        debug!(
            "Correlated {} agents from the target",
            correlation.agent_ids.len()
        );
        Ok(correlation)
    }

    /// Generate and submit `count` estates, each pointing at an agent drawn
    /// uniformly (with replacement) from `agent_ids`.
    ///
    /// Fails with [`PopulatorError::NoAgents`] before submitting anything
    /// when `agent_ids` is empty and `count` is not.
    pub async fn populate_estates(
        &mut self,
        count: u64,
        agent_ids: &[String],
    ) -> Result<PhaseMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PhaseMetrics::default();

        if count == 0 {
            return Ok(metrics);
        }
        if agent_ids.is_empty() {
            return Err(PopulatorError::NoAgents { requested: count });
        }

        let schedule = ProgressSchedule::new(count);

        for index in 0..count {
            let agent_id = &agent_ids[self.fields.random_index(agent_ids.len())];
            let record =
                serde_json::to_value(self.generator.make_estate(&mut self.fields, agent_id))?;
            self.submit(Phase::Estates, index + 1, &record).await?;
            metrics.records_submitted += 1;

            if schedule.at_index(index) {
                info!("{} {} generated", index, Phase::Estates.plural());
                metrics.progress_reports.push(index);
            }
        }

        info!("Total: {} {} generated", count, Phase::Estates.plural());
        metrics.duration = start_time.elapsed();
        Ok(metrics)
    }

    async fn submit(&self, phase: Phase, number: u64, record: &Value) -> Result<(), PopulatorError> {
        self.client
            .submit(record)
            .await
            .map_err(|source| PopulatorError::Submit {
                phase,
                index: number,
                source,
            })
    }
}

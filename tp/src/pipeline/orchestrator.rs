//! Pipeline orchestrator
//!
//! Drives one request through the stage machine: validate, fan out to the
//! four domain generators, wait at the barrier, build the itinerary, compile.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::{Id, JoinSet};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::compiler::ResultCompiler;
use super::error::PlannerError;
use super::state::{PipelineStage, PlannerState};
use crate::config::Config;
use crate::domain::{
    CompiledResult, Domain, DomainOptions, FlightOption, HotelOption, RawRequest, RoadOption, Step, TrainOption,
    TripRequest,
};
use crate::generators::{
    DomainGenerator, FlightGenerator, HotelGenerator, Pricing, RailGenerator, RoadGenerator, stage_seed,
};
use crate::itinerary::ItineraryBuilder;
use crate::knowledge::KnowledgeBase;
use crate::validation::RequestValidator;

/// The four generators a run fans out to
#[derive(Clone)]
pub struct GeneratorSet {
    pub flight: Arc<dyn DomainGenerator<Item = FlightOption>>,
    pub hotel: Arc<dyn DomainGenerator<Item = HotelOption>>,
    pub rail: Arc<dyn DomainGenerator<Item = TrainOption>>,
    pub road: Arc<dyn DomainGenerator<Item = RoadOption>>,
}

impl GeneratorSet {
    pub fn builtin(kb: Arc<KnowledgeBase>, pricing: Pricing) -> Self {
        Self {
            flight: Arc::new(FlightGenerator::new(kb.clone(), pricing)),
            hotel: Arc::new(HotelGenerator::new(kb.clone(), pricing)),
            rail: Arc::new(RailGenerator::new(kb.clone(), pricing)),
            road: Arc::new(RoadGenerator::new(kb, pricing)),
        }
    }
}

/// Output of one generator task
enum StageOutput {
    Flights(DomainOptions<FlightOption>),
    Hotels(DomainOptions<HotelOption>),
    Trains(DomainOptions<TrainOption>),
    Road(DomainOptions<RoadOption>),
}

fn step_for(domain: Domain) -> Step {
    match domain {
        Domain::Flight => Step::SearchFlights,
        Domain::Hotel => Step::SearchHotels,
        Domain::Rail => Step::SearchTrains,
        Domain::Road => Step::SearchRoad,
    }
}

/// Single-use driver for one pipeline run
pub struct PipelineOrchestrator {
    validator: RequestValidator,
    generators: GeneratorSet,
    itinerary: ItineraryBuilder,
    compiler: ResultCompiler,
    timeout: Duration,
    deterministic: bool,
    stage: PipelineStage,
    has_run: bool,
}

impl PipelineOrchestrator {
    pub fn new(kb: Arc<KnowledgeBase>, config: &Config) -> Self {
        let pricing = Pricing::from_config(&config.currency);
        Self {
            validator: RequestValidator::new(),
            generators: GeneratorSet::builtin(kb.clone(), pricing),
            itinerary: ItineraryBuilder::new(kb),
            compiler: ResultCompiler::new(),
            timeout: Duration::from_millis(config.pipeline.timeout_ms),
            deterministic: config.pipeline.deterministic,
            stage: PipelineStage::Init,
            has_run: false,
        }
    }

    /// Override the configured pipeline timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the generator set
    pub fn with_generators(mut self, generators: GeneratorSet) -> Self {
        self.generators = generators;
        self
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Run the whole pipeline once
    pub async fn run(&mut self, raw: &RawRequest) -> Result<CompiledResult, PlannerError> {
        debug!(timeout = ?self.timeout, "PipelineOrchestrator::run: called");
        if self.has_run {
            return Err(PlannerError::AlreadyRun);
        }
        self.has_run = true;

        let timeout = self.timeout;
        let deadline = Instant::now() + timeout;
        match tokio::time::timeout_at(deadline, self.execute(raw, deadline)).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                self.fail(&e);
                Err(e)
            }
            Err(_) => {
                let e = PlannerError::Timeout(timeout);
                self.fail(&e);
                Err(e)
            }
        }
    }

    async fn execute(&mut self, raw: &RawRequest, deadline: Instant) -> Result<CompiledResult, PlannerError> {
        let request = self.validator.validate(raw)?;
        self.transition(PipelineStage::Validated)?;
        let mut state = PlannerState::new(request);

        self.transition(PipelineStage::Generating)?;
        self.generate(&mut state).await?;
        self.transition(PipelineStage::Aggregated)?;

        // Post-barrier stages run on the blocking pool, inside the deadline
        let request = state.request().clone();
        let mut rng = self.rng(&request, "itinerary");
        let builder = self.itinerary.clone();
        let itinerary = tokio::task::spawn_blocking(move || builder.build(&request, &mut rng)).await?;
        state.set_itinerary(itinerary)?;
        self.transition(PipelineStage::ItineraryBuilt)?;

        let compiler = self.compiler;
        let result = tokio::task::spawn_blocking(move || compiler.compile(state)).await?;
        if Instant::now() > deadline {
            return Err(PlannerError::Timeout(self.timeout));
        }
        self.transition(PipelineStage::Compiled)?;
        info!(plan_id = %result.plan_id, "PipelineOrchestrator::run: compiled");
        Ok(result)
    }

    /// Fan out to the generators and wait for all of them
    async fn generate(&self, state: &mut PlannerState) -> Result<(), PlannerError> {
        let request = Arc::new(state.request().clone());
        let mut tasks: JoinSet<StageOutput> = JoinSet::new();
        let mut domains: HashMap<Id, Domain> = HashMap::new();

        let g = self.generators.clone();
        self.spawn(&mut tasks, &mut domains, g.flight, &request, StageOutput::Flights);
        self.spawn(&mut tasks, &mut domains, g.hotel, &request, StageOutput::Hotels);
        self.spawn(&mut tasks, &mut domains, g.rail, &request, StageOutput::Trains);
        self.spawn(&mut tasks, &mut domains, g.road, &request, StageOutput::Road);

        let mut flights = None;
        let mut hotels = None;
        let mut trains = None;
        let mut road = None;
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((_, StageOutput::Flights(v))) => flights = Some(v),
                Ok((_, StageOutput::Hotels(v))) => hotels = Some(v),
                Ok((_, StageOutput::Trains(v))) => trains = Some(v),
                Ok((_, StageOutput::Road(v))) => road = Some(v),
                Err(e) => {
                    let domain = domains.get(&e.id()).copied();
                    warn!(?domain, error = %e, "PipelineOrchestrator::generate: generator failed, degrading to empty");
                }
            }
        }

        // Fixed domain order keeps steps_completed stable across runs
        let completed = [flights.is_some(), hotels.is_some(), trains.is_some(), road.is_some()];
        state.set_flights(flights.unwrap_or_else(DomainOptions::empty))?;
        state.set_hotels(hotels.unwrap_or_else(DomainOptions::empty))?;
        state.set_trains(trains.unwrap_or_else(DomainOptions::empty))?;
        state.set_road_options(road.unwrap_or_else(DomainOptions::empty))?;
        for (domain, done) in Domain::ALL.into_iter().zip(completed) {
            if done {
                state.record(step_for(domain));
            }
        }
        Ok(())
    }

    fn spawn<T: Send + 'static>(
        &self,
        tasks: &mut JoinSet<StageOutput>,
        domains: &mut HashMap<Id, Domain>,
        generator: Arc<dyn DomainGenerator<Item = T>>,
        request: &Arc<TripRequest>,
        wrap: fn(DomainOptions<T>) -> StageOutput,
    ) {
        let domain = generator.domain();
        let mut rng = self.rng(request, &domain.to_string());
        let request = Arc::clone(request);
        let handle = tasks.spawn_blocking(move || wrap(generator.generate(&request, &mut rng)));
        debug!(%domain, "PipelineOrchestrator::spawn: dispatched");
        domains.insert(handle.id(), domain);
    }

    /// Stage RNG: seeded from the request when deterministic
    fn rng(&self, request: &TripRequest, stage: &str) -> StdRng {
        let seed = if self.deterministic {
            stage_seed(request, stage)
        } else {
            rand::rng().random()
        };
        StdRng::seed_from_u64(seed)
    }

    fn transition(&mut self, next: PipelineStage) -> Result<(), PlannerError> {
        if !self.stage.can_transition_to(next) {
            return Err(PlannerError::InvalidTransition {
                from: self.stage,
                to: next,
            });
        }
        info!(from = %self.stage, to = %next, "PipelineOrchestrator::transition");
        self.stage = next;
        Ok(())
    }

    fn fail(&mut self, error: &PlannerError) {
        warn!(stage = %self.stage, %error, "PipelineOrchestrator::run: failed");
        if self.stage.can_transition_to(PipelineStage::Failed) {
            self.stage = PipelineStage::Failed;
        }
    }
}

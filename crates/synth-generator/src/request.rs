//! Request validation and per-unit generation orchestration.

use crate::alias::AliasTable;
use crate::error::GeneratorError;
use crate::factory::RecordFactory;
use crate::walk::BoundedWalk;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use synth_core::{Record, SynthSchema, UnitSpec};

/// A validated generation request.
///
/// Construction resolves the window bounds, validates every unit, builds
/// the per-unit alias tables, and derives the duration and record-count
/// capacity hint. Each unit's running total is owned here and persists
/// across [`generate`](Self::generate) calls; use
/// [`reset_readings`](Self::reset_readings) between runs when a fresh walk
/// is wanted.
pub struct GenerationRequest {
    schema: SynthSchema,
    start: i64,
    duration: i64,
    record_count: usize,
    samplers: Vec<AliasTable>,
    readings: Vec<f64>,
}

impl GenerationRequest {
    /// Validate a schema and derive the request.
    pub fn new(schema: SynthSchema) -> Result<Self, GeneratorError> {
        let start = schema.start.as_unix_seconds()?;
        let end = schema.end.as_unix_seconds()?;

        if end < start {
            return Err(GeneratorError::BackwardsWindow { start, end });
        }
        if schema.units.is_empty() {
            return Err(GeneratorError::NoUnits);
        }

        let duration = end - start;

        let mut samplers = Vec::with_capacity(schema.units.len());
        let mut record_count = 0usize;
        for unit in &schema.units {
            if unit.interval <= 0 {
                return Err(GeneratorError::InvalidInterval {
                    unit: unit.name.clone(),
                    interval: unit.interval,
                });
            }
            for (index, category) in unit.categories.iter().enumerate() {
                if category.upper < category.lower {
                    return Err(GeneratorError::InvertedRange {
                        unit: unit.name.clone(),
                        index,
                        lower: category.lower,
                        upper: category.upper,
                    });
                }
            }
            samplers.push(AliasTable::new(&unit.weights())?);
            record_count += (duration / unit.interval) as usize;
        }

        let readings = schema.units.iter().map(|u| u.reading).collect();

        Ok(Self {
            schema,
            start,
            duration,
            record_count,
            samplers,
            readings,
        })
    }

    /// The validated schema.
    pub fn schema(&self) -> &SynthSchema {
        &self.schema
    }

    /// Window length in seconds.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Total records one run will produce, summed over all units.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Current running totals, one per unit in declaration order.
    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    /// Restore every unit's running total to its configured initial value.
    pub fn reset_readings(&mut self) {
        for (reading, unit) in self.readings.iter_mut().zip(&self.schema.units) {
            *reading = unit.reading;
        }
    }

    /// Generate one full record sequence, seeding the RNG from the schema.
    pub fn generate(&mut self) -> Result<Vec<Record>, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(self.schema.seed.unwrap_or(0));
        self.generate_with_rng(&mut rng)
    }

    /// Generate one full record sequence from a caller-supplied randomness
    /// stream.
    ///
    /// Units are processed in declaration order and each unit's records are
    /// strictly time-ordered, so a fixed stream reproduces the output
    /// exactly. Any unit failure aborts the whole call; no partial output
    /// is returned.
    pub fn generate_with_rng<R: Rng>(&mut self, rng: &mut R) -> Result<Vec<Record>, GeneratorError> {
        let factory = RecordFactory::new(
            self.schema.name.clone(),
            self.start,
            self.schema.version,
        );
        let mut records = Vec::with_capacity(self.record_count);

        for (i, unit) in self.schema.units.iter().enumerate() {
            let (unit_records, final_reading) = generate_unit(
                unit,
                &self.samplers[i],
                &factory,
                self.start,
                self.duration,
                self.readings[i],
                rng,
            )
            .map_err(|source| GeneratorError::UnitGeneration {
                unit: unit.name.clone(),
                source: Box::new(source),
            })?;

            tracing::debug!(
                "generated {} records for unit '{}' (final reading {})",
                unit_records.len(),
                unit.name,
                final_reading
            );

            self.readings[i] = final_reading;
            records.extend(unit_records);
        }

        Ok(records)
    }
}

/// Run one unit's bounded walk over the whole window.
///
/// Returns the unit's records in step order together with the final running
/// total, which the caller folds back into the request's state.
fn generate_unit<R: Rng>(
    unit: &UnitSpec,
    sampler: &AliasTable,
    factory: &RecordFactory,
    start: i64,
    duration: i64,
    reading: f64,
    rng: &mut R,
) -> Result<(Vec<Record>, f64), GeneratorError> {
    let steps = (duration / unit.interval) as usize;

    let mut walk = BoundedWalk::new(unit, sampler, reading);
    let mut records = Vec::with_capacity(steps);

    for i in 0..steps {
        let delta = walk.step(rng)?;
        let time = start + i as i64 * unit.interval;
        records.push(factory.create(delta, &unit.symbol, time)?);
    }

    Ok((records, walk.reading()))
}

//! The decode, expand, materialize and connect pipeline.
//!
//! Malformed input never aborts a run: a line that fails to decode is
//! dropped and counted, and everything else still flows through. The
//! caller gets the pairs plus enough counters to say what was lost.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::connect::connect;
use crate::decoder::{Decoder, is_flight_leg_record};
use crate::domain::{ConnectedPair, DecodeErrorKind};
use crate::expand::expand;
use crate::ingest::split_lines;
use crate::materialize::materialize;

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Lines seen, including skipped ones.
    pub total_lines: usize,
    /// Blank lines and records other than type 3.
    pub skipped_lines: usize,
    pub decoded_lines: usize,
    pub rejected_lines: usize,
    /// Rejected lines by reason.
    pub rejections: BTreeMap<DecodeErrorKind, usize>,
    pub instances: usize,
    pub events: usize,
    pub connected: usize,
    pub unconnected: usize,
}

impl PipelineStats {
    fn record_rejection(&mut self, kind: DecodeErrorKind) {
        self.rejected_lines += 1;
        *self.rejections.entry(kind).or_default() += 1;
    }

    /// Number of lines rejected for `kind`.
    pub fn rejected_for(&self, kind: DecodeErrorKind) -> usize {
        self.rejections.get(&kind).copied().unwrap_or(0)
    }

    /// Arrivals seen by the matcher.
    pub fn arrivals(&self) -> usize {
        self.connected + self.unconnected
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// One pair per arrival event, in input order.
    pub pairs: Vec<ConnectedPair>,
    pub stats: PipelineStats,
}

/// Schedule-to-connections pipeline.
#[derive(Debug, Default)]
pub struct Pipeline {
    decoder: Decoder,
}

impl Pipeline {
    pub fn new(decoder: Decoder) -> Self {
        Self { decoder }
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Run over a whole schedule file's text.
    pub fn run(&self, input: &str) -> PipelineOutput {
        self.run_lines(split_lines(input))
    }

    /// Run over pre-split lines.
    ///
    /// Every event is materialized before matching starts, so a departure
    /// listed after its arrival is still found.
    pub fn run_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> PipelineOutput {
        let mut stats = PipelineStats::default();
        let mut events = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            stats.total_lines += 1;

            if !is_flight_leg_record(line) {
                stats.skipped_lines += 1;
                continue;
            }

            match self.decoder.decode(line) {
                Ok(period) => {
                    stats.decoded_lines += 1;
                    for instance in expand(period) {
                        stats.instances += 1;
                        events.extend(materialize(&instance));
                    }
                }
                Err(err) => {
                    debug!(line = idx + 1, reason = %err.kind(), error = %err, "rejected line");
                    stats.record_rejection(err.kind());
                }
            }
        }

        stats.events = events.len();
        let pairs = connect(&events);
        stats.connected = pairs.iter().filter(|p| p.is_connected()).count();
        stats.unconnected = pairs.len() - stats.connected;

        info!(
            lines = stats.total_lines,
            decoded = stats.decoded_lines,
            rejected = stats.rejected_lines,
            instances = stats.instances,
            connected = stats.connected,
            unconnected = stats.unconnected,
            "pipeline run complete"
        );

        PipelineOutput { pairs, stats }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

//! Service facade tying together the dispatcher, the expression pipeline,
//! the history store, and the stats aggregator.
//!
//! A boundary layer (HTTP or MCP adapters, auth, serialization) constructs
//! one [`CalculatorService`] at startup and calls it from any number of
//! request workers. The `evaluate_*` methods are pure and run fully in
//! parallel; recording and reads serialize on the history store's lock.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::{Clock, MonotonicClock};
use crate::config::CalcConfig;
use crate::error::CalcResult;
use crate::expr;
use crate::format;
use crate::history::{CalculationOutcome, CalculationRecord, HistoryStore, Inputs};
use crate::ops::{self, BinaryOp, Operation};
use crate::stats::StatsSnapshot;

/// Descriptive snapshot of the service for the boundary layer to surface.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub capabilities: Vec<&'static str>,
    pub supported_operations: Vec<&'static str>,
    pub limits: ServiceLimits,
}

/// The configured limits reported by [`CalculatorService::service_info`].
#[derive(Debug, Clone, Serialize)]
pub struct ServiceLimits {
    pub history_capacity: usize,
    pub overflow_ceiling: f64,
    pub display_precision: usize,
}

/// The calculation service core.
///
/// Owns the only shared mutable state (the history store) and the injected
/// clock; evaluation itself carries no state at all.
pub struct CalculatorService {
    config: CalcConfig,
    history: HistoryStore,
    clock: Arc<dyn Clock>,
}

impl CalculatorService {
    /// Create a service with the given configuration and the monotonic
    /// system clock.
    pub fn new(config: CalcConfig) -> Self {
        Self::with_clock(config, Arc::new(MonotonicClock::new()))
    }

    /// Create a service with an explicit clock supplied by the caller.
    pub fn with_clock(config: CalcConfig, clock: Arc<dyn Clock>) -> Self {
        let history = HistoryStore::with_capacity(config.history_capacity);
        CalculatorService {
            config,
            history,
            clock,
        }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Direct access to the underlying store
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    // --- pure evaluation --------------------------------------------------

    /// Execute one of the six fixed two-operand operations.
    ///
    /// Pure: nothing is recorded. See [`CalculatorService::calculate`] for
    /// the recording variant.
    ///
    /// # Errors
    /// `DivisionByZero` for `divide`/`modulo` with a zero divisor;
    /// `ResultOverflow` when the magnitude guard trips.
    pub fn evaluate_two_operand(&self, op: BinaryOp, a: f64, b: f64) -> CalcResult<f64> {
        op.apply(a, b, self.config.overflow_ceiling)
    }

    /// Principal non-negative square root.
    ///
    /// # Errors
    /// `NegativeInput` for a negative operand; `ResultOverflow` when the
    /// magnitude guard trips.
    pub fn evaluate_sqrt(&self, n: f64) -> CalcResult<f64> {
        ops::sqrt(n, self.config.overflow_ceiling)
    }

    /// Tokenize, parse, and evaluate a free-form infix expression.
    ///
    /// # Errors
    /// Any of the tokenizer/parser/evaluator failures: `InvalidCharacter`,
    /// `InvalidNumber`, `UnbalancedParentheses`, `UnexpectedToken`,
    /// `EmptyExpression`, `DivisionByZero`, `ResultOverflow`.
    pub fn evaluate_expression(&self, text: &str) -> CalcResult<f64> {
        expr::evaluate_expression(text, self.config.overflow_ceiling)
    }

    // --- recording --------------------------------------------------------

    /// Append one attempt (success or failure) to the history.
    ///
    /// Invoked after every attempt: a failed calculation is data, not a
    /// dropped event. The record is timestamped with the service clock at
    /// the moment of recording. No-op when history is disabled in config.
    pub fn record_calculation(
        &self,
        operation: Operation,
        inputs: Inputs,
        outcome: &CalcResult<f64>,
        duration: Duration,
    ) {
        if !self.config.enable_history {
            return;
        }
        let outcome = match outcome {
            Ok(result) => CalculationOutcome::Succeeded { result: *result },
            Err(err) => CalculationOutcome::Failed { error: err.kind() },
        };
        self.history.append(CalculationRecord {
            operation,
            inputs,
            outcome,
            timestamp: self.clock.now(),
            duration,
        });
    }

    // --- timed, recorded operations ---------------------------------------

    /// Evaluate a two-operand operation, record the attempt, and return the
    /// result.
    pub fn calculate(&self, op: BinaryOp, a: f64, b: f64) -> CalcResult<f64> {
        log::info!("Calculation requested: {} {} {}", a, op.symbol(), b);

        let started = self.clock.now();
        let outcome = self.evaluate_two_operand(op, a, b);
        let duration = self.elapsed_since(started);
        self.record_calculation(op.into(), Inputs::pair(a, b), &outcome, duration);

        match &outcome {
            Ok(result) => log::info!("Calculation completed: {}", result),
            Err(err) => log::warn!("Calculation failed: {}", err),
        }
        outcome
    }

    /// Take a square root, record the attempt, and return the result.
    pub fn sqrt(&self, n: f64) -> CalcResult<f64> {
        log::info!("Square root requested: {}", n);

        let started = self.clock.now();
        let outcome = self.evaluate_sqrt(n);
        let duration = self.elapsed_since(started);
        self.record_calculation(Operation::Sqrt, Inputs::single(n), &outcome, duration);

        match &outcome {
            Ok(result) => log::info!("Square root completed: {}", result),
            Err(err) => log::warn!("Square root failed: {}", err),
        }
        outcome
    }

    /// Evaluate an expression, record the attempt, and return the result.
    pub fn expression(&self, text: &str) -> CalcResult<f64> {
        log::info!("Expression evaluation requested: {}", text);

        let started = self.clock.now();
        let outcome = self.evaluate_expression(text);
        let duration = self.elapsed_since(started);
        self.record_calculation(Operation::Expression, Inputs::text(text), &outcome, duration);

        match &outcome {
            Ok(result) => log::info!("Expression evaluation completed: {}", result),
            Err(err) => log::warn!("Expression evaluation failed: {}", err),
        }
        outcome
    }

    // --- history and stats ------------------------------------------------

    /// Most recent records, newest first, at most `limit` of them.
    pub fn get_history(&self, limit: usize) -> Vec<CalculationRecord> {
        self.history.recent(limit)
    }

    /// Recompute usage statistics from the current history contents.
    pub fn get_stats(&self) -> StatsSnapshot {
        self.history.stats()
    }

    /// Drop every record. Capacity is unchanged.
    pub fn clear_history(&self) {
        self.history.clear();
        log::info!("Calculation history cleared");
    }

    // --- boundary helpers -------------------------------------------------

    /// Render a result at the configured display precision.
    pub fn format_result(&self, value: f64) -> String {
        format::format_significant(value, self.config.display_precision)
    }

    /// Name, version, capabilities, and limits for the boundary to report.
    pub fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            name: "Calculator Service",
            version: env!("CARGO_PKG_VERSION"),
            description: "Local arithmetic evaluation with bounded history and usage statistics",
            capabilities: vec![
                "two-operand arithmetic",
                "square root",
                "infix expression evaluation",
                "calculation history",
                "usage statistics",
            ],
            supported_operations: Operation::ALL.iter().map(|op| op.name()).collect(),
            limits: ServiceLimits {
                history_capacity: self.config.history_capacity,
                overflow_ceiling: self.config.overflow_ceiling,
                display_precision: self.config.display_precision,
            },
        }
    }

    fn elapsed_since(&self, started: DateTime<Utc>) -> Duration {
        (self.clock.now() - started).to_std().unwrap_or(Duration::ZERO)
    }
}

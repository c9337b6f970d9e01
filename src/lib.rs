//! Calculation service core.
//!
//! Safe infix expression evaluation, six fixed two-operand operations plus
//! square root, a capacity-bounded in-memory history, and usage statistics
//! derived from it. This crate is the algorithmic core of a calculation
//! service; transport, serialization formats, and auth belong to a boundary
//! layer that calls [`CalculatorService`].
//!
//! # Example
//! ```
//! use calculator_core::{BinaryOp, CalcConfig, CalculatorService};
//!
//! let service = CalculatorService::new(CalcConfig::default());
//!
//! assert_eq!(service.calculate(BinaryOp::Add, 2.0, 3.0).unwrap(), 5.0);
//! assert_eq!(service.expression("(10 + 5) * 3 - 8").unwrap(), 37.0);
//!
//! let stats = service.get_stats();
//! assert_eq!(stats.total, 2);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod expr;
pub mod format;
pub mod history;
pub mod ops;
pub mod service;
pub mod stats;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{CalcConfig, ConfigError};
pub use error::{CalcError, CalcResult, ErrorKind};
pub use history::{CalculationOutcome, CalculationRecord, HistoryStore, Inputs};
pub use ops::{BinaryOp, Operation};
pub use service::{CalculatorService, ServiceInfo, ServiceLimits};
pub use stats::StatsSnapshot;

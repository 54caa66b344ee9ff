//! Structural and quality analysis of design trees.
//!
//! The analyzer treats every root and every nested instance as a component
//! and reports complexity, recognized patterns, reusability, accessibility
//! findings, performance estimates and recommendations. All scores are
//! heuristics.
//!
//! # Example
//!
//! ```ignore
//! use figura_analyze::analyze;
//!
//! let report = analyze(&tree);
//! for rec in &report.recommendations {
//!     println!("{}", rec.message);
//! }
//! ```

pub mod accessibility;
pub mod analyzer;
pub mod config;
pub mod heuristics;
pub mod patterns;
pub mod report;
pub mod reusability;

pub use analyzer::{analyze, collect_components, memory_footprint, render_cost, ComponentAnalyzer};
pub use config::AnalyzerConfig;
pub use patterns::{DetectorRegistry, PatternDetector};
pub use report::{
    AccessibilityIssue, AnalysisReport, AtomicTier, ComplexityEntry, Overview, PatternInstance,
    PerformanceEstimate, Recommendation, RecommendationKind, ReusabilityFactors, ReusabilityScore,
    Severity,
};

pub mod feasibility;
pub mod instance;
pub mod selection;

pub use feasibility::{
    assess_feasibility, FeasibilityReport, StrategyVerdict, DP_COMPLEXITY_CEILING,
    EXHAUSTIVE_MAX_ITEMS,
};
pub use instance::{density_descending, GenerationParams, Item, ProblemInstance};
pub use selection::{Selection, SolveOutcome};

pub use formica_core::{AntContext, StepParams, StepReport, World};
pub mod config {
    pub use formica_core::config::*;
}
pub mod behavior {
    pub use formica_core::behavior::*;
}
pub mod motion {
    pub use formica_core::motion::*;
}
pub mod lifecycle {
    pub use formica_core::lifecycle::*;
}
pub mod snapshot {
    pub use formica_core::snapshot::*;
}
pub mod metrics {
    pub use formica_core::metrics::*;
}
pub mod grid {
    pub use formica_core::grid::*;
}
pub mod error {
    pub use formica_core::error::*;
}

pub mod state {
    pub use formica_data::*;
}

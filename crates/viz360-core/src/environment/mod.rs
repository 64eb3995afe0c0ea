//! Environments: naming, labels, layout, registry store, viewer-state
//! synthesis and the manager that ties them together.

pub mod images;
pub mod label;
pub mod layout;
pub mod manager;
pub mod naming;
pub mod registry;
pub mod viewer_state;

pub use label::{sanitize_label, DaylightClassifier};
pub use layout::PublicLayout;
pub use manager::{
    AlwaysConfirm, ConfirmRemoval, EnvironmentManager, EnvironmentStatus, ManifestReport,
    RegisterOutcome, RegistryChange, RemovalPlan, UnregisterOutcome,
};
pub use naming::{derive_id, title_case};
pub use registry::{EnvironmentRecord, Registry, RegistryStore};
pub use viewer_state::{LightState, PresetWrite, ViewerState};

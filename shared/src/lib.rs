pub mod auth;
pub mod classify;
pub mod workflow;

pub use auth::{AuthError, CredentialVerifier, DemoVerifier, Session};
pub use classify::{AnalysisResult, Classifier, Outcome, Prediction, SimulatedClassifier};
pub use workflow::{RequestId, Stage, Workflow};

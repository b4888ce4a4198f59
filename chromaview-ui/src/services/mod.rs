//! Service layer: session guard, authenticator, artifact ingestor, series
//! extractor, and the remote metabolite query client.

pub mod authenticator;
pub mod extractor;
pub mod ingestor;
pub mod metabolite_client;
pub mod session;

pub use authenticator::{AuthError, Authenticator};
pub use ingestor::{ArtifactIngestor, IngestError, StagedArtifact};
pub use metabolite_client::{MetaboliteClient, MetaboliteError};
pub use session::{SessionRegistry, SessionState};

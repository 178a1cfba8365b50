//! Reconstructor - Biblioteca de reconstrucción sintáctica de oraciones
//!
//! Recibe oraciones ya etiquetadas (palabra + categoría gramatical), repara
//! patrones defectuosos y las reordena como sujeto-verbo-objeto usando solo
//! reglas sobre las etiquetas.

pub mod config;
pub mod error;
pub mod grammar;
pub mod reconstructor;
pub mod tagging;

pub use config::Config;
pub use error::ReconstructError;
pub use reconstructor::{
    Analysis, NoopObserver, Reconstructor, ReconstructorConfig, ReportObserver, StageObserver,
    TracingObserver,
};
pub use tagging::{CorrectionHandoff, InputFormat, SlashTagger, Tagger};

/*!
 * Core asset build operations
 */

pub mod atomic;
pub mod pipeline;
pub mod probe;

pub use pipeline::{
    ensure_output_dir, produce_css_artifact, produce_html_artifact, run_pipeline, ArtifactKind,
    ArtifactReport, PipelineReport,
};
pub use probe::Probe;

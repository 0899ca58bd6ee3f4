//! Rendering collaborator contract
//!
//! The widget tree never talks to a graphics API. It uploads meshes through a
//! [`MeshUploader`] once, then issues draws through a [`DrawHandles`] bundle
//! every frame. The real backend (shader programs, buffers, textures) lives
//! outside this crate.

pub mod api;
pub mod vertex;
pub mod primitives;
pub mod recording;

pub use api::{DrawHandles, MeshUploader, MeshHandle, TextureHandle, ShaderMode};
pub use vertex::Vertex;
pub use recording::{RecordingBackend, DrawCall};

use thiserror::Error;

/// Rendering collaborator errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend refused or failed a mesh upload
    #[error("Mesh upload failed: {0}")]
    UploadFailed(String),

    /// An empty vertex list was submitted
    #[error("Cannot upload an empty mesh")]
    EmptyMesh,

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for rendering collaborator operations
pub type RenderResult<T> = Result<T, RenderError>;

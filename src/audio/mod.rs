//! Audio output capability.
//!
//! The controller talks to audio only through [`AudioOutput`]:
//! - `rodio_output`: default-device playback through rodio
//! - `testing`: recording fake and WAV fixture writer for tests

mod rodio_output;
#[cfg(test)]
pub mod testing;

use std::time::Duration;

use crate::error::AudioError;

pub use rodio_output::RodioOutput;

/// Narrow load/play/stop contract the playback controller depends on
pub trait AudioOutput {
    /// A loaded resource, ready to play
    type Handle;

    /// Resolve and load a resource by id
    fn load(&mut self, resource_id: &str) -> Result<Self::Handle, AudioError>;

    /// Start rendering a loaded resource
    fn play(&mut self, handle: &mut Self::Handle) -> Result<(), AudioError>;

    /// Halt playback immediately; stopping an idle handle is a no-op
    fn stop(&mut self, handle: &mut Self::Handle);

    /// Advertised length of the resource
    fn duration(&self, handle: &Self::Handle) -> Duration;
}

//! Audio output using rodio
//!
//! Resources are files in the sounds directory. Each one is read fully into
//! memory and validated by decoding its header at load time, so a missing or
//! corrupt clip is rejected before the controller commits to a session.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sample, Sink, Source};
use tracing::{debug, info, warn};

use super::AudioOutput;
use crate::error::AudioError;

/// A decoded-once clip held in memory
pub struct Clip {
    resource_id: String,
    data: Arc<[u8]>,
    duration: Duration,
    sink: Option<Sink>,
}

impl Clip {
    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| !s.empty())
    }
}

impl std::fmt::Debug for Clip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clip")
            .field("resource_id", &self.resource_id)
            .field("bytes", &self.data.len())
            .field("duration", &self.duration)
            .field("playing", &self.sink.is_some())
            .finish()
    }
}

/// Plays clips on the default output device
pub struct RodioOutput {
    sounds_dir: PathBuf,
    volume: f32,
    // The stream must outlive every sink created from its handle
    stream: Option<(OutputStream, OutputStreamHandle)>,
}

impl RodioOutput {
    /// Open the default output device. Falls back to silent output when no
    /// device is available; loads and durations still work.
    pub fn new(sounds_dir: impl Into<PathBuf>, volume: f32) -> Self {
        let stream = match OutputStream::try_default() {
            Ok(stream) => {
                info!("opened default audio output device");
                Some(stream)
            }
            Err(e) => {
                warn!(error = %e, "no audio output device, clips will play silently");
                None
            }
        };

        Self {
            sounds_dir: sounds_dir.into(),
            volume: volume.clamp(0.0, 1.0),
            stream,
        }
    }

    /// Output that never touches an audio device
    #[cfg(test)]
    pub fn silent(sounds_dir: impl Into<PathBuf>) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
            volume: 1.0,
            stream: None,
        }
    }

    pub fn has_device(&self) -> bool {
        self.stream.is_some()
    }

    fn resolve(&self, resource_id: &str) -> Result<PathBuf, AudioError> {
        // Resource ids are bare file names inside the sounds directory
        let name = Path::new(resource_id);
        if name.components().count() != 1 || name.file_name().is_none() {
            return Err(AudioError::resource_load(resource_id, "invalid resource id"));
        }
        Ok(self.sounds_dir.join(name))
    }
}

/// Decode a clip and work out how long it plays for
fn probe_duration(resource_id: &str, data: &Arc<[u8]>) -> Result<Duration, AudioError> {
    let decoder = Decoder::new(Cursor::new(data.clone()))
        .map_err(|e| AudioError::resource_load(resource_id, e))?;
    Ok(source_duration(decoder))
}

/// Advertised length of a source, or the length of its decoded frames when
/// the container does not say
fn source_duration<S>(source: S) -> Duration
where
    S: Source,
    S::Item: Sample,
{
    if let Some(duration) = source.total_duration() {
        return duration;
    }

    let channels = u64::from(source.channels().max(1));
    let sample_rate = u64::from(source.sample_rate().max(1));
    let samples = source.count() as u64;
    let frames = samples / channels;
    Duration::from_secs_f64(frames as f64 / sample_rate as f64)
}

impl AudioOutput for RodioOutput {
    type Handle = Clip;

    fn load(&mut self, resource_id: &str) -> Result<Clip, AudioError> {
        let path = self.resolve(resource_id)?;
        let data: Arc<[u8]> = fs::read(&path)
            .map_err(|e| AudioError::resource_load(resource_id, e))?
            .into();
        let duration = probe_duration(resource_id, &data)?;

        debug!(resource = resource_id, ?duration, bytes = data.len(), "loaded clip");

        Ok(Clip {
            resource_id: resource_id.to_string(),
            data,
            duration,
            sink: None,
        })
    }

    fn play(&mut self, clip: &mut Clip) -> Result<(), AudioError> {
        let Some((_, handle)) = self.stream.as_ref() else {
            debug!(resource = %clip.resource_id, "no output device, playing silently");
            return Ok(());
        };

        let source = Decoder::new(Cursor::new(clip.data.clone()))
            .map_err(|e| AudioError::resource_load(&clip.resource_id, e))?;
        let sink = Sink::try_new(handle).map_err(|e| AudioError::Output(e.to_string()))?;
        sink.set_volume(self.volume);
        sink.append(source);
        sink.play();

        clip.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self, clip: &mut Clip) {
        if let Some(sink) = clip.sink.take() {
            sink.stop();
        }
    }

    fn duration(&self, clip: &Clip) -> Duration {
        clip.duration
    }
}

//! Test doubles for audio output

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::AudioOutput;
use crate::error::AudioError;

/// One call made against [`FakeOutput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Load(String),
    Play(String),
    Stop(String),
}

#[derive(Debug)]
pub struct FakeHandle {
    resource_id: String,
    duration: Duration,
    playing: bool,
}

/// Records every call and tracks how many clips play at once
#[derive(Debug, Default)]
pub struct FakeOutput {
    pub calls: Vec<Call>,
    durations: HashMap<String, Duration>,
    missing: HashSet<String>,
    refuse_play: HashSet<String>,
    active: usize,
    pub max_active: usize,
}

impl FakeOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, resource_id: &str, duration: Duration) -> Self {
        self.durations.insert(resource_id.to_string(), duration);
        self
    }

    /// Make `load` fail for this resource
    pub fn with_missing(mut self, resource_id: &str) -> Self {
        self.missing.insert(resource_id.to_string());
        self
    }

    /// Make `play` fail for this resource
    pub fn with_refused_play(mut self, resource_id: &str) -> Self {
        self.refuse_play.insert(resource_id.to_string());
        self
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl AudioOutput for FakeOutput {
    type Handle = FakeHandle;

    fn load(&mut self, resource_id: &str) -> Result<FakeHandle, AudioError> {
        self.calls.push(Call::Load(resource_id.to_string()));
        if self.missing.contains(resource_id) {
            return Err(AudioError::resource_load(resource_id, "not found"));
        }
        Ok(FakeHandle {
            resource_id: resource_id.to_string(),
            duration: self
                .durations
                .get(resource_id)
                .copied()
                .unwrap_or(Duration::from_secs(1)),
            playing: false,
        })
    }

    fn play(&mut self, handle: &mut FakeHandle) -> Result<(), AudioError> {
        self.calls.push(Call::Play(handle.resource_id.clone()));
        if self.refuse_play.contains(&handle.resource_id) {
            return Err(AudioError::Output("device busy".to_string()));
        }
        handle.playing = true;
        self.active += 1;
        self.max_active = self.max_active.max(self.active);
        Ok(())
    }

    fn stop(&mut self, handle: &mut FakeHandle) {
        self.calls.push(Call::Stop(handle.resource_id.clone()));
        if handle.playing {
            handle.playing = false;
            self.active -= 1;
        }
    }

    fn duration(&self, handle: &FakeHandle) -> Duration {
        handle.duration
    }
}

/// Write a silent 16-bit PCM WAV file
pub fn write_wav(path: &Path, sample_rate: u32, channels: u16, frames: u32) {
    let block_align = channels * 2;
    let data_len = frames * u32::from(block_align);

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    fs::write(path, bytes).unwrap();
}

use super::evolution_engine::ProgressCallback;
use serde::{Deserialize, Serialize};

/// Best individual of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub generation: usize,
    pub best_x: f64,
    pub best_fx: f64,
}

/// Writes each generation to the `log` facade.
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation);
    }

    fn on_generation_complete(&mut self, record: &ProgressRecord) {
        log::info!(
            "Generation {}: best f(x) = {:.4} at x = {:.4}",
            record.generation, record.best_fx, record.best_x
        );
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct RecordingProgressCallback {
    records: Vec<ProgressRecord>,
}

impl RecordingProgressCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ProgressRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ProgressRecord> {
        self.records
    }
}

impl ProgressCallback for RecordingProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, record: &ProgressRecord) {
        self.records.push(*record);
    }
}

// For a consumer on another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(ProgressRecord),
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, record: &ProgressRecord) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete(*record));
    }
}

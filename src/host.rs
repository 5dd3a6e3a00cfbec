//! Snapshot boundary with the editing surface.
//!
//! The engine never edits a diagram. It asks a [`SnapshotProvider`] for the
//! current snapshot when an export runs; collaboration layers push remote
//! snapshots through a [`RemoteSnapshotSink`], which replaces the current
//! one verbatim (last write wins, no diffing).

use std::path::Path;

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Source of the diagram to export.
pub trait SnapshotProvider {
    /// The current snapshot.
    fn current(&self) -> Snapshot;

    /// Replace the current snapshot.
    fn replace(&mut self, snapshot: Snapshot);
}

/// Receiver for snapshots produced by a remote participant.
pub trait RemoteSnapshotSink {
    fn deliver(&mut self, snapshot: Snapshot);
}

/// Holds the current snapshot in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemorySnapshotProvider {
    snapshot: Snapshot,
    revision: u64,
}

impl InMemorySnapshotProvider {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            revision: 0,
        }
    }

    /// An empty diagram.
    pub fn empty() -> Self {
        Self::new(Snapshot::from_value(serde_json::json!({ "cells": [] })))
    }

    /// Number of replacements so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Load a saved snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let snapshot = Snapshot::from_saved_json(&text)?;
        tracing::debug!(path = %path.display(), "Loaded snapshot");
        Ok(Self::new(snapshot))
    }

    /// Write the current snapshot in saved form.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.snapshot.to_saved_json()?)?;
        tracing::debug!(path = %path.display(), revision = self.revision, "Saved snapshot");
        Ok(())
    }
}

impl Default for InMemorySnapshotProvider {
    fn default() -> Self {
        Self::empty()
    }
}

impl SnapshotProvider for InMemorySnapshotProvider {
    fn current(&self) -> Snapshot {
        self.snapshot.clone()
    }

    fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.revision += 1;
    }
}

impl RemoteSnapshotSink for InMemorySnapshotProvider {
    fn deliver(&mut self, snapshot: Snapshot) {
        tracing::trace!(revision = self.revision + 1, "Remote snapshot delivered");
        self.replace(snapshot);
    }
}

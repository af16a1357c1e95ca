//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (input / manual velocity edits before the rapier step)
//! 2. Rapier (handled by plugin, PostUpdate)
//! 3. PostPhysicsAdjust (lightweight corrections after physics)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // gesture handling & velocity writes before the step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // settling checks after the previous step

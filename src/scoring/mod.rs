// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Field weights dominate: a clean title hit outranks a clean content hit.
//! Within equal aggregates, corpus order decides, so results never shuffle
//! between keystrokes.

mod core;
pub mod ranking;

pub use self::core::*;

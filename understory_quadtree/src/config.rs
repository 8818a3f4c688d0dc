// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subdivision limits and their validation.

use thiserror::Error;

/// Subdivision limits for a [`QuadTree`](crate::QuadTree).
///
/// A node stops subdividing once both its width and height are at most
/// `minimum_quad_size`, or once it sits at `max_depth` (the root is depth 0).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeConfig {
    /// Node extent at or below which subdivision stops.
    pub minimum_quad_size: f64,
    /// Maximum node depth.
    pub max_depth: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            minimum_quad_size: 1.0,
            max_depth: 10,
        }
    }
}

impl QuadTreeConfig {
    /// Replace the minimum quadrant size.
    #[must_use]
    pub const fn with_minimum_quad_size(mut self, minimum_quad_size: f64) -> Self {
        self.minimum_quad_size = minimum_quad_size;
        self
    }

    /// Replace the maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check the limits. Both must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_quad_size.is_nan() || self.minimum_quad_size <= 0.0 {
            return Err(ConfigError::NonPositiveMinimumQuadSize(
                self.minimum_quad_size,
            ));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        Ok(())
    }
}

/// Invalid [`QuadTreeConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `minimum_quad_size` was zero, negative, or NaN.
    #[error("minimum quad size must be strictly positive, got {0}")]
    NonPositiveMinimumQuadSize(f64),
    /// `max_depth` was zero.
    #[error("max depth must be at least 1")]
    ZeroMaxDepth,
}

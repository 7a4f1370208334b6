use serde::{Deserialize, Serialize};

use crate::render::LayerKind;

/// Bitmask of layers that must be rebuilt on the next render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayerMask {
    bits: u8,
}

impl LayerMask {
    const CHART: u8 = 1 << 0;
    const ENTRIES: u8 = 1 << 1;

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::CHART | Self::ENTRIES,
        }
    }

    #[must_use]
    pub const fn from_layer(kind: LayerKind) -> Self {
        Self {
            bits: Self::layer_bit(kind),
        }
    }

    #[must_use]
    pub const fn with_layer(self, kind: LayerKind) -> Self {
        Self {
            bits: self.bits | Self::layer_bit(kind),
        }
    }

    #[must_use]
    pub const fn merged(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains(self, kind: LayerKind) -> bool {
        self.bits & Self::layer_bit(kind) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn mark(&mut self, kind: LayerKind) {
        self.bits |= Self::layer_bit(kind);
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    const fn layer_bit(kind: LayerKind) -> u8 {
        match kind {
            LayerKind::Chart => Self::CHART,
            LayerKind::Entries => Self::ENTRIES,
        }
    }
}

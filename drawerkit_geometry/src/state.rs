// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Logical resting positions of a drawer.
///
/// Variants are declared from most expanded to most collapsed, so the derived
/// ordering reads as "collapsedness": `FullyExpanded < PartiallyExpanded <
/// Collapsed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawerState {
    /// Maximal height, with the top edge pinned to the full-expansion offset.
    FullyExpanded,
    /// Intermediate height. Drawers may opt out of this state.
    PartiallyExpanded,
    /// Minimal visible height.
    #[default]
    Collapsed,
}

impl DrawerState {
    /// All states, from most expanded to most collapsed.
    pub const ALL: [Self; 3] = [
        Self::FullyExpanded,
        Self::PartiallyExpanded,
        Self::Collapsed,
    ];

    /// Returns `true` for [`DrawerState::FullyExpanded`].
    #[must_use]
    pub fn is_fully_expanded(self) -> bool {
        self == Self::FullyExpanded
    }

    /// Returns `true` for [`DrawerState::Collapsed`].
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }
}

//! Player state: position and inventory.

use tessera_procedural::{TileKind, WorldCoord};

use crate::error::{GameError, GameResult};

/// Fixed-length row of item slots.
///
/// Length and slot order never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    slots: Box<[Option<TileKind>]>,
}

impl Inventory {
    /// Creates an inventory of `len` empty slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len].into_boxed_slice(),
        }
    }

    /// Item in a slot.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SlotOutOfRange`] past the last slot.
    pub fn get(&self, slot: usize) -> GameResult<Option<TileKind>> {
        self.slots.get(slot).copied().ok_or_else(|| self.out_of_range(slot))
    }

    /// Puts `item` in a slot, returning what was there.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SlotOutOfRange`] past the last slot.
    pub fn set(&mut self, slot: usize, item: Option<TileKind>) -> GameResult<Option<TileKind>> {
        let err = self.out_of_range(slot);
        let cell = self.slots.get_mut(slot).ok_or(err)?;
        Ok(std::mem::replace(cell, item))
    }

    /// Empties a slot, returning what was there.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SlotOutOfRange`] past the last slot.
    pub fn take(&mut self, slot: usize) -> GameResult<Option<TileKind>> {
        self.set(slot, None)
    }

    /// Puts `item` in the first empty slot. Returns the slot used, or
    /// `None` if every slot is full.
    pub fn insert(&mut self, item: TileKind) -> Option<usize> {
        let slot = self.first_empty()?;
        self.slots[slot] = Some(item);
        Some(slot)
    }

    /// Index of the first empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// All slots, in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<TileKind>] {
        &self.slots
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-slot inventory.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn out_of_range(&self, slot: usize) -> GameError {
        GameError::SlotOutOfRange {
            slot,
            len: self.slots.len(),
        }
    }
}

/// The player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    position: WorldCoord,
    /// Inclusive movement limits.
    bounds: (WorldCoord, WorldCoord),
    inventory: Inventory,
}

impl PlayerState {
    /// Player at the origin with an empty inventory, free to roam the
    /// whole `i32` grid.
    #[must_use]
    pub fn new(inventory_slots: usize) -> Self {
        Self {
            position: WorldCoord::ORIGIN,
            bounds: (WorldCoord::new(i32::MIN, i32::MIN), WorldCoord::new(i32::MAX, i32::MAX)),
            inventory: Inventory::new(inventory_slots),
        }
    }

    /// Limits movement to `min..=max` on both axes. The bounds must
    /// contain the current position.
    #[must_use]
    pub fn with_bounds(mut self, min: WorldCoord, max: WorldCoord) -> Self {
        self.bounds = (min, max);
        self
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> WorldCoord {
        self.position
    }

    /// Moves by `(dx, dy)`. No collision checks; the position stops at the
    /// movement bounds.
    pub fn translate(&mut self, dx: i32, dy: i32) -> WorldCoord {
        let (min, max) = self.bounds;
        self.position = WorldCoord::new(
            self.position.x.saturating_add(dx).clamp(min.x, max.x),
            self.position.y.saturating_add(dy).clamp(min.y, max.y),
        );
        self.position
    }

    /// The inventory.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The inventory, mutably.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

//! Hotbar inventory: fixed slots, stacking, selection.

use crate::shared::*;

impl ItemKind {
    /// Largest quantity a single slot can hold.
    pub fn max_stack(self) -> u32 {
        match self {
            ItemKind::Tool(_) => 1,
            ItemKind::Seed(_) | ItemKind::Produce(_) => 99,
        }
    }
}

impl Inventory {
    /// How many of `kind` could be added right now without touching any
    /// other stack.
    fn capacity_for(&self, kind: ItemKind) -> u64 {
        let max = kind.max_stack() as u64;
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(s) if s.kind == kind => max.saturating_sub(s.quantity as u64),
                Some(_) => 0,
                None => max,
            })
            .sum()
    }

    pub fn can_accept(&self, kind: ItemKind, quantity: u32) -> bool {
        self.capacity_for(kind) >= quantity as u64
    }

    /// Adds `quantity` of `kind`, topping up existing stacks first and then
    /// filling empty slots in order. All or nothing: returns false and leaves
    /// the inventory unchanged if it cannot all fit.
    pub fn add(&mut self, kind: ItemKind, quantity: u32) -> bool {
        if !self.can_accept(kind, quantity) {
            return false;
        }
        let max = kind.max_stack();
        let mut remaining = quantity;

        for stack in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if stack.kind == kind && stack.quantity < max {
                let add = remaining.min(max - stack.quantity);
                stack.quantity += add;
                remaining -= add;
            }
        }

        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let add = remaining.min(max);
                *slot = Some(ItemStack { kind, quantity: add });
                remaining -= add;
            }
        }

        true
    }

    /// Removes `quantity` of `kind`, taking from the selected slot first.
    /// Returns false and changes nothing if there are not enough.
    pub fn remove(&mut self, kind: ItemKind, quantity: u32) -> bool {
        if !self.has(kind, quantity) {
            return false;
        }
        let mut remaining = quantity;
        let selected = self.selected_slot;
        let order = std::iter::once(selected).chain((0..self.slots.len()).filter(|&i| i != selected));

        for i in order {
            if remaining == 0 {
                break;
            }
            let Some(slot) = self.slots.get_mut(i) else {
                continue;
            };
            if let Some(stack) = slot {
                if stack.kind == kind {
                    let take = remaining.min(stack.quantity);
                    stack.quantity -= take;
                    remaining -= take;
                    if stack.quantity == 0 {
                        *slot = None;
                    }
                }
            }
        }
        true
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.kind == kind)
            .map(|s| s.quantity)
            .sum()
    }

    pub fn has(&self, kind: ItemKind, quantity: u32) -> bool {
        self.count(kind) >= quantity
    }

    pub fn selected(&self) -> Option<&ItemStack> {
        self.slots.get(self.selected_slot).and_then(|s| s.as_ref())
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Selects a hotbar slot. Out-of-range indices are ignored.
    pub fn select_slot(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.selected_slot = index;
        true
    }

    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    /// Number-row mapping: keys 1-9 pick slots 0-8, key 0 picks slot 9.
    pub fn slot_for_digit(digit: u8) -> Option<usize> {
        match digit {
            1..=9 => Some(digit as usize - 1),
            0 => Some(9),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHEAT_SEEDS: ItemKind = ItemKind::Seed(CropKind::Wheat);
    const CORN: ItemKind = ItemKind::Produce(CropKind::Corn);

    #[test]
    fn test_default_loadout() {
        let inv = Inventory::default();
        assert_eq!(inv.slots().len(), INVENTORY_SLOTS);
        assert_eq!(inv.count(WHEAT_SEEDS), 10);
        assert_eq!(inv.count(ItemKind::Seed(CropKind::Corn)), 5);
        assert!(inv.has(ItemKind::Tool(ToolKind::Hoe), 1));
        assert!(inv.has(ItemKind::Tool(ToolKind::WateringCan), 1));
        assert_eq!(inv.selected().map(|s| s.kind), Some(WHEAT_SEEDS));
    }

    #[test]
    fn test_add_stacks_onto_existing_slot() {
        let mut inv = Inventory::empty();
        assert!(inv.add(CORN, 3));
        assert!(inv.add(CORN, 4));
        assert_eq!(inv.slots()[0], Some(ItemStack { kind: CORN, quantity: 7 }));
        assert!(inv.slots()[1].is_none());
    }

    #[test]
    fn test_tools_do_not_stack() {
        let mut inv = Inventory::empty();
        assert!(inv.add(ItemKind::Tool(ToolKind::Hoe), 2));
        assert_eq!(inv.slots()[0].map(|s| s.quantity), Some(1));
        assert_eq!(inv.slots()[1].map(|s| s.quantity), Some(1));
    }

    #[test]
    fn test_full_inventory_rejects_without_change() {
        let mut inv = Inventory::empty();
        for crop in CropKind::ALL {
            assert!(inv.add(ItemKind::Seed(crop), 1));
        }
        for _ in 0..6 {
            assert!(inv.add(ItemKind::Tool(ToolKind::Hoe), 1));
        }
        let before = inv.clone();
        assert!(!inv.can_accept(CORN, 1));
        assert!(!inv.add(CORN, 1));
        assert_eq!(inv.slots(), before.slots());

        // Existing stacks still accept more of the same kind.
        assert!(inv.add(WHEAT_SEEDS, 5));
        assert_eq!(inv.count(WHEAT_SEEDS), 6);
    }

    #[test]
    fn test_remove_empties_slot_in_place() {
        let mut inv = Inventory::default();
        assert!(inv.remove(WHEAT_SEEDS, 10));
        assert!(inv.slots()[0].is_none());
        assert_eq!(inv.slots()[1].map(|s| s.kind), Some(ItemKind::Seed(CropKind::Corn)));
        assert!(inv.selected().is_none());
    }

    #[test]
    fn test_remove_more_than_held_fails() {
        let mut inv = Inventory::default();
        assert!(!inv.remove(WHEAT_SEEDS, 11));
        assert_eq!(inv.count(WHEAT_SEEDS), 10);
    }

    #[test]
    fn test_select_slot_bounds() {
        let mut inv = Inventory::default();
        assert!(inv.select_slot(2));
        assert_eq!(inv.selected_slot(), 2);
        assert!(!inv.select_slot(INVENTORY_SLOTS));
        assert_eq!(inv.selected_slot(), 2);
    }

    #[test]
    fn test_slot_for_digit() {
        assert_eq!(Inventory::slot_for_digit(1), Some(0));
        assert_eq!(Inventory::slot_for_digit(9), Some(8));
        assert_eq!(Inventory::slot_for_digit(0), Some(9));
        assert_eq!(Inventory::slot_for_digit(10), None);
    }
}

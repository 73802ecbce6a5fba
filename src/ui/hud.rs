use bevy::prelude::*;
use serde::Serialize;
use crate::shared::*;

/// One hotbar cell as a renderer would draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotbarEntry {
    /// Item name, shortened to fit a slot. Empty for an empty slot.
    pub label: String,
    pub quantity: u32,
    pub selected: bool,
}

/// Everything the heads-up display shows, refreshed every frame.
#[derive(Resource, Debug, Clone, Default, Serialize)]
pub struct HudSnapshot {
    pub time_text: String,
    pub date_text: String,
    pub energy_fraction: f32,
    pub light_intensity: f32,
    pub hotbar: Vec<HotbarEntry>,
}

fn short_label(name: &str) -> String {
    if name.chars().count() > 6 {
        let head: String = name.chars().take(5).collect();
        format!("{}.", head)
    } else {
        name.to_string()
    }
}

pub fn hotbar_entries(inventory: &Inventory) -> Vec<HotbarEntry> {
    inventory
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| HotbarEntry {
            label: slot
                .map(|s| short_label(&s.kind.display_name()))
                .unwrap_or_default(),
            quantity: slot.map(|s| s.quantity).unwrap_or(0),
            selected: i == inventory.selected_slot(),
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn update_time_display(calendar: Res<Calendar>, mut hud: ResMut<HudSnapshot>) {
    if !calendar.is_changed() && !hud.time_text.is_empty() {
        return;
    }
    hud.time_text = calendar.formatted_time();
    hud.date_text = calendar.formatted_date();
}

pub fn update_energy_bar(
    player: Res<PlayerState>,
    tint: Res<DayNightTint>,
    mut hud: ResMut<HudSnapshot>,
) {
    hud.energy_fraction = player.energy_percentage();
    hud.light_intensity = tint.intensity;
}

pub fn update_hotbar(inventory: Res<Inventory>, mut hud: ResMut<HudSnapshot>) {
    if !inventory.is_changed() && !hud.hotbar.is_empty() {
        return;
    }
    hud.hotbar = hotbar_entries(&inventory);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Corn"), "Corn");
        assert_eq!(short_label("Wheat Seeds"), "Wheat.");
        assert_eq!(short_label("Carrot"), "Carrot");
    }

    #[test]
    fn test_hotbar_entries_mark_selection() {
        let mut inventory = Inventory::default();
        inventory.select_slot(2);
        let entries = hotbar_entries(&inventory);

        assert_eq!(entries.len(), INVENTORY_SLOTS);
        assert_eq!(entries[0].label, "Wheat.");
        assert_eq!(entries[0].quantity, 10);
        assert!(entries[2].selected);
        assert_eq!(entries[2].label, "Hoe");
        assert_eq!(entries[9].label, "");
        assert_eq!(entries[9].quantity, 0);
        assert_eq!(entries.iter().filter(|e| e.selected).count(), 1);
    }
}

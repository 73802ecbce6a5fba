use bevy::prelude::*;
use crate::shared::*;

/// Energy a successful action costs.
pub fn energy_cost(action: FarmAction, config: &SimConfig) -> f32 {
    match action {
        FarmAction::UseSelectedItem => config.tool_energy_cost,
        FarmAction::Harvest => config.harvest_energy_cost,
    }
}

/// Resolve one farming action against the cell at `target`.
///
/// Legality is checked first, then energy is spent, then the grid and
/// inventory change. A rejected action leaves every input untouched.
pub fn perform_action(
    action: FarmAction,
    target: IVec2,
    farm: &mut FarmGrid,
    player: &mut PlayerState,
    inventory: &mut Inventory,
    config: &SimConfig,
) -> ActionOutcome {
    let (x, y) = (target.x, target.y);

    // Check the cell and the hotbar before touching energy.
    let outcome = match action {
        FarmAction::UseSelectedItem => {
            let Some(stack) = inventory.selected() else {
                return ActionOutcome::Rejected(ActionRejection::NoItemSelected);
            };
            match stack.kind {
                ItemKind::Tool(ToolKind::Hoe) if farm.can_till(x, y) => ActionOutcome::Tilled,
                ItemKind::Tool(ToolKind::Hoe) => {
                    return ActionOutcome::Rejected(ActionRejection::CannotTill)
                }
                ItemKind::Tool(ToolKind::WateringCan) if farm.can_water(x, y) => {
                    ActionOutcome::Watered
                }
                ItemKind::Tool(ToolKind::WateringCan) => {
                    return ActionOutcome::Rejected(ActionRejection::CannotWater)
                }
                ItemKind::Seed(crop) if farm.can_plant(x, y) => ActionOutcome::Planted(crop),
                ItemKind::Seed(_) => return ActionOutcome::Rejected(ActionRejection::CannotPlant),
                other @ ItemKind::Produce(_) => {
                    return ActionOutcome::Rejected(ActionRejection::NotUsable(other))
                }
            }
        }
        FarmAction::Harvest => {
            let Some(crop) = farm.get_crop(x, y).filter(|c| c.is_ready_to_harvest()) else {
                return ActionOutcome::Rejected(ActionRejection::NothingToHarvest);
            };
            if !inventory.can_accept(crop.kind.produce(), 1) {
                return ActionOutcome::Rejected(ActionRejection::InventoryFull);
            }
            ActionOutcome::Harvested(crop.kind)
        }
    };

    let cost = energy_cost(action, config);
    if !player.consume_energy(cost) {
        return ActionOutcome::Rejected(ActionRejection::NotEnoughEnergy {
            required: cost,
            available: player.energy,
        });
    }

    match outcome {
        ActionOutcome::Tilled => {
            farm.till_soil(x, y);
        }
        ActionOutcome::Watered => {
            farm.water_soil(x, y);
        }
        ActionOutcome::Planted(crop) => {
            inventory.remove(crop.seed(), 1);
            farm.plant_crop(x, y, crop);
        }
        ActionOutcome::Harvested(_) => {
            if let Some(crop) = farm.harvest_crop(x, y) {
                inventory.add(crop.produce(), 1);
            }
        }
        ActionOutcome::Rejected(_) => {}
    }

    outcome
}

/// Resolve every queued FarmActionEvent in order.
pub fn handle_farm_actions(
    mut action_events: EventReader<FarmActionEvent>,
    mut farm: ResMut<FarmGrid>,
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    config: Res<SimConfig>,
    mut resolved_events: EventWriter<ActionResolvedEvent>,
    mut harvest_events: EventWriter<CropHarvestedEvent>,
    mut removed_events: EventWriter<ItemRemovedEvent>,
) {
    for event in action_events.read() {
        let outcome = perform_action(
            event.action,
            event.target,
            &mut farm,
            &mut player,
            &mut inventory,
            &config,
        );

        match outcome {
            ActionOutcome::Planted(crop) => {
                removed_events.send(ItemRemovedEvent {
                    item: crop.seed(),
                    quantity: 1,
                });
                info!("[Player] Planted {} at ({}, {})", crop.name(), event.target.x, event.target.y);
            }
            ActionOutcome::Harvested(crop) => {
                harvest_events.send(CropHarvestedEvent {
                    crop,
                    x: event.target.x,
                    y: event.target.y,
                });
                info!("[Player] Harvested {} at ({}, {})", crop.name(), event.target.x, event.target.y);
            }
            ActionOutcome::Rejected(ActionRejection::NotEnoughEnergy { required, available }) => {
                warn!(
                    "[Player] Too tired for {:?}: needs {:.0} energy, has {:.1}",
                    event.action, required, available
                );
            }
            ActionOutcome::Rejected(reason) => {
                debug!("[Player] {:?} at {} rejected: {:?}", event.action, event.target, reason);
            }
            ActionOutcome::Tilled | ActionOutcome::Watered => {
                debug!("[Player] {:?} at {}", outcome, event.target);
            }
        }

        resolved_events.send(ActionResolvedEvent {
            action: event.action,
            target: event.target,
            outcome,
        });
    }
}

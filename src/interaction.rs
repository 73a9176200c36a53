//! Drag interaction as a pure state machine over the simulation: no render
//! surface involved. Each node is either free or pinning; the controller
//! raises the simulation's target energy while any drag is active and lets
//! it settle again when the last one ends.

use crate::config::SimulationTuning;
use crate::simulation::Simulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Free,
    Pinning,
}

#[derive(Debug, Clone)]
pub struct DragController {
    states: Vec<DragState>,
    active: usize,
    drag_alpha_target: f64,
}

impl DragController {
    pub fn new(node_count: usize, tuning: &SimulationTuning) -> Self {
        Self {
            states: vec![DragState::Free; node_count],
            active: 0,
            drag_alpha_target: tuning.drag_alpha_target,
        }
    }

    pub fn state(&self, node: usize) -> DragState {
        self.states[node]
    }

    pub fn active_drags(&self) -> usize {
        self.active
    }

    /// `free -> pinning`: pins the node at its current simulated position.
    /// The first active drag re-heats the simulation so the graph keeps
    /// moving under the pointer.
    pub fn drag_start(&mut self, simulation: &mut Simulation, node: usize) {
        if self.states[node] == DragState::Pinning {
            return;
        }
        if self.active == 0 {
            simulation.set_alpha_target(self.drag_alpha_target);
            simulation.restart();
        }
        let body = simulation.bodies()[node];
        simulation.pin(node, body.x, body.y);
        self.states[node] = DragState::Pinning;
        self.active += 1;
    }

    /// `pinning -> pinning`: the pin tracks the pointer exactly.
    pub fn drag_move(&mut self, simulation: &mut Simulation, node: usize, x: f64, y: f64) {
        if self.states[node] == DragState::Pinning {
            simulation.pin(node, x, y);
        }
    }

    /// `pinning -> free`: releases the pin; the last active drag lowers the
    /// target energy back to rest.
    pub fn drag_end(&mut self, simulation: &mut Simulation, node: usize) {
        if self.states[node] != DragState::Pinning {
            return;
        }
        simulation.unpin(node);
        self.states[node] = DragState::Free;
        self.active -= 1;
        if self.active == 0 {
            simulation.set_alpha_target(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphSettings;

    fn setup(node_count: usize) -> (Simulation, DragController) {
        let tuning = SimulationTuning::default();
        let simulation = Simulation::new(node_count, &[], &GraphSettings::default(), &tuning);
        let controller = DragController::new(node_count, &tuning);
        (simulation, controller)
    }

    #[test]
    fn drag_start_pins_at_current_position() {
        let (mut sim, mut drag) = setup(2);
        let before = sim.bodies()[0];
        drag.drag_start(&mut sim, 0);
        assert_eq!(drag.state(0), DragState::Pinning);
        assert_eq!(sim.bodies()[0].fx, Some(before.x));
        assert_eq!(sim.bodies()[0].fy, Some(before.y));
    }

    #[test]
    fn first_drag_raises_target_energy() {
        let (mut sim, mut drag) = setup(3);
        assert_eq!(sim.alpha_target(), 0.0);
        drag.drag_start(&mut sim, 0);
        assert_eq!(sim.alpha_target(), 0.3);
        // A second concurrent drag leaves it as is.
        drag.drag_start(&mut sim, 1);
        assert_eq!(sim.alpha_target(), 0.3);
    }

    #[test]
    fn drag_move_tracks_pointer() {
        let (mut sim, mut drag) = setup(2);
        drag.drag_start(&mut sim, 0);
        drag.drag_move(&mut sim, 0, 55.0, -20.0);
        sim.tick();
        assert_eq!(sim.bodies()[0].x, 55.0);
        assert_eq!(sim.bodies()[0].y, -20.0);
    }

    #[test]
    fn move_on_free_node_is_ignored() {
        let (mut sim, mut drag) = setup(2);
        drag.drag_move(&mut sim, 0, 99.0, 99.0);
        assert_eq!(sim.bodies()[0].fx, None);
    }

    #[test]
    fn last_drag_end_settles_the_simulation() {
        let (mut sim, mut drag) = setup(3);
        drag.drag_start(&mut sim, 0);
        drag.drag_start(&mut sim, 1);
        drag.drag_end(&mut sim, 0);
        assert_eq!(sim.alpha_target(), 0.3);
        assert_eq!(drag.active_drags(), 1);
        drag.drag_end(&mut sim, 1);
        assert_eq!(sim.alpha_target(), 0.0);
        assert_eq!(drag.active_drags(), 0);
        assert_eq!(sim.bodies()[1].fx, None);
    }

    #[test]
    fn transitions_are_idempotent() {
        let (mut sim, mut drag) = setup(2);
        drag.drag_start(&mut sim, 0);
        drag.drag_start(&mut sim, 0);
        assert_eq!(drag.active_drags(), 1);
        drag.drag_end(&mut sim, 0);
        drag.drag_end(&mut sim, 0);
        assert_eq!(drag.active_drags(), 0);
    }
}

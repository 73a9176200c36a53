//! Force simulation over the filtered graph: a link spring force pulls
//! connected nodes toward a target distance, a many-body charge repels all
//! pairs, and an alpha value cools the system toward rest. Positions are
//! mutated in place each tick and exposed as post-tick snapshots.

use crate::config::{GraphSettings, SimulationTuning};

/// Per-node simulation state. `fx`/`fy` pin the node while set, overriding
/// the force model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub fx: Option<f64>,
    pub fy: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    links: Vec<(usize, usize)>,
    /// Spring strength per link: 1 / min(degree(source), degree(target)).
    strength: Vec<f64>,
    /// Share of each link's displacement taken by the target endpoint.
    bias: Vec<f64>,
    link_distance: f64,
    charge_strength: f64,
    alpha: f64,
    alpha_min: f64,
    alpha_decay: f64,
    alpha_target: f64,
    velocity_decay: f64,
}

impl Simulation {
    /// Builds a simulation over `node_count` bodies and the given links
    /// (index pairs into the node set). Initial placement is the
    /// deterministic phyllotaxis spiral, so runs are reproducible.
    pub fn new(
        node_count: usize,
        links: &[(usize, usize)],
        settings: &GraphSettings,
        tuning: &SimulationTuning,
    ) -> Self {
        let initial_radius = 10.0;
        let initial_angle = std::f64::consts::PI * (3.0 - 5.0f64.sqrt());
        let bodies = (0..node_count)
            .map(|i| {
                let radius = initial_radius * (0.5 + i as f64).sqrt();
                let angle = i as f64 * initial_angle;
                Body {
                    x: radius * angle.cos(),
                    y: radius * angle.sin(),
                    ..Body::default()
                }
            })
            .collect();

        let mut degree = vec![0usize; node_count];
        for &(source, target) in links {
            degree[source] += 1;
            degree[target] += 1;
        }
        let strength = links
            .iter()
            .map(|&(s, t)| 1.0 / degree[s].min(degree[t]).max(1) as f64)
            .collect();
        let bias = links
            .iter()
            .map(|&(s, t)| {
                let total = degree[s] + degree[t];
                if total == 0 {
                    0.5
                } else {
                    degree[s] as f64 / total as f64
                }
            })
            .collect();

        Self {
            bodies,
            links: links.to_vec(),
            strength,
            bias,
            link_distance: settings.link_distance,
            charge_strength: settings.charge_strength,
            alpha: 1.0,
            alpha_min: tuning.alpha_min,
            alpha_decay: tuning.alpha_decay,
            alpha_target: 0.0,
            velocity_decay: tuning.velocity_decay,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn alpha_target(&self) -> f64 {
        self.alpha_target
    }

    pub fn set_alpha_target(&mut self, target: f64) {
        self.alpha_target = target;
    }

    /// Re-arms a settled simulation so the next ticks run again.
    pub fn restart(&mut self) {
        if self.alpha < self.alpha_min {
            self.alpha = self.alpha_min;
        }
    }

    /// The simulation is active until alpha cools below its minimum; a
    /// raised target keeps it active even from a settled state, since the
    /// next tick pulls alpha back up toward the target.
    pub fn active(&self) -> bool {
        self.alpha >= self.alpha_min || self.alpha_target > 0.0
    }

    /// Pins a node: its position snaps to (x, y) every tick and the forces
    /// stop moving it until [`Simulation::unpin`].
    pub fn pin(&mut self, node: usize, x: f64, y: f64) {
        let body = &mut self.bodies[node];
        body.fx = Some(x);
        body.fy = Some(y);
    }

    pub fn unpin(&mut self, node: usize) {
        let body = &mut self.bodies[node];
        body.fx = None;
        body.fy = None;
    }

    /// Advances the simulation one step, mutating every body in place.
    pub fn tick(&mut self) {
        self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
        self.apply_link_force();
        self.apply_charge_force();
        self.integrate();
    }

    /// Ticks until the simulation settles or `max_ticks` is reached,
    /// handing the observer a post-tick snapshot each step.
    pub fn run<F: FnMut(&[Body])>(&mut self, max_ticks: usize, mut observer: F) {
        for _ in 0..max_ticks {
            if !self.active() {
                break;
            }
            self.tick();
            observer(&self.bodies);
        }
    }

    fn apply_link_force(&mut self) {
        for (idx, &(source, target)) in self.links.iter().enumerate() {
            let a = self.bodies[source];
            let b = self.bodies[target];
            let mut dx = b.x + b.vx - a.x - a.vx;
            let mut dy = b.y + b.vy - a.y - a.vy;
            if dx == 0.0 && dy == 0.0 {
                dx = 1e-6;
                dy = 1e-6;
            }
            let distance = (dx * dx + dy * dy).sqrt();
            let adjust =
                (distance - self.link_distance) / distance * self.alpha * self.strength[idx];
            let (fx, fy) = (dx * adjust, dy * adjust);
            let bias = self.bias[idx];
            self.bodies[target].vx -= fx * bias;
            self.bodies[target].vy -= fy * bias;
            self.bodies[source].vx += fx * (1.0 - bias);
            self.bodies[source].vy += fy * (1.0 - bias);
        }
    }

    fn apply_charge_force(&mut self) {
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = self.bodies[j].x - self.bodies[i].x;
                let dy = self.bodies[j].y - self.bodies[i].y;
                let distance_sq = dx * dx + dy * dy + 1e-4;
                let weight = self.charge_strength * self.alpha / distance_sq;
                self.bodies[i].vx += dx * weight;
                self.bodies[i].vy += dy * weight;
                self.bodies[j].vx -= dx * weight;
                self.bodies[j].vy -= dy * weight;
            }
        }
    }

    fn integrate(&mut self) {
        let retain = 1.0 - self.velocity_decay;
        for body in &mut self.bodies {
            if let (Some(fx), Some(fy)) = (body.fx, body.fy) {
                body.x = fx;
                body.y = fy;
                body.vx = 0.0;
                body.vy = 0.0;
            } else {
                body.vx *= retain;
                body.vy *= retain;
                body.x += body.vx;
                body.y += body.vy;
            }
        }
    }
}

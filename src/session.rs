use crate::config::Config;
use crate::interaction::{DragController, DragState};
use crate::model::GraphModel;
use crate::parser::RawDocument;
use crate::render::{Scene, render_svg};
use crate::simulation::{Body, Simulation};
use crate::theme::Palette;

/// One rendering session: the filtered graph, its simulation, the ordinal
/// palette, the language preference and the label-visibility flag, with no
/// state shared across sessions. Loading a new document means constructing
/// a new session; the old simulation is dropped with it.
pub struct GraphSession {
    model: GraphModel,
    language: String,
    config: Config,
    palette: Palette,
    simulation: Simulation,
    drag: DragController,
    labels_hidden: bool,
}

impl GraphSession {
    pub fn new(document: &RawDocument, language: &str, config: &Config) -> Self {
        let model = GraphModel::build(document);
        let pairs: Vec<(usize, usize)> = model
            .links
            .iter()
            .map(|link| (link.source, link.target))
            .collect();
        let simulation = Simulation::new(
            model.nodes.len(),
            &pairs,
            &config.settings,
            &config.simulation,
        );
        let drag = DragController::new(model.nodes.len(), &config.simulation);
        Self {
            model,
            language: language.to_string(),
            config: config.clone(),
            palette: Palette::new(),
            simulation,
            drag,
            // Relation labels start hidden, as in the original viewer.
            labels_hidden: true,
        }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn positions(&self) -> &[Body] {
        self.simulation.bodies()
    }

    /// Runs the simulation until it settles, capped at `max_ticks`.
    pub fn run_layout(&mut self, max_ticks: usize) {
        self.simulation.run(max_ticks, |_| {});
    }

    /// Advances one tick; returns false once the simulation has settled.
    pub fn tick_once(&mut self) -> bool {
        if !self.simulation.active() {
            return false;
        }
        self.simulation.tick();
        true
    }

    pub fn labels_hidden(&self) -> bool {
        self.labels_hidden
    }

    pub fn set_labels_hidden(&mut self, hidden: bool) {
        self.labels_hidden = hidden;
    }

    pub fn drag_state(&self, node: usize) -> DragState {
        self.drag.state(node)
    }

    pub fn drag_start(&mut self, node: usize) {
        self.drag.drag_start(&mut self.simulation, node);
    }

    pub fn drag_move(&mut self, node: usize, x: f64, y: f64) {
        self.drag.drag_move(&mut self.simulation, node, x, y);
    }

    pub fn drag_end(&mut self, node: usize) {
        self.drag.drag_end(&mut self.simulation, node);
    }

    /// Serializes the current markup. The result can be written verbatim to
    /// a `.svg` file.
    pub fn render_svg(&mut self) -> String {
        let scene = Scene {
            model: &self.model,
            bodies: self.simulation.bodies(),
            language: &self.language,
            settings: &self.config.settings,
            render: &self.config.render,
            theme: &self.config.theme,
            labels_hidden: self.labels_hidden,
        };
        render_svg(&scene, &mut self.palette)
    }
}

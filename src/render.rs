use crate::config::{GraphSettings, RenderConfig};
use crate::geometry::{Point, compute_path};
use crate::model::{CONCEPT_CLASS, GraphModel};
use crate::resolve::{relation_color, relation_display_name, resolve_home, resolve_label};
use crate::simulation::Body;
use crate::theme::{Palette, Theme, brighter, darker};
use anyhow::Result;
use std::path::Path;

/// Everything the renderer reads: the filtered graph, the current position
/// snapshot, and the session's display settings.
pub struct Scene<'a> {
    pub model: &'a GraphModel,
    pub bodies: &'a [Body],
    pub language: &'a str,
    pub settings: &'a GraphSettings,
    pub render: &'a RenderConfig,
    pub theme: &'a Theme,
    /// When set, relation labels carry the `hide-label` marker class.
    pub labels_hidden: bool,
}

/// Serializes the scene to SVG markup: arrowhead defs, one group per link
/// (curved path plus text-on-path label) and one group per node (circle
/// plus label), all inside a wrapping `<g class="viewport">` that a host
/// can pan and zoom with a single transform.
pub fn render_svg(scene: &Scene, palette: &mut Palette) -> String {
    let width = scene.render.width.max(1.0);
    let height = scene.render.height.max(1.0);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{width}\" height=\"{height}\" viewBox=\"{:.2} {:.2} {width} {height}\">",
        -width / 2.0,
        -height / 2.0
    ));

    svg.push_str("<defs>");
    svg.push_str(&format!(
        "<marker id=\"arrowhead\" viewBox=\"0 0 20 20\" refX=\"4\" refY=\"10\" markerWidth=\"20\" markerHeight=\"20\" orient=\"auto\" markerUnits=\"userSpaceOnUse\"><path d=\"M 20 0 L 0 10 L 20 20\" fill=\"{}\"/></marker>",
        scene.theme.arrowhead_fill
    ));
    svg.push_str("</defs>");

    svg.push_str("<g class=\"viewport\">");

    svg.push_str("<g>");
    for link in &scene.model.links {
        let source = scene.bodies[link.source];
        let target = scene.bodies[link.target];
        let path = compute_path(
            Point::new(source.x, source.y),
            Point::new(target.x, target.y),
            scene.settings.node_radius,
            scene.settings.link_curvature,
            scene.settings.intersection_offset,
        );
        svg.push_str(&format!(
            "<g><path id=\"{}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" marker-start=\"url(#arrowhead)\"/>",
            link.element_id,
            path.to_svg(),
            relation_color(&link.relation),
            scene.theme.link_stroke_width
        ));
        let class = if scene.labels_hidden {
            " class=\"hide-label\""
        } else {
            ""
        };
        svg.push_str(&format!(
            "<text text-anchor=\"middle\" dy=\"{}\" style=\"pointer-events: none\"><textPath{class} xlink:href=\"#{}\" startOffset=\"50%\">{}</textPath></text></g>",
            scene.theme.link_label_dy,
            link.element_id,
            escape_xml(relation_display_name(&link.relation))
        ));
    }
    svg.push_str("</g>");

    svg.push_str(&format!(
        "<g stroke=\"{}\" stroke-width=\"{}\">",
        scene.theme.node_stroke, scene.theme.node_stroke_width
    ));
    for (idx, node) in scene.model.nodes.iter().enumerate() {
        let body = scene.bodies[idx];
        let home = resolve_home(&scene.model.membership, &node.uri);
        let base = palette.color(home);
        let label = if node.classes.iter().any(|class| class == CONCEPT_CLASS) {
            resolve_label(&node.pref_labels, scene.language)
        } else {
            node.uri.clone()
        };
        svg.push_str(&format!(
            "<g><circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>",
            body.x,
            body.y,
            scene.settings.node_radius,
            darker(base, 2.0)
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" stroke=\"none\" text-anchor=\"middle\" style=\"font-family: {};\">{}</text></g>",
            body.x,
            body.y,
            brighter(base, 1.0),
            scene.theme.font_family,
            escape_xml(&label)
        ));
    }
    svg.push_str("</g>");

    svg.push_str("</g></svg>");
    svg
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{svg}");
        }
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

use std::{borrow::Cow, f64::consts::PI, fmt::Write};

use crate::{entities::DebtGraph, presentation::utils::fixed};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const NODE_RADIUS: f64 = 30.0;
const MAX_CURVE: f64 = 50.0;
const LABEL_CHAR_WIDTH: f64 = 7.0;
const MAX_NAME_CHARS: usize = 8;
const TRUNCATED_NAME_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

struct Palette {
    node: &'static str,
    node_stroke: &'static str,
    arrow: &'static str,
    text: &'static str,
    background: &'static str,
    border: &'static str,
}

impl Theme {
    fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                node: "#4a9eff",
                node_stroke: "#2d2d2d",
                arrow: "#ef4444",
                text: "#ffffff",
                background: "#2d2d2d",
                border: "#555555",
            },
            Theme::Light => Palette {
                node: "#007bff",
                node_stroke: "#ffffff",
                arrow: "#dc3545",
                text: "#333333",
                background: "#ffffff",
                border: "#dddddd",
            },
        }
    }
}

/// Draws a debt graph as participants on a circle with curved arrows from
/// each debtor to the creditor they owe, labelled with the owed total.
#[derive(Debug, Default)]
pub struct DebtNetworkSvgRenderer {
    theme: Theme,
}

impl DebtNetworkSvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn render(&self, graph: &DebtGraph) -> String {
        let mut svg = String::with_capacity(4096);
        let _ = writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
        );

        if graph.is_empty() {
            let _ = writeln!(
                &mut svg,
                r##"<text x="{}" y="{}" text-anchor="middle" fill="#999999" font-size="16">No transactions to display</text>"##,
                WIDTH / 2.0,
                HEIGHT / 2.0
            );
            svg.push_str("</svg>");
            return svg;
        }

        let palette = self.theme.palette();
        let _ = writeln!(
            &mut svg,
            r#"<defs><marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto"><polygon points="0 0, 10 3.5, 0 7" fill="{}" /></marker></defs>"#,
            palette.arrow
        );

        let positions = node_positions(graph.participants.len());
        let position_of = |name: &str| {
            graph
                .participants
                .iter()
                .position(|p| p.as_str() == name)
                .map(|i| positions[i])
        };

        for edge in &graph.edges {
            let (Some(from), Some(to)) = (
                position_of(edge.from.as_str()),
                position_of(edge.to.as_str()),
            ) else {
                continue;
            };
            write_arrow(&mut svg, &palette, from, to, edge.amount);
        }

        // Nodes go last so they sit on top of the arrows.
        for (participant, &(x, y)) in graph.participants.iter().zip(&positions) {
            let _ = writeln!(
                &mut svg,
                r#"<g><circle cx="{x:.1}" cy="{y:.1}" r="{NODE_RADIUS}" fill="{}" stroke="{}" stroke-width="3" /><text x="{x:.1}" y="{y:.1}" fill="white" font-size="14" font-weight="bold" text-anchor="middle" dominant-baseline="central">{}</text><title>{}</title></g>"#,
                palette.node,
                palette.node_stroke,
                escape_xml(&display_name(participant.as_str())),
                escape_xml(participant.as_str()),
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Evenly spaced points on a circle, the first one at the top.
pub fn node_positions(count: usize) -> Vec<(f64, f64)> {
    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let radius = WIDTH.min(HEIGHT) / 3.0;
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * 2.0 * PI - PI / 2.0;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

fn write_arrow(svg: &mut String, palette: &Palette, from: (f64, f64), to: (f64, f64), amount: f64) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return;
    }

    // Bend the curve sideways so opposite debts don't overlap.
    let (mid_x, mid_y) = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    let curve = (distance / 4.0).min(MAX_CURVE);
    let control_x = mid_x - dy / distance * curve;
    let control_y = mid_y + dx / distance * curve;

    let start_x = from.0 + dx / distance * NODE_RADIUS;
    let start_y = from.1 + dy / distance * NODE_RADIUS;
    let end_x = to.0 - dx / distance * NODE_RADIUS;
    let end_y = to.1 - dy / distance * NODE_RADIUS;

    let _ = writeln!(
        svg,
        r#"<path d="M {start_x:.1} {start_y:.1} Q {control_x:.1} {control_y:.1} {end_x:.1} {end_y:.1}" stroke="{}" stroke-width="2" fill="none" marker-end="url(#arrowhead)" />"#,
        palette.arrow
    );

    let label = fixed(amount, 2);
    let label_width = label.len() as f64 * LABEL_CHAR_WIDTH + 10.0;
    let _ = writeln!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="{label_width:.1}" height="16" fill="{}" stroke="{}" stroke-width="1" rx="3" />"#,
        control_x - label_width / 2.0,
        control_y - 8.0,
        palette.background,
        palette.border
    );
    let _ = writeln!(
        svg,
        r#"<text x="{control_x:.1}" y="{control_y:.1}" fill="{}" font-size="12" text-anchor="middle" font-weight="bold">${label}</text>"#,
        palette.text
    );
}

fn display_name(name: &str) -> Cow<'_, str> {
    if name.chars().count() > MAX_NAME_CHARS {
        Cow::Owned(format!(
            "{}...",
            name.chars().take(TRUNCATED_NAME_CHARS).collect::<String>()
        ))
    } else {
        Cow::Borrowed(name)
    }
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

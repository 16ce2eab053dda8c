use super::config::{AmbientMesh, FieldConfig, PeerLinks};
use super::constants::{MESH_LINE_WIDTH, PEER_DOT_RADIUS};
use super::field::Point;
use super::pointer::PointerState;
use super::surface::{DrawSurface, LineCap};
use fnv::FnvHashSet;
use glam::DVec2;
use smallvec::SmallVec;

/// A point selected for connection, with its distance to the source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub index: usize,
    pub distance: f64,
}

/// A connection between a pointer-selected point and one of its neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeerLink {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
}

pub type Links = SmallVec<[Link; 8]>;

/// `max(floor, 1 - distance / reach)`, kept inside \[0, 1\].
#[inline]
pub fn falloff_opacity(distance: f64, reach: f64, floor: f64) -> f64 {
    (1.0 - distance / reach).max(floor).clamp(0.0, 1.0)
}

/// Up to `max_links` points closest to `target`, nearest first.
///
/// The sort is stable, so equal distances keep index order. Points whose
/// distance is not finite are never selected.
pub fn nearest_links<'a>(
    candidates: impl Iterator<Item = (usize, &'a Point)>,
    target: DVec2,
    max_links: usize,
) -> Links {
    let mut links: Links = candidates
        .map(|(index, p)| Link {
            index,
            distance: p.position.distance(target),
        })
        .filter(|l| l.distance.is_finite())
        .collect();
    links.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    links.truncate(max_links);
    links
}

pub fn pointer_links(points: &[Point], pointer: DVec2, max_links: usize) -> Links {
    nearest_links(points.iter().enumerate(), pointer, max_links)
}

/// Nearest neighbours of each selected point, skipping every selected point.
pub fn peer_links(points: &[Point], selected: &[Link], peers: &PeerLinks) -> Vec<PeerLink> {
    let excluded: FnvHashSet<usize> = selected.iter().map(|l| l.index).collect();
    let mut out = Vec::with_capacity(selected.len() * peers.per_point);
    for link in selected {
        let Some(origin) = points.get(link.index) else {
            continue;
        };
        let near = nearest_links(
            points
                .iter()
                .enumerate()
                .filter(|(i, _)| !excluded.contains(i)),
            origin.position,
            peers.per_point,
        );
        out.extend(
            near.into_iter()
                .filter(|n| n.distance < peers.radius)
                .map(|n| PeerLink {
                    from: link.index,
                    to: n.index,
                    distance: n.distance,
                }),
        );
    }
    out
}

/// Draws pointer edges, optional peer edges and the ambient mesh, with the
/// pointer marker on top.
///
/// Holds no per-frame state; the same inputs always produce the same commands.
#[derive(Clone, Debug)]
pub struct ConnectionRenderer {
    config: FieldConfig,
}

impl ConnectionRenderer {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
    }

    pub fn draw<S: DrawSurface>(
        &self,
        points: &[Point],
        pointer: &PointerState,
        tick: u64,
        surface: &mut S,
    ) {
        surface.set_line_cap(LineCap::Round);

        let cursor = pointer.is_finite().then(|| pointer.position());
        if let Some(cursor) = cursor {
            let links = pointer_links(points, cursor, self.config.pointer_links);
            self.draw_pointer_edges(points, &links, cursor, surface);
            if let Some(peers) = &self.config.peers {
                self.draw_peer_edges(points, &links, peers, surface);
            }
        }

        if let Some(mesh) = &self.config.mesh {
            self.draw_mesh(points, mesh, tick, surface);
        }

        let Some(cursor) = cursor else {
            return;
        };
        let color = self.config.palette.link;
        surface.dot(
            cursor,
            self.config.marker_radius,
            color.with_alpha(self.config.marker_alpha),
        );
    }

    fn draw_pointer_edges<S: DrawSurface>(
        &self,
        points: &[Point],
        links: &[Link],
        cursor: DVec2,
        surface: &mut S,
    ) {
        let cfg = &self.config;
        let color = cfg.palette.link;
        for link in links {
            let target = points[link.index].position;
            let opacity = falloff_opacity(
                link.distance,
                cfg.max_pointer_distance,
                cfg.pointer_opacity_floor,
            );
            surface.line(
                cursor,
                target,
                cfg.line_width,
                color.with_alpha(opacity * cfg.line_alpha),
            );
            surface.dot(
                target,
                cfg.dot_radius,
                color.with_alpha(opacity * cfg.dot_alpha),
            );
        }
    }

    fn draw_peer_edges<S: DrawSurface>(
        &self,
        points: &[Point],
        links: &[Link],
        peers: &PeerLinks,
        surface: &mut S,
    ) {
        let color = self.config.palette.link;
        let width = self.config.line_width * 0.75;
        for peer in peer_links(points, links, peers) {
            let opacity = falloff_opacity(peer.distance, peers.radius, peers.opacity_floor)
                * peers.opacity_scale;
            let from = points[peer.from].position;
            let to = points[peer.to].position;
            surface.line(from, to, width, color.with_alpha(opacity));
            surface.dot(to, PEER_DOT_RADIUS, color.with_alpha(opacity));
        }
    }

    fn draw_mesh<S: DrawSurface>(
        &self,
        points: &[Point],
        mesh: &AmbientMesh,
        tick: u64,
        surface: &mut S,
    ) {
        let color = self.config.palette.mesh;
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                let threshold = mesh.threshold(tick, i, j);
                let distance = a.position.distance(b.position);
                let connected = threshold > 0.0 && distance < threshold;
                if !connected {
                    continue;
                }
                let opacity =
                    falloff_opacity(distance, threshold, mesh.opacity_floor) * mesh.opacity_scale;
                surface.line(
                    a.position,
                    b.position,
                    MESH_LINE_WIDTH,
                    color.with_alpha(opacity),
                );
            }
        }
    }
}

use crate::Message;
use iced::{
    mouse,
    widget::{
        canvas::{self, Frame, Geometry, Path, Stroke},
        image,
    },
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme,
};
use pulsecore::dataset::AttractionId;
use pulsecore::math::mercator::{self, TileCoords, TILE_SIZE};
use pulsecore::render::markers::{marker_head, MARKER_SIZE};
use pulsecore::render::{hit_test, MapHit, MarkerSpec, RouteOverlay, UserLocationMarker};
use pulsecore::viewport::ViewportState;
use pulsecore::{MapController, Rgb, ScreenPoint, ScreenSize};
use std::collections::HashMap;

/// Press/release closer than this counts as a click rather than a drag.
const CLICK_SLOP: f32 = 4.0;

pub fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

fn faded(rgb: Rgb, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..color(rgb)
    }
}

/// Snapshot of everything the map canvas draws for one frame.
pub struct MapCanvas {
    viewport: ViewportState,
    markers: Vec<MarkerSpec>,
    overlays: Vec<RouteOverlay>,
    user_location: Option<UserLocationMarker>,
    selected: Option<AttractionId>,
    tiles: HashMap<TileCoords, image::Handle>,
}

impl MapCanvas {
    /// `tiles` holds the downloaded tiles; missing ones show the grid.
    pub fn new(controller: &MapController, tiles: HashMap<TileCoords, image::Handle>) -> Self {
        let state = controller.state();
        Self {
            viewport: state.viewport,
            markers: controller.visible_markers(),
            overlays: controller.route_overlays(),
            user_location: controller.user_location_marker(),
            selected: state.selection.selected_attraction.clone(),
            tiles,
        }
    }

    fn hit(&self, bounds: Rectangle, point: Point) -> Option<MapHit> {
        hit_test(
            &self.viewport,
            ScreenSize::new(bounds.width, bounds.height),
            ScreenPoint::new(point.x, point.y),
            &self.markers,
            self.user_location.as_ref(),
            &self.overlays,
        )
    }

    fn to_point(&self, position: pulsecore::LatLng, size: ScreenSize) -> Point {
        let projected = self.viewport.project(position, size);
        Point::new(projected.x, projected.y)
    }

    fn draw_tile_grid(&self, frame: &mut Frame, size: ScreenSize) {
        let zoom = f64::from(self.viewport.zoom);
        let (cx, cy) = mercator::project(self.viewport.center, zoom);
        let left = cx - f64::from(size.width) / 2.0;
        let top = cy - f64::from(size.height) / 2.0;

        let grid = Path::new(|builder| {
            let mut x = (left / TILE_SIZE).ceil() * TILE_SIZE;
            while x < left + f64::from(size.width) {
                let sx = (x - left) as f32;
                builder.move_to(Point::new(sx, 0.0));
                builder.line_to(Point::new(sx, size.height));
                x += TILE_SIZE;
            }
            let mut y = (top / TILE_SIZE).ceil() * TILE_SIZE;
            while y < top + f64::from(size.height) {
                let sy = (y - top) as f32;
                builder.move_to(Point::new(0.0, sy));
                builder.line_to(Point::new(size.width, sy));
                y += TILE_SIZE;
            }
        });
        frame.stroke(
            &grid,
            Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgb(0.84, 0.84, 0.8)),
        );
    }

    fn draw_tiles(&self, frame: &mut Frame, size: ScreenSize) {
        let edge = TILE_SIZE as f32;
        for placement in self.viewport.visible_tiles(size) {
            if let Some(handle) = self.tiles.get(&placement.coords) {
                let bounds = Rectangle::new(
                    Point::new(placement.origin.x, placement.origin.y),
                    Size::new(edge, edge),
                );
                frame.draw_image(bounds, canvas::Image::new(handle.clone()));
            }
        }
    }

    fn draw_routes(&self, frame: &mut Frame, size: ScreenSize) {
        for overlay in &self.overlays {
            let path = Path::new(|builder| {
                for (i, waypoint) in overlay.waypoints.iter().enumerate() {
                    let point = self.to_point(*waypoint, size);
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(overlay.weight)
                    .with_color(faded(overlay.color, overlay.opacity)),
            );
        }
    }

    fn draw_user_location(&self, frame: &mut Frame, size: ScreenSize) {
        if let Some(user) = &self.user_location {
            let circle = Path::circle(self.to_point(user.position, size), user.radius);
            frame.fill(&circle, faded(user.color, user.fill_opacity));
            frame.stroke(
                &circle,
                Stroke::default().with_width(3.0).with_color(color(user.color)),
            );
        }
    }

    fn draw_markers(&self, frame: &mut Frame, size: ScreenSize) {
        let head_radius = MARKER_SIZE / 2.0 - 2.0;
        for marker in &self.markers {
            let anchor = self.to_point(marker.position, size);
            let head = marker_head(ScreenPoint::new(anchor.x, anchor.y));
            let head = Point::new(head.x, head.y);

            let tip = Path::new(|builder| {
                builder.move_to(anchor);
                builder.line_to(Point::new(head.x - head_radius * 0.7, head.y + head_radius * 0.7));
                builder.line_to(Point::new(head.x + head_radius * 0.7, head.y + head_radius * 0.7));
                builder.close();
            });
            frame.fill(&tip, color(marker.color));

            let circle = Path::circle(head, head_radius);
            frame.fill(&circle, color(marker.color));
            frame.stroke(&circle, Stroke::default().with_width(2.0).with_color(Color::WHITE));

            if self.selected.as_ref() == Some(&marker.id) {
                let ring = Path::circle(head, head_radius + 4.0);
                frame.stroke(
                    &ring,
                    Stroke::default()
                        .with_width(2.5)
                        .with_color(Color::from_rgb(0.1, 0.1, 0.1)),
                );
            }
        }
    }

    /// Popup box centred above `anchor`, raised by `lift` pixels.
    fn draw_popup(&self, frame: &mut Frame, anchor: Point, lift: f32, content: &str) {
        let widest = content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = content.lines().count().max(1);
        let box_size = Size::new(widest as f32 * 7.0 + 16.0, line_count as f32 * 17.0 + 10.0);
        let origin = Point::new(
            anchor.x - box_size.width / 2.0,
            anchor.y - lift - box_size.height - 6.0,
        );

        frame.fill_rectangle(origin, box_size, Color::WHITE);
        frame.fill_text(canvas::Text {
            content: content.to_string(),
            position: Point::new(origin.x + 8.0, origin.y + 5.0),
            color: Color::from_rgb(0.1, 0.1, 0.1),
            size: Pixels(13.0),
            ..canvas::Text::default()
        });
    }
}

fn local_position(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
    cursor
        .position()
        .map(|position| Point::new(position.x - bounds.x, position.y - bounds.y))
}

/// Pointer state carried between canvas events.
#[derive(Debug, Default)]
pub struct Interaction {
    press: Option<Point>,
    last: Option<Point>,
    dragging: bool,
    size: Option<Size>,
}

impl canvas::Program<Message> for MapCanvas {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if state.size != Some(bounds.size()) {
            state.size = Some(bounds.size());
            return Some(canvas::Action::publish(Message::MapResized(ScreenSize::new(
                bounds.width,
                bounds.height,
            ))));
        }

        match event {
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / 100.0,
                };
                if notches == 0.0 {
                    return None;
                }
                let zoom = self.viewport.stepped_zoom(if notches > 0.0 { 1 } else { -1 });
                if zoom == self.viewport.zoom {
                    return Some(canvas::Action::capture());
                }
                let next = self.viewport.zoomed_at(
                    zoom,
                    ScreenPoint::new(position.x, position.y),
                    ScreenSize::new(bounds.width, bounds.height),
                );
                Some(
                    canvas::Action::publish(Message::Zoomed {
                        zoom: next.zoom,
                        center: next.center,
                    })
                    .and_capture(),
                )
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.press = Some(position);
                state.last = Some(position);
                state.dragging = false;
                Some(canvas::Action::capture())
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let (Some(press), Some(last)) = (state.press, state.last) else {
                    return Some(canvas::Action::request_redraw());
                };
                let position = local_position(cursor, bounds)?;
                if !state.dragging && press.distance(position) < CLICK_SLOP {
                    return None;
                }
                state.dragging = true;
                state.last = Some(position);
                Some(
                    canvas::Action::publish(Message::Dragged {
                        dx: position.x - last.x,
                        dy: position.y - last.y,
                    })
                    .and_capture(),
                )
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.press.take()?;
                state.last = None;
                if std::mem::take(&mut state.dragging) {
                    return Some(canvas::Action::capture());
                }
                let position = cursor.position_in(bounds)?;
                let hit = self.hit(bounds, position)?;
                Some(canvas::Action::publish(Message::MapClicked(hit)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = ScreenSize::new(bounds.width, bounds.height);
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgb(0.95, 0.94, 0.91));

        self.draw_tile_grid(&mut frame, size);
        self.draw_tiles(&mut frame, size);
        self.draw_routes(&mut frame, size);
        self.draw_user_location(&mut frame, size);
        self.draw_markers(&mut frame, size);

        if !state.dragging {
            let hovered = cursor
                .position_in(bounds)
                .and_then(|point| self.hit(bounds, point));
            match hovered {
                Some(MapHit::Marker(id)) => {
                    if let Some(marker) = self.markers.iter().find(|marker| marker.id == id) {
                        let anchor = self.to_point(marker.position, size);
                        self.draw_popup(&mut frame, anchor, MARKER_SIZE, &marker.popup);
                    }
                }
                Some(MapHit::UserLocation) => {
                    if let Some(user) = &self.user_location {
                        let anchor = self.to_point(user.position, size);
                        self.draw_popup(&mut frame, anchor, user.radius, UserLocationMarker::POPUP);
                    }
                }
                Some(MapHit::Route(_)) | None => {}
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(point) if self.hit(bounds, point).is_some() => mouse::Interaction::Pointer,
            Some(_) => mouse::Interaction::Grab,
            None => mouse::Interaction::default(),
        }
    }
}

use iced::{
    widget::{image, Canvas, Container, Row},
    Element, Length, Task, Theme,
};
use imagery::{fetch_image, http_client, tile_url, ImageCache, PHOTO_CAPACITY, TILE_CAPACITY};
use locate::{locate_device, LOCATOR_URL};
use log::{debug, warn};
use map_canvas::MapCanvas;
use pulsecore::dataset::{Dataset, RouteId};
use pulsecore::location::LocationOutcome;
use pulsecore::math::mercator::TileCoords;
use pulsecore::panel::route_list_clicked;
use pulsecore::render::MapHit;
use pulsecore::{Intent, LatLng, MapController, ScreenSize};
use std::collections::HashMap;

mod imagery;
mod locate;
mod map_canvas;
mod panels;

/// Map area assumed until the canvas reports its real size.
const INITIAL_MAP_SIZE: ScreenSize = ScreenSize::new(1024.0, 768.0);

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Explorer::boot, Explorer::update, Explorer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Explorer) -> String {
    "PulseQuest".into()
}

fn application_theme(_: &Explorer) -> Theme {
    Theme::Light
}

struct Explorer {
    controller: MapController,
    map_size: ScreenSize,
    tiles: ImageCache<TileCoords>,
    photos: ImageCache<String>,
    http: reqwest::Client,
}

#[derive(Debug, Clone)]
pub enum Message {
    Located(LocationOutcome),
    Zoomed { zoom: i32, center: LatLng },
    Dragged { dx: f32, dy: f32 },
    MapResized(ScreenSize),
    MapClicked(MapHit),
    RouteListClicked(RouteId),
    ToggleRoutes,
    ToggleOpenFilter,
    CloseDetails,
    TileLoaded(TileCoords, Option<image::Handle>),
    PhotoLoaded(String, Option<image::Handle>),
}

impl Explorer {
    fn new(dataset: Dataset) -> Self {
        Explorer {
            controller: MapController::new(dataset),
            map_size: INITIAL_MAP_SIZE,
            tiles: ImageCache::new(TILE_CAPACITY),
            photos: ImageCache::new(PHOTO_CAPACITY),
            http: http_client(),
        }
    }

    fn boot() -> (Self, Task<Message>) {
        let dataset = Dataset::melbourne();
        if let Err(err) = dataset.validate() {
            warn!("bundled dataset failed validation: {}", err);
        }
        let mut explorer = Explorer::new(dataset);
        let tiles = explorer.request_tiles();
        (
            explorer,
            Task::batch([
                Task::perform(locate_device(LOCATOR_URL), Message::Located),
                tiles,
            ]),
        )
    }

    fn intents_for(&self, message: Message) -> Vec<Intent> {
        match message {
            Message::Located(outcome) => vec![Intent::LocationSettled(outcome)],
            Message::Zoomed { zoom, center } => {
                vec![Intent::ZoomChanged(zoom), Intent::Panned(center)]
            }
            Message::Dragged { dx, dy } => {
                vec![Intent::Panned(self.controller.state().viewport.pan_by(dx, dy))]
            }
            Message::MapClicked(MapHit::Marker(id)) => vec![Intent::SelectAttraction(id)],
            Message::MapClicked(MapHit::Route(id)) => vec![Intent::route_polyline_clicked(&id)],
            Message::MapClicked(MapHit::UserLocation) => Vec::new(),
            Message::RouteListClicked(id) => vec![route_list_clicked(
                self.controller.state().selection.selected_route.as_ref(),
                &id,
            )],
            Message::ToggleRoutes => vec![Intent::ToggleShowRoutes],
            Message::ToggleOpenFilter => vec![Intent::ToggleOpenFilter],
            Message::CloseDetails => vec![Intent::CloseDetails],
            Message::MapResized(_) | Message::TileLoaded(..) | Message::PhotoLoaded(..) => {
                Vec::new()
            }
        }
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::TileLoaded(coords, handle) => {
                state.tiles.finish(coords, handle);
                return Task::none();
            }
            Message::PhotoLoaded(source, handle) => {
                state.photos.finish(source, handle);
                return Task::none();
            }
            Message::MapResized(size) => state.map_size = size,
            message => {
                for intent in state.intents_for(message) {
                    if !state.controller.apply(intent) {
                        debug!("intent left the map unchanged");
                    }
                }
            }
        }
        Task::batch([state.request_tiles(), state.request_photos()])
    }

    /// Starts downloads for visible tiles not yet requested.
    fn request_tiles(&mut self) -> Task<Message> {
        let placements = self.controller.state().viewport.visible_tiles(self.map_size);
        let mut tasks = Vec::new();
        for placement in placements {
            let coords = placement.coords;
            if self.tiles.begin(coords) {
                tasks.push(Task::perform(
                    fetch_image(self.http.clone(), tile_url(coords)),
                    move |handle| Message::TileLoaded(coords, handle),
                ));
            }
        }
        Task::batch(tasks)
    }

    /// Starts downloads for the remote photos of the open details panel.
    fn request_photos(&mut self) -> Task<Message> {
        let Some(details) = self.controller.details() else {
            return Task::none();
        };
        let mut tasks = Vec::new();
        for photo in details.photos.into_iter().filter(|photo| photo.is_remote()) {
            if self.photos.begin(photo.source.clone()) {
                let source = photo.source;
                tasks.push(Task::perform(
                    fetch_image(self.http.clone(), source.clone()),
                    move |handle| Message::PhotoLoaded(source, handle),
                ));
            }
        }
        Task::batch(tasks)
    }

    fn ready_tiles(&self) -> HashMap<TileCoords, image::Handle> {
        self.controller
            .state()
            .viewport
            .visible_tiles(self.map_size)
            .into_iter()
            .filter_map(|placement| {
                self.tiles
                    .ready(&placement.coords)
                    .map(|handle| (placement.coords, handle.clone()))
            })
            .collect()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let controller = &state.controller;

        let map = Canvas::new(MapCanvas::new(controller, state.ready_tiles()))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layout = Row::new()
            .push(panels::controls_panel(controller.controls(), controller.legend()))
            .push(map);
        if let Some(details) = controller.details() {
            layout = layout.push(panels::details_panel(details, &state.photos));
        }

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsecore::dataset::AttractionId;
    use pulsecore::location::{LocationError, LocationResolver};

    fn explorer() -> Explorer {
        Explorer::new(Dataset::melbourne())
    }

    #[test]
    fn route_list_click_toggles_selection() {
        let mut app = explorer();
        let _ = Explorer::update(&mut app, Message::ToggleRoutes);
        let gardens = RouteId::new("gardens");

        let _ = Explorer::update(&mut app, Message::RouteListClicked(gardens.clone()));
        assert_eq!(
            app.controller.state().selection.selected_route,
            Some(gardens.clone())
        );
        let _ = Explorer::update(&mut app, Message::RouteListClicked(gardens));
        assert_eq!(app.controller.state().selection.selected_route, None);
    }

    #[test]
    fn polyline_click_never_deselects() {
        let mut app = explorer();
        let laneways = RouteId::new("laneways");
        for _ in 0..2 {
            let _ = Explorer::update(&mut app, Message::MapClicked(MapHit::Route(laneways.clone())));
        }
        assert_eq!(
            app.controller.state().selection.selected_route,
            Some(laneways)
        );
    }

    #[test]
    fn marker_click_opens_and_close_clears_details() {
        let mut app = explorer();
        let id = AttractionId::new("chinatown");
        let _ = Explorer::update(&mut app, Message::MapClicked(MapHit::Marker(id)));
        assert_eq!(app.controller.details().unwrap().type_label, "restaurant");

        let _ = Explorer::update(&mut app, Message::CloseDetails);
        assert!(app.controller.details().is_none());
    }

    #[test]
    fn drag_pans_and_location_failure_recentres() {
        let mut app = explorer();
        let before = app.controller.state().viewport.center;
        let _ = Explorer::update(&mut app, Message::Dragged { dx: -120.0, dy: 40.0 });
        let after = app.controller.state().viewport.center;
        assert!(after.lng > before.lng);
        assert!(after.lat > before.lat);

        let outcome = LocationResolver::settle(Err(LocationError::Denied));
        let _ = Explorer::update(&mut app, Message::Located(outcome));
        assert_eq!(app.controller.state().viewport.center, before);
        assert_eq!(app.controller.state().viewport.zoom, 14);
    }

    #[test]
    fn user_location_click_selects_nothing() {
        let mut app = explorer();
        let before = app.controller.state().clone();
        let _ = Explorer::update(&mut app, Message::MapClicked(MapHit::UserLocation));
        assert_eq!(app.controller.state(), &before);
    }

    #[test]
    fn wheel_zoom_moves_zoom_and_centre_together() {
        let mut app = explorer();
        let center = LatLng::new(-37.80, 144.97);
        let _ = Explorer::update(&mut app, Message::Zoomed { zoom: 16, center });
        let viewport = app.controller.state().viewport;
        assert_eq!(viewport.zoom, 16);
        assert_eq!(viewport.center, center);
    }

    #[test]
    fn tiles_and_photos_are_requested_once() {
        let mut app = explorer();
        let _ = app.request_tiles();
        let visible = app.controller.state().viewport.visible_tiles(app.map_size);
        assert!(visible.iter().all(|tile| !app.tiles.begin(tile.coords)));

        let _ = Explorer::update(&mut app, Message::MapResized(ScreenSize::new(1600.0, 1000.0)));
        assert_eq!(app.map_size, ScreenSize::new(1600.0, 1000.0));

        let id = AttractionId::new("ngv-international");
        let _ = Explorer::update(&mut app, Message::MapClicked(MapHit::Marker(id)));
        let sources: Vec<_> = app
            .controller
            .details()
            .unwrap()
            .photos
            .into_iter()
            .map(|photo| photo.source)
            .collect();
        assert_eq!(sources.len(), 3);
        assert!(sources.into_iter().all(|source| !app.photos.begin(source)));
    }

    #[test]
    fn loaded_tile_reaches_the_canvas() {
        let mut app = explorer();
        let _ = app.request_tiles();
        let coords = app.controller.state().viewport.visible_tiles(app.map_size)[0].coords;
        let handle = image::Handle::from_bytes(vec![0u8; 4]);
        let _ = Explorer::update(&mut app, Message::TileLoaded(coords, Some(handle)));
        assert!(app.ready_tiles().contains_key(&coords));
    }
}

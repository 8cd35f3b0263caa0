use crate::imagery::ImageCache;
use crate::map_canvas::color;
use crate::Message;
use iced::{
    widget::{button, column, image, row, scrollable, text, Column, Container, Row},
    Alignment, Color, Element, Length, Theme,
};
use pulsecore::panel::controls::{OPEN_ONLY_LABEL, ROUTES_HEADING, SHOW_ROUTES_LABEL, TITLE};
use pulsecore::panel::legend::LEGEND_HEADING;
use pulsecore::panel::{
    star_row, ControlsView, DetailsView, LegendEntry, PhotoView, ReviewsSection, RouteListItem,
};
use pulsecore::render::palette::{STAR_EMPTY, STAR_FILLED};

const OPEN_COLOR: Color = Color {
    r: 0.18,
    g: 0.6,
    b: 0.25,
    a: 1.0,
};
const CLOSED_COLOR: Color = Color {
    r: 0.8,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

fn stars<'a>(filled: u8, size: f32) -> Row<'a, Message> {
    star_row(filled)
        .into_iter()
        .fold(Row::new().spacing(1), |row, lit| {
            let tint = if lit { STAR_FILLED } else { STAR_EMPTY };
            row.push(text("\u{2605}").size(size).color(color(tint)))
        })
}

fn toggle<'a>(label: &str, checked: bool, message: Message) -> Element<'a, Message> {
    let mark = if checked { "\u{2611}" } else { "\u{2610}" };
    button(text(format!("{} {}", mark, label)).size(14))
        .on_press(message)
        .style(button::text)
        .padding(4)
        .into()
}

fn route_item<'a>(item: RouteListItem) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if item.selected {
        button::primary
    } else {
        button::secondary
    };
    let label = column![
        row![
            text("\u{25A0}").size(16).color(color(item.color)),
            text(item.name).size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text(item.summary).size(12),
    ]
    .spacing(2);

    button(label)
        .on_press(Message::RouteListClicked(item.id))
        .style(style)
        .width(Length::Fill)
        .padding(8)
        .into()
}

fn legend<'a>(entries: Vec<LegendEntry>) -> Column<'a, Message> {
    entries.into_iter().fold(
        Column::new().spacing(4).push(text(LEGEND_HEADING).size(16)),
        |col, entry| {
            col.push(
                row![
                    text("\u{25CF}").size(14).color(color(entry.color)),
                    text(entry.label).size(12),
                ]
                .spacing(6)
                .align_y(Alignment::Center),
            )
        },
    )
}

fn photo<'a>(photo: PhotoView, downloaded: &ImageCache<String>) -> Element<'a, Message> {
    let (width, height) = (Length::Fixed(96.0), Length::Fixed(72.0));
    let picture: Element<'a, Message> = if !photo.is_remote() {
        image(image::Handle::from_path(&photo.source))
            .width(width)
            .height(height)
            .into()
    } else if let Some(handle) = downloaded.ready(&photo.source) {
        image(handle.clone()).width(width).height(height).into()
    } else {
        Container::new(text("\u{2026}").size(14))
            .center_x(width)
            .center_y(height)
            .into()
    };

    column![picture, text(photo.alt).size(10)].spacing(2).into()
}

/// Left-hand column: toggles, route picker, legend.
pub fn controls_panel<'a>(view: ControlsView, legend_entries: Vec<LegendEntry>) -> Element<'a, Message> {
    let mut panel = column![
        text(TITLE).size(26),
        toggle(SHOW_ROUTES_LABEL, view.show_routes, Message::ToggleRoutes),
        toggle(OPEN_ONLY_LABEL, view.filter_open_only, Message::ToggleOpenFilter),
    ]
    .spacing(10);

    if view.show_routes {
        let routes = view.routes.into_iter().fold(
            Column::new().spacing(6).push(text(ROUTES_HEADING).size(16)),
            |col, item| col.push(route_item(item)),
        );
        panel = panel.push(routes);
    }

    panel = panel.push(legend(legend_entries));

    Container::new(scrollable(panel.padding(16)))
        .width(Length::Fixed(280.0))
        .height(Length::Fill)
        .into()
}

/// Right-hand details panel for the selected attraction.
pub fn details_panel<'a>(view: DetailsView, photos: &ImageCache<String>) -> Element<'a, Message> {
    let status_color = if view.is_open { OPEN_COLOR } else { CLOSED_COLOR };
    let status = view.status_text();

    let header = row![
        text(view.name).size(22).width(Length::Fill),
        button(text("\u{00D7}").size(20))
            .on_press(Message::CloseDetails)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let hours = view
        .weekday_text
        .into_iter()
        .fold(Column::new().spacing(2), |col, day| col.push(text(day).size(12)));

    let reviews = match view.reviews {
        ReviewsSection::Reviews(reviews) => {
            reviews
                .into_iter()
                .fold(Column::new().spacing(8), |col, review| {
                    col.push(column![
                        row![text(review.author).size(13), stars(review.stars, 14.0)]
                            .spacing(8)
                            .align_y(Alignment::Center),
                        text(review.text).size(12),
                    ])
                })
        }
        ReviewsSection::Placeholder(placeholder) => Column::new().push(text(placeholder).size(12)),
    };

    let mut panel = column![
        header,
        text(view.type_label).size(12),
        text(view.description).size(14),
        row![stars(view.stars, 20.0), text(view.rating_text).size(16)]
            .spacing(8)
            .align_y(Alignment::Center),
        text("Opening Hours").size(16),
        text(status).size(14).color(status_color),
        hours,
        text("Reviews").size(16),
        reviews,
    ]
    .spacing(10)
    .padding(16);

    if !view.photos.is_empty() {
        let strip = view
            .photos
            .into_iter()
            .fold(Row::new().spacing(6), |strip, item| strip.push(photo(item, photos)));
        panel = panel.push(strip);
    }

    Container::new(scrollable(panel))
        .width(Length::Fixed(340.0))
        .height(Length::Fill)
        .into()
}

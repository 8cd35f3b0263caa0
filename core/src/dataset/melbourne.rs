use crate::dataset::attraction::{Attraction, AttractionId, AttractionType, OpeningHours, Review};
use crate::dataset::route::{Route, RouteId};
use crate::prelude::{LatLng, Rgb};

/// Melbourne CBD, the centre used when no device position is available.
pub const MELBOURNE_CENTER: LatLng = LatLng::new(-37.8136, 144.9631);

const ALWAYS_OPEN: [&str; 7] = [
    "Monday: Open 24 hours",
    "Tuesday: Open 24 hours",
    "Wednesday: Open 24 hours",
    "Thursday: Open 24 hours",
    "Friday: Open 24 hours",
    "Saturday: Open 24 hours",
    "Sunday: Open 24 hours",
];

const GALLERY_HOURS: [&str; 7] = [
    "Monday: 10:00 AM – 5:00 PM",
    "Tuesday: 10:00 AM – 5:00 PM",
    "Wednesday: 10:00 AM – 5:00 PM",
    "Thursday: 10:00 AM – 5:00 PM",
    "Friday: 10:00 AM – 5:00 PM",
    "Saturday: 10:00 AM – 5:00 PM",
    "Sunday: 10:00 AM – 5:00 PM",
];

const MARKET_HOURS: [&str; 7] = [
    "Monday: Closed",
    "Tuesday: 6:00 AM – 3:00 PM",
    "Wednesday: Closed",
    "Thursday: 6:00 AM – 3:00 PM",
    "Friday: 6:00 AM – 3:00 PM",
    "Saturday: 6:00 AM – 4:00 PM",
    "Sunday: 9:00 AM – 4:00 PM",
];

const DINING_HOURS: [&str; 7] = [
    "Monday: Closed",
    "Tuesday: 5:30 PM – 10:30 PM",
    "Wednesday: 5:30 PM – 10:30 PM",
    "Thursday: 5:30 PM – 10:30 PM",
    "Friday: 12:00 PM – 11:00 PM",
    "Saturday: 12:00 PM – 11:00 PM",
    "Sunday: 12:00 PM – 9:00 PM",
];

const CAFE_HOURS: [&str; 7] = [
    "Monday: 7:00 AM – 4:00 PM",
    "Tuesday: 7:00 AM – 4:00 PM",
    "Wednesday: 7:00 AM – 4:00 PM",
    "Thursday: 7:00 AM – 4:00 PM",
    "Friday: 7:00 AM – 4:00 PM",
    "Saturday: 8:00 AM – 3:00 PM",
    "Sunday: 8:00 AM – 3:00 PM",
];

const OBSERVATION_HOURS: [&str; 7] = [
    "Monday: 12:00 PM – 10:00 PM",
    "Tuesday: 12:00 PM – 10:00 PM",
    "Wednesday: 12:00 PM – 10:00 PM",
    "Thursday: 12:00 PM – 10:00 PM",
    "Friday: 12:00 PM – 10:00 PM",
    "Saturday: 12:00 PM – 10:00 PM",
    "Sunday: 12:00 PM – 10:00 PM",
];

#[allow(clippy::too_many_arguments)]
fn attraction(
    id: &str,
    name: &str,
    kind: AttractionType,
    position: (f64, f64),
    description: &str,
    rating: f64,
    opening_hours: OpeningHours,
    reviews: Vec<Review>,
    photos: &[&str],
) -> Attraction {
    Attraction {
        id: AttractionId::new(id),
        name: name.into(),
        kind,
        position: position.into(),
        description: description.into(),
        rating,
        opening_hours,
        reviews,
        photos: photos.iter().map(|photo| photo.to_string()).collect(),
    }
}

/// Bundled attraction table, in display priority order.
pub fn attractions() -> Vec<Attraction> {
    use AttractionType::*;

    vec![
        attraction(
            "federation-square",
            "Federation Square",
            Landmark,
            (-37.8179, 144.9691),
            "Civic plaza opposite Flinders Street Station hosting events, galleries and screens.",
            4.4,
            OpeningHours::new(true, &ALWAYS_OPEN),
            vec![
                Review::new("Mia T.", 5, "Always something on, great meeting point."),
                Review::new("Josh R.", 4, "Architecture divides people but the vibe is good."),
                Review::new("Priya K.", 4, "Big screen for the footy was a highlight."),
                Review::new("Luca B.", 3, "Crowded on weekends."),
            ],
            &[
                "https://picsum.photos/seed/federation-square-1/640/480",
                "https://picsum.photos/seed/federation-square-2/640/480",
            ],
        ),
        attraction(
            "flinders-street-station",
            "Flinders Street Station",
            Landmark,
            (-37.8183, 144.9671),
            "Heritage railway station with the famous row of clocks above the entrance.",
            4.5,
            OpeningHours::new(true, &ALWAYS_OPEN),
            vec![
                Review::new("Hannah W.", 5, "Iconic. Meet me under the clocks."),
                Review::new("Tom E.", 4, "Beautiful facade, busy concourse."),
            ],
            &["https://picsum.photos/seed/flinders-street-station-1/640/480"],
        ),
        attraction(
            "ngv-international",
            "NGV International",
            Gallery,
            (-37.8226, 144.9689),
            "The National Gallery of Victoria's international collection behind the water wall.",
            4.7,
            OpeningHours::new(true, &GALLERY_HOURS),
            vec![
                Review::new("Grace L.", 5, "World-class and the permanent collection is free."),
                Review::new("Ahmed S.", 5, "The stained glass ceiling alone is worth it."),
                Review::new("Ella M.", 4, "Blockbuster shows get packed, book early."),
                Review::new("Noah P.", 5, "Touch the water wall, everyone does."),
                Review::new("Zoe F.", 4, "Great cafe too."),
            ],
            &[
                "https://picsum.photos/seed/ngv-international-1/640/480",
                "https://picsum.photos/seed/ngv-international-2/640/480",
                "https://picsum.photos/seed/ngv-international-3/640/480",
                "https://picsum.photos/seed/ngv-international-4/640/480",
            ],
        ),
        attraction(
            "royal-botanic-gardens",
            "Royal Botanic Gardens",
            Park,
            (-37.8304, 144.9796),
            "Thirty-eight hectares of landscaped gardens, lakes and native plant collections.",
            4.8,
            OpeningHours::new(true, &ALWAYS_OPEN),
            vec![
                Review::new("Oliver G.", 5, "Perfect for a slow Sunday walk."),
                Review::new("Chloe D.", 5, "The fern gully is magical."),
            ],
            &["https://picsum.photos/seed/royal-botanic-gardens-1/640/480"],
        ),
        attraction(
            "queen-victoria-market",
            "Queen Victoria Market",
            Shopping,
            (-37.8076, 144.9568),
            "Open-air market trading fresh produce, deli goods and souvenirs since 1878.",
            4.5,
            OpeningHours::new(false, &MARKET_HOURS),
            vec![
                Review::new("Isla N.", 5, "Hot jam donuts from the van, every time."),
                Review::new("Ben C.", 4, "Come early for the best produce."),
            ],
            &["https://picsum.photos/seed/queen-victoria-market-1/640/480"],
        ),
        attraction(
            "hosier-lane",
            "Hosier Lane",
            StreetArt,
            (-37.8166, 144.9690),
            "Bluestone laneway covered wall to wall in ever-changing street art.",
            4.3,
            OpeningHours::new(true, &ALWAYS_OPEN),
            vec![Review::new("Max H.", 4, "The art changes every week.")],
            &[
                "https://picsum.photos/seed/hosier-lane-1/640/480",
                "https://picsum.photos/seed/hosier-lane-2/640/480",
            ],
        ),
        attraction(
            "state-library-victoria",
            "State Library Victoria",
            Museum,
            (-37.8098, 144.9652),
            "Grand public library famous for the octagonal La Trobe Reading Room.",
            4.7,
            OpeningHours::new(true, &GALLERY_HOURS),
            vec![
                Review::new("Sofia A.", 5, "The domed reading room is breathtaking."),
                Review::new("Jack V.", 5, "Quiet, free and gorgeous."),
            ],
            &["https://picsum.photos/seed/state-library-victoria-1/640/480"],
        ),
        attraction(
            "melbourne-museum",
            "Melbourne Museum",
            Museum,
            (-37.8033, 144.9717),
            "Natural and social history museum with a living forest gallery.",
            4.6,
            OpeningHours::new(true, &GALLERY_HOURS),
            vec![Review::new("Ruby J.", 5, "Phar Lap and the dinosaur walk are must-sees.")],
            &[],
        ),
        attraction(
            "royal-exhibition-building",
            "Royal Exhibition Building",
            Landmark,
            (-37.8047, 144.9717),
            "UNESCO World Heritage-listed exhibition hall set in the Carlton Gardens.",
            4.7,
            OpeningHours::new(false, &GALLERY_HOURS),
            vec![],
            &["https://picsum.photos/seed/royal-exhibition-building-1/640/480"],
        ),
        attraction(
            "melbourne-skydeck",
            "Melbourne Skydeck",
            Viewpoint,
            (-37.8214, 144.9646),
            "Observation deck on the 88th floor of Eureka Tower with a glass cube ledge.",
            4.5,
            OpeningHours::new(true, &OBSERVATION_HOURS),
            vec![
                Review::new("Leo W.", 5, "Go at sunset."),
                Review::new("Amelia Y.", 4, "The Edge is terrifying in the best way."),
                Review::new("Ethan Q.", 4, "Pricey but the view is unbeatable."),
            ],
            &[
                "https://picsum.photos/seed/melbourne-skydeck-1/640/480",
                "https://picsum.photos/seed/melbourne-skydeck-2/640/480",
                "https://picsum.photos/seed/melbourne-skydeck-3/640/480",
            ],
        ),
        attraction(
            "shrine-of-remembrance",
            "Shrine of Remembrance",
            Landmark,
            (-37.8305, 144.9734),
            "War memorial with a balcony view straight up St Kilda Road to the city.",
            4.8,
            OpeningHours::new(true, &GALLERY_HOURS),
            vec![Review::new("William F.", 5, "Moving and beautifully kept.")],
            &["https://picsum.photos/seed/shrine-of-remembrance-1/640/480"],
        ),
        attraction(
            "mcg",
            "Melbourne Cricket Ground",
            Entertainment,
            (-37.8200, 144.9834),
            "The 100,000-seat home of Australian sport, with tours on non-event days.",
            4.7,
            OpeningHours::new(true, &GALLERY_HOURS),
            vec![
                Review::new("Charlie O.", 5, "Grand final day is something else."),
                Review::new("Evie R.", 4, "The stadium tour is worth it."),
            ],
            &[],
        ),
        attraction(
            "fitzroy-gardens",
            "Fitzroy Gardens",
            Park,
            (-37.8128, 144.9801),
            "Victorian-era gardens home to Cooks' Cottage and the conservatory.",
            4.6,
            OpeningHours::new(true, &ALWAYS_OPEN),
            vec![],
            &[],
        ),
        attraction(
            "degraves-street",
            "Degraves Street",
            Cafe,
            (-37.8169, 144.9654),
            "Narrow laneway of espresso bars and pavement tables off Flinders Street.",
            4.4,
            OpeningHours::new(true, &CAFE_HOURS),
            vec![
                Review::new("Aria Z.", 5, "Peak Melbourne coffee culture."),
                Review::new("Henry D.", 4, "Tight squeeze at lunch."),
            ],
            &["https://picsum.photos/seed/degraves-street-1/640/480"],
        ),
        attraction(
            "chinatown",
            "Chinatown",
            Restaurant,
            (-37.8116, 144.9677),
            "One of the oldest continuous Chinatowns in the western world, dense with eateries.",
            4.2,
            OpeningHours::new(true, &DINING_HOURS),
            vec![Review::new("Lily M.", 4, "Dumplings at midnight, yes please.")],
            &[],
        ),
        attraction(
            "acmi",
            "ACMI",
            Museum,
            (-37.8176, 144.9689),
            "Museum of screen culture covering film, television, games and digital art.",
            4.5,
            OpeningHours::new(true, &GALLERY_HOURS),
            vec![Review::new("Oscar K.", 5, "The Story of the Moving Image is brilliant.")],
            &["https://picsum.photos/seed/acmi-1/640/480"],
        ),
        attraction(
            "st-pauls-cathedral",
            "St Paul's Cathedral",
            Landmark,
            (-37.8170, 144.9677),
            "Gothic revival Anglican cathedral on the corner of Swanston and Flinders Streets.",
            4.6,
            OpeningHours::new(false, &GALLERY_HOURS),
            vec![],
            &[],
        ),
        attraction(
            "sea-life-melbourne",
            "SEA LIFE Melbourne Aquarium",
            Entertainment,
            (-37.8207, 144.9583),
            "Riverside aquarium with a shark tunnel and king penguin enclosure.",
            3.7,
            OpeningHours::new(true, &GALLERY_HOURS),
            vec![
                Review::new("Harper T.", 4, "Kids loved the penguins."),
                Review::new("Mason L.", 3, "Smaller than expected for the price."),
            ],
            &["https://picsum.photos/seed/sea-life-melbourne-1/640/480"],
        ),
        attraction(
            "southbank-promenade",
            "Southbank Promenade",
            Viewpoint,
            (-37.8209, 144.9646),
            "Riverside walk lined with restaurants and the Crown fire-ball towers.",
            4.4,
            OpeningHours::new(true, &ALWAYS_OPEN),
            vec![Review::new("Ivy S.", 4, "Lovely at night.")],
            &[],
        ),
        attraction(
            "old-melbourne-gaol",
            "Old Melbourne Gaol",
            Museum,
            (-37.8078, 144.9653),
            "Bluestone former prison where Ned Kelly was hanged, with night tours.",
            3.4,
            OpeningHours::new(false, &GALLERY_HOURS),
            vec![Review::new("Finn C.", 3, "Interesting history, a bit rushed.")],
            &[],
        ),
    ]
}

fn route(
    id: &str,
    name: &str,
    color: u32,
    distance: &str,
    duration: &str,
    waypoints: &[(f64, f64)],
) -> Route {
    Route {
        id: RouteId::new(id),
        name: name.into(),
        color: Rgb::from_u32(color),
        waypoints: waypoints.iter().copied().map(LatLng::from).collect(),
        distance: distance.into(),
        duration: duration.into(),
    }
}

/// Bundled walking routes.
pub fn routes() -> Vec<Route> {
    vec![
        route(
            "cbd-cultural",
            "CBD Cultural Walk",
            0xFF6B6B,
            "3.2 km",
            "45 min",
            &[
                (-37.8179, 144.9668),
                (-37.8183, 144.9685),
                (-37.8160, 144.9635),
                (-37.8226, 144.9754),
                (-37.8259, 144.9732),
            ],
        ),
        route(
            "fitzroy-arts",
            "Fitzroy Arts Trail",
            0x4ECDC4,
            "2.8 km",
            "40 min",
            &[
                (-37.7993, 144.9784),
                (-37.8005, 144.9815),
                (-37.8021, 144.9842),
                (-37.8048, 144.9821),
            ],
        ),
        route(
            "yarra-river",
            "Yarra River Walk",
            0x95E1D3,
            "4.5 km",
            "60 min",
            &[
                (-37.8226, 144.9754),
                (-37.8252, 144.9801),
                (-37.8289, 144.9892),
                (-37.8312, 144.9956),
            ],
        ),
        route(
            "laneways",
            "Hidden Laneways",
            0xF38181,
            "2.1 km",
            "35 min",
            &[
                (-37.8136, 144.9631),
                (-37.8149, 144.9642),
                (-37.8162, 144.9658),
                (-37.8171, 144.9671),
            ],
        ),
        route(
            "gardens",
            "Royal Botanic Gardens Loop",
            0xAA96DA,
            "3.8 km",
            "50 min",
            &[
                (-37.8304, 144.9796),
                (-37.8321, 144.9812),
                (-37.8345, 144.9795),
                (-37.8328, 144.9768),
            ],
        ),
    ]
}

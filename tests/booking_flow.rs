use std::sync::Arc;

use chrono::NaiveTime;
use cinema_booking::models::{
    DayType, Movie, PaymentMethod, PriceRule, Schedule, SeatStatus, Studio, StudioKind,
};
use cinema_booking::{
    BookingFlow, Catalog, Config, FixedOccupancy, InMemoryCatalog, NoOccupancy, RandomOccupancy,
    SeatMap, Step,
};

fn movie(id: i64, title: &str, genre: &str, year: i32, minutes: u32) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        release_year: year,
        duration_min: minutes,
        description: format!("{title} description"),
        poster_url: format!("https://posters.example/{id}.jpg"),
    }
}

fn schedule(id: i64, movie_id: i64, studio_id: i64, date: &str, start: &str, end: &str) -> Schedule {
    Schedule {
        id,
        movie_id,
        studio_id,
        date: date.parse().unwrap(),
        start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
        end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
    }
}

// Reference data mirroring the demo catalog
fn sample_catalog() -> Arc<InMemoryCatalog> {
    Arc::new(InMemoryCatalog::new(
        vec![
            movie(1, "Inception", "Sci-Fi", 2010, 148),
            movie(2, "The Dark Knight", "Action", 2008, 152),
            movie(3, "Interstellar", "Sci-Fi", 2014, 169),
            movie(4, "Parasite", "Drama", 2019, 132),
        ],
        vec![
            Studio { id: 1, name: "Studio A".into(), kind: StudioKind::Regular, capacity: 120 },
            Studio { id: 2, name: "Studio B".into(), kind: StudioKind::Regular, capacity: 100 },
            Studio { id: 3, name: "Studio C".into(), kind: StudioKind::Premiere, capacity: 80 },
        ],
        vec![
            schedule(1, 1, 1, "2023-09-20", "10:00", "12:30"),
            schedule(2, 2, 2, "2023-09-20", "13:00", "15:30"),
            schedule(3, 3, 3, "2023-09-20", "16:00", "19:00"),
            schedule(4, 4, 1, "2023-09-21", "18:30", "21:00"),
        ],
        vec![
            PriceRule { studio_kind: StudioKind::Regular, day_type: DayType::Weekday, price: 10.0 },
            PriceRule { studio_kind: StudioKind::Regular, day_type: DayType::Weekend, price: 12.0 },
            PriceRule { studio_kind: StudioKind::Premiere, day_type: DayType::Weekday, price: 15.0 },
            PriceRule { studio_kind: StudioKind::Premiere, day_type: DayType::Weekend, price: 18.0 },
        ],
    ))
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("cinema_booking=debug"))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

// Inception on 2023-09-20 at Studio A (Regular, Wednesday): two seats
// at $10 each, summary carries exactly those seats and the method.
#[test]
fn end_to_end_weekday_regular_booking() {
    init_tracing();
    let mut flow = BookingFlow::start(
        sample_catalog(),
        Arc::new(NoOccupancy),
        Config::default(),
        1,
    )
    .unwrap();

    assert_eq!(flow.step(), Step::ChooseSchedule);
    assert_eq!(
        flow.available_dates().iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["2023-09-20"]
    );
    flow.select_schedule(1).unwrap();
    assert_eq!(flow.unit_price(), 10.0);
    assert_eq!(flow.advance(), Some(Step::SelectSeats));

    assert_eq!(flow.toggle_seat("A1").unwrap(), SeatStatus::Selected);
    assert_eq!(flow.toggle_seat("A2").unwrap(), SeatStatus::Selected);
    assert_eq!(flow.total_price(), 20.0);
    assert_eq!(flow.advance(), Some(Step::Payment));

    flow.set_payment_method(PaymentMethod::NonCash);
    let summary = flow.complete().unwrap();

    assert_eq!(summary.movie.title, "Inception");
    assert_eq!(summary.schedule.id, 1);
    assert_eq!(summary.studio.name, "Studio A");
    assert_eq!(
        summary.seats.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["A1", "A2"]
    );
    assert_eq!(summary.unit_price, 10.0);
    assert_eq!(summary.total_price, 20.0);
    assert_eq!(summary.payment_method, PaymentMethod::NonCash);

    assert_eq!(summary.tickets.len(), 2);
    for ticket in &summary.tickets {
        assert_eq!(ticket.schedule_id, 1);
        assert_eq!(ticket.price, 10.0);
        assert_eq!(ticket.payment_method, PaymentMethod::NonCash);
    }

    // the navigation payload keeps the confirmation view's keys
    let payload = summary.payload();
    assert_eq!(payload["movie"]["title"], "Inception");
    assert_eq!(payload["totalPrice"], 20.0);
    assert_eq!(payload["paymentMethod"], "Non-Cash");
    assert_eq!(payload["seats"][0]["status"], "selected");
}

#[test]
fn pre_booked_seats_survive_the_whole_flow() {
    let mut flow = BookingFlow::start(
        sample_catalog(),
        Arc::new(FixedOccupancy::new(["A1", "A2", "B5"])),
        Config::default(),
        1,
    )
    .unwrap();
    flow.select_schedule(1).unwrap();
    flow.advance();

    assert_eq!(flow.toggle_seat("A1").unwrap(), SeatStatus::Booked);
    assert_eq!(flow.toggle_seat("A3").unwrap(), SeatStatus::Selected);
    flow.advance();

    let summary = flow.complete().unwrap();
    assert_eq!(summary.seats.len(), 1);
    assert_eq!(summary.seats[0].id, "A3");
    assert_eq!(summary.total_price, 10.0);
}

#[test]
fn random_occupancy_keeps_the_layout_shape() {
    // statuses vary run to run, the seat count and ids do not
    let catalog = sample_catalog();
    let studio = catalog.studio(3).unwrap();
    let map = SeatMap::generate(
        &studio,
        &Config::default().seating,
        &RandomOccupancy { booked_ratio: 0.5 },
    );
    assert_eq!(map.len(), 80);
    assert_eq!(
        map.count(SeatStatus::Available) + map.count(SeatStatus::Booked),
        80
    );
}

#[test]
fn movie_browsing_matches_demo_catalog() {
    let catalog = sample_catalog();
    assert_eq!(catalog.genres(), vec!["Sci-Fi", "Action", "Drama"]);
    let dramas = catalog.movies_by_genre(Some("Drama"));
    assert_eq!(dramas.len(), 1);
    assert_eq!(dramas[0].title, "Parasite");
}

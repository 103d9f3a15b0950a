use crate::models::{Movie, PriceRule, RateTable, Schedule, Studio};

/// Read-only reference data the booking flow runs against.
///
/// Injected so the in-memory fixture set can be swapped for a real
/// catalog service without touching the flow controller.
pub trait Catalog: Send + Sync {
    fn movies(&self) -> Vec<Movie>;
    fn movie(&self, id: i64) -> Option<Movie>;
    fn studio(&self, id: i64) -> Option<Studio>;
    fn schedule(&self, id: i64) -> Option<Schedule>;
    // Encounter order, the flow derives its date list from it
    fn schedules_for_movie(&self, movie_id: i64) -> Vec<Schedule>;
    fn rate_table(&self) -> RateTable;

    // Distinct genres in encounter order
    fn genres(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for movie in self.movies() {
            if !out.contains(&movie.genre) {
                out.push(movie.genre);
            }
        }
        out
    }

    // None (or the "All" pseudo-genre) returns the whole catalog
    fn movies_by_genre(&self, genre: Option<&str>) -> Vec<Movie> {
        match genre {
            None | Some("All") => self.movies(),
            Some(g) => self.movies().into_iter().filter(|m| m.genre == g).collect(),
        }
    }
}

pub struct InMemoryCatalog {
    movies: Vec<Movie>,
    studios: Vec<Studio>,
    schedules: Vec<Schedule>,
    rates: RateTable,
}

impl InMemoryCatalog {
    pub fn new(
        movies: Vec<Movie>,
        studios: Vec<Studio>,
        schedules: Vec<Schedule>,
        rules: Vec<PriceRule>,
    ) -> Self {
        InMemoryCatalog {
            movies,
            studios,
            schedules,
            rates: RateTable::new(rules),
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn movies(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn movie(&self, id: i64) -> Option<Movie> {
        self.movies.iter().find(|m| m.id == id).cloned()
    }

    fn studio(&self, id: i64) -> Option<Studio> {
        self.studios.iter().find(|s| s.id == id).cloned()
    }

    fn schedule(&self, id: i64) -> Option<Schedule> {
        self.schedules.iter().find(|s| s.id == id).cloned()
    }

    fn schedules_for_movie(&self, movie_id: i64) -> Vec<Schedule> {
        self.schedules
            .iter()
            .filter(|s| s.movie_id == movie_id)
            .cloned()
            .collect()
    }

    fn rate_table(&self) -> RateTable {
        self.rates.clone()
    }
}

//! Analytical queries over a loaded catalog.
//!
//! Every query is a read-only pass over `films` in source order:
//! - Grouping queries return `BTreeMap`s keyed by borrowed labels, with each
//!   bucket keeping source order
//! - Ranking queries use stable sorts, so equal keys keep source order
//! - "Most films" queries break count ties toward the smallest key
//!
//! Queries that need at least one film return `QueryError::NoData` on an
//! empty catalog.

use crate::error::{QueryError, QueryResult};
use crate::types::*;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Result size of the fixed top-N queries
pub const TOP_N: usize = 5;

impl FilmCatalog {
    /// Films grouped by country
    pub fn films_by_country(&self) -> BTreeMap<&str, Vec<&Film>> {
        let mut groups: BTreeMap<&str, Vec<&Film>> = BTreeMap::new();
        for film in &self.films {
            groups.entry(film.country.as_str()).or_default().push(film);
        }
        debug!("films_by_country: {} countries", groups.len());
        groups
    }

    /// Country with the most films, and how many
    ///
    /// Ties go to the lexicographically smallest country.
    pub fn country_with_most_films(&self) -> QueryResult<(&str, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for film in &self.films {
            *counts.entry(film.country.as_str()).or_insert(0) += 1;
        }
        max_count(counts).ok_or(QueryError::NoData {
            query: "country_with_most_films",
        })
    }

    /// Year with the most films, and how many
    ///
    /// Ties go to the earliest year.
    pub fn year_with_most_films(&self) -> QueryResult<(Year, usize)> {
        let mut counts: BTreeMap<Year, usize> = BTreeMap::new();
        for film in &self.films {
            *counts.entry(film.year).or_insert(0) += 1;
        }
        max_count(counts).ok_or(QueryError::NoData {
            query: "year_with_most_films",
        })
    }

    /// Distinct genres in first-occurrence order
    pub fn all_genres(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut genres = Vec::new();
        for genre in self.films.iter().flat_map(|f| f.genres.iter()) {
            if seen.insert(genre.as_str()) {
                genres.push(genre.as_str());
            }
        }
        genres
    }

    /// Films from `country` released in `from_year..=to_year`
    ///
    /// An inverted range matches nothing.
    pub fn films_by_country_and_year_range(
        &self,
        country: &str,
        from_year: Year,
        to_year: Year,
    ) -> Vec<&Film> {
        let films: Vec<&Film> = self
            .films
            .iter()
            .filter(|f| f.country == country && f.released_between(from_year, to_year))
            .collect();
        debug!(
            "films_by_country_and_year_range({}, {}, {}): {} films",
            country,
            from_year,
            to_year,
            films.len()
        );
        films
    }

    /// Films grouped by genre
    ///
    /// A film with N genre labels lands in N buckets. Membership is counted
    /// per label occurrence, like `genre_count`, so a label repeated on one
    /// film adds that film to the bucket once per repeat.
    pub fn films_by_genre(&self) -> BTreeMap<&str, Vec<&Film>> {
        let mut groups: BTreeMap<&str, Vec<&Film>> = BTreeMap::new();
        for film in &self.films {
            for genre in &film.genres {
                groups.entry(genre.as_str()).or_default().push(film);
            }
        }
        groups
    }

    /// Total occurrences of `genre` across all genre lists
    pub fn genre_count(&self, genre: &str) -> usize {
        self.films
            .iter()
            .flat_map(|f| f.genres.iter())
            .filter(|g| *g == genre)
            .count()
    }

    /// `count(genre_x) / count(genre_y)`
    ///
    /// Fails with `DivideByZero` when `genre_y` never occurs, even if
    /// `genre_x` doesn't either.
    pub fn genre_ratio(&self, genre_x: &str, genre_y: &str) -> QueryResult<f64> {
        let (mut x, mut y) = (0usize, 0usize);
        for genre in self.films.iter().flat_map(|f| f.genres.iter()) {
            if genre == genre_x {
                x += 1;
            }
            if genre == genre_y {
                y += 1;
            }
        }
        if y == 0 {
            return Err(QueryError::DivideByZero {
                genre: genre_y.to_string(),
            });
        }
        Ok(x as f64 / y as f64)
    }

    /// The `n` films with the greatest margin, descending
    pub fn top_by_margin(&self, n: usize) -> QueryResult<Vec<&Film>> {
        self.ensure_not_empty("top_by_margin")?;
        Ok(rank_by_margin(self.films.iter(), n))
    }

    /// The `n` films with the greatest margin among those released in
    /// `from_year..=to_year`
    ///
    /// A range that matches nothing gives an empty list.
    pub fn top_by_margin_in_year_range(
        &self,
        from_year: Year,
        to_year: Year,
        n: usize,
    ) -> QueryResult<Vec<&Film>> {
        self.ensure_not_empty("top_by_margin_in_year_range")?;
        let in_range = self
            .films
            .iter()
            .filter(|f| f.released_between(from_year, to_year));
        Ok(rank_by_margin(in_range, n))
    }

    /// The `n` best-rated films; equal ratings put the lower margin first
    pub fn top_by_rating_then_low_margin(&self, n: usize) -> QueryResult<Vec<&Film>> {
        self.ensure_not_empty("top_by_rating_then_low_margin")?;
        let mut ranked: Vec<&Film> = self.films.iter().collect();
        ranked.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.margin().cmp(&b.margin()))
        });
        ranked.truncate(n);
        Ok(ranked)
    }

    pub fn top5_by_margin(&self) -> QueryResult<Vec<&Film>> {
        self.top_by_margin(TOP_N)
    }

    pub fn top5_by_margin_1990_to_2000(&self) -> QueryResult<Vec<&Film>> {
        self.top_by_margin_in_year_range(1990, 2000, TOP_N)
    }

    pub fn top5_by_rating_then_low_margin(&self) -> QueryResult<Vec<&Film>> {
        self.top_by_rating_then_low_margin(TOP_N)
    }

    /// Headline numbers for the catalog
    pub fn summary(&self) -> CatalogSummary {
        let countries: HashSet<&str> = self.films.iter().map(|f| f.country.as_str()).collect();
        let year_span = self
            .films
            .iter()
            .map(|f| f.year)
            .fold(None, |span, year| match span {
                None => Some((year, year)),
                Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
            });

        CatalogSummary {
            films: self.films.len(),
            countries: countries.len(),
            genres: self.all_genres().len(),
            year_span,
        }
    }

    fn ensure_not_empty(&self, query: &'static str) -> QueryResult<()> {
        if self.films.is_empty() {
            return Err(QueryError::NoData { query });
        }
        Ok(())
    }
}

/// Entry with the highest count; the first (smallest) key wins ties
fn max_count<K: Copy>(counts: BTreeMap<K, usize>) -> Option<(K, usize)> {
    let mut best: Option<(K, usize)> = None;
    for (key, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((key, count));
        }
    }
    best
}

/// Stable sort by margin descending, then keep the first `n`
fn rank_by_margin<'a>(films: impl Iterator<Item = &'a Film>, n: usize) -> Vec<&'a Film> {
    let mut ranked: Vec<&Film> = films.collect();
    ranked.sort_by(|a, b| b.margin().cmp(&a.margin()));
    ranked.truncate(n);
    ranked
}

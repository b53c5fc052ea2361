//! Integration tests against the bundled `static/filmsmall.json` fixture.
//!
//! The fixture holds 30 films; China has the most (9) and 1985 is the
//! busiest year (4).

use film_catalog::{CatalogConfig, Film, FilmCatalog, FilmId, LoadError, QueryError};
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

fn fixture_config() -> CatalogConfig {
    CatalogConfig::default()
        .with_resource_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

fn load_fixture() -> FilmCatalog {
    FilmCatalog::load(&fixture_config()).expect("fixture should load")
}

fn ids(films: &[&Film]) -> Vec<FilmId> {
    films.iter().map(|f| f.id).collect()
}

#[test]
fn test_load_all_films() {
    let catalog = load_fixture();
    assert_eq!(catalog.len(), 30);
    assert_eq!(catalog.films().first().map(|f| f.id), Some(1));
    assert_eq!(catalog.get(18).map(|f| f.country.as_str()), Some("USA"));
}

#[test]
fn test_loading_twice_is_identical() {
    assert_eq!(load_fixture(), load_fixture());
}

#[test]
fn test_films_by_country() {
    let catalog = load_fixture();
    let groups = catalog.films_by_country();

    let countries: HashSet<&str> = catalog.films().iter().map(|f| f.country.as_str()).collect();
    assert_eq!(groups.keys().copied().collect::<HashSet<_>>(), countries);

    for (country, films) in &groups {
        assert!(films.iter().all(|f| f.country == *country));
    }
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, catalog.len());
}

#[test]
fn test_country_with_most_films() {
    let catalog = load_fixture();
    let (country, count) = catalog.country_with_most_films().unwrap();
    assert_eq!((country, count), ("China", 9));

    for films in catalog.films_by_country().values() {
        assert!(count >= films.len());
    }
}

#[test]
fn test_year_with_most_films() {
    let catalog = load_fixture();
    assert_eq!(catalog.year_with_most_films().unwrap(), (1985, 4));
}

#[test]
fn test_all_genres() {
    let catalog = load_fixture();
    let genres = catalog.all_genres();

    let unique: HashSet<&str> = genres.iter().copied().collect();
    assert_eq!(unique.len(), genres.len(), "no duplicates");

    for film in catalog.films() {
        for genre in &film.genres {
            assert!(unique.contains(genre.as_str()));
        }
    }
    assert_eq!(genres.first(), Some(&"drama"));
}

#[test]
fn test_films_by_country_and_year_range() {
    let catalog = load_fixture();
    let films = catalog.films_by_country_and_year_range("China", 1900, 2000);

    for film in &films {
        assert_eq!(film.country, "China");
        assert!(film.year >= 1900 && film.year <= 2000);
    }
    // Film 9 was released in 2000 and is included
    assert_eq!(ids(&films), vec![1, 4, 9, 13, 19, 21]);
}

#[test]
fn test_films_by_genre() {
    let catalog = load_fixture();
    let groups = catalog.films_by_genre();

    let genres: HashSet<&str> = catalog.all_genres().into_iter().collect();
    assert_eq!(groups.keys().copied().collect::<HashSet<_>>(), genres);

    for (genre, films) in &groups {
        assert!(films.iter().all(|f| f.has_genre(genre)));
    }
    let memberships: usize = groups.values().map(Vec::len).sum();
    let labels: usize = catalog.films().iter().map(|f| f.genres.len()).sum();
    assert_eq!(memberships, labels);
}

#[test]
fn test_top5_by_margin() {
    let catalog = load_fixture();
    let top = catalog.top5_by_margin().unwrap();

    assert_eq!(ids(&top), vec![11, 15, 16, 8, 19]);
    assert!(top.windows(2).all(|w| w[0].margin() >= w[1].margin()));
}

#[test]
fn test_top5_by_margin_1990_to_2000() {
    let catalog = load_fixture();
    let top = catalog.top5_by_margin_1990_to_2000().unwrap();

    assert!(top.iter().all(|f| f.year >= 1990 && f.year <= 2000));
    assert!(top.windows(2).all(|w| w[0].margin() >= w[1].margin()));
    // Films 19 (1990) and 9 (2000) sit on the range bounds
    assert_eq!(ids(&top), vec![8, 19, 2, 9, 27]);
}

#[test]
fn test_genre_ratio_horror_drama() {
    let catalog = load_fixture();
    let labels: Vec<&str> = catalog
        .films()
        .iter()
        .flat_map(|f| f.genres.iter().map(String::as_str))
        .collect();
    let horror = labels.iter().filter(|g| **g == "horror").count();
    let drama = labels.iter().filter(|g| **g == "drama").count();

    let ratio = catalog.genre_ratio("horror", "drama").unwrap();
    assert_eq!(ratio, horror as f64 / drama as f64);
    assert_eq!(ratio, 5.0 / 16.0);
}

#[test]
fn test_genre_ratio_unknown_denominator() {
    let catalog = load_fixture();
    assert!(matches!(
        catalog.genre_ratio("horror", "western"),
        Err(QueryError::DivideByZero { .. })
    ));
}

#[test]
fn test_top5_by_rating_then_low_margin() {
    let catalog = load_fixture();
    let top = catalog.top5_by_rating_then_low_margin().unwrap();

    // 27 and 19 share a 9.0 rating; 27 has the lower margin
    assert_eq!(ids(&top), vec![18, 7, 27, 19, 6]);
}

#[test]
fn test_summary() {
    let summary = load_fixture().summary();
    assert_eq!(summary.films, 30);
    assert_eq!(summary.countries, 7);
    assert_eq!(summary.genres, 9);
    assert_eq!(summary.year_span, Some((1954, 2019)));
}

#[test]
fn test_missing_datafile() {
    let config = fixture_config().with_datafile("missing.json");
    assert!(matches!(
        FilmCatalog::load(&config),
        Err(LoadError::FileNotFound { .. })
    ));
}

#[test]
fn test_malformed_datafile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[{{\"id\": 1, \"country\": \"China\"").unwrap();

    match FilmCatalog::load_from_file(&path) {
        Err(LoadError::Parse { file, .. }) => assert_eq!(file, "broken.json"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_config_file_points_at_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("catalog.toml");
    let resource_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    std::fs::write(
        &config_path,
        format!("resource_dir = {:?}\ndatafile = \"filmsmall.json\"\n", resource_dir.display().to_string()),
    )
    .unwrap();

    let config = CatalogConfig::from_toml_file(&config_path).unwrap();
    assert_eq!(FilmCatalog::load(&config).unwrap().len(), 30);
}

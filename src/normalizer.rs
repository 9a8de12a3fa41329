use crate::model::{ProviderKind, ScoreClass, SearchResult};
use crate::parser::{ImdbSuggestItem, RottenMovie};
use tracing::warn;

pub fn normalize_imdb(items: Vec<ImdbSuggestItem>) -> Vec<SearchResult> {
    items.into_iter().filter_map(normalize_imdb_item).collect()
}

fn normalize_imdb_item(item: ImdbSuggestItem) -> Option<SearchResult> {
    if item.id.is_empty() {
        warn!("Skipping IMDB suggestion without id: {}", item.label);
        return None;
    }

    Some(SearchResult {
        provider: ProviderKind::Imdb,
        id: item.id,
        title: item.label,
        poster: item.image.into_poster(),
        score: 0.0,
        score_class: None,
        year: item.year.unwrap_or(0),
    })
}

pub fn normalize_rotten(movies: Vec<RottenMovie>) -> Vec<SearchResult> {
    movies.into_iter().filter_map(normalize_rotten_movie).collect()
}

fn normalize_rotten_movie(movie: RottenMovie) -> Option<SearchResult> {
    if movie.url.is_empty() {
        warn!("Skipping Rotten Tomatoes movie without path: {}", movie.name);
        return None;
    }

    Some(SearchResult {
        provider: ProviderKind::RottenTomatoes,
        id: movie.url,
        title: movie.name,
        poster: movie.image,
        score: movie.meter_score.unwrap_or(0) as f32,
        score_class: movie.meter_class.as_deref().and_then(ScoreClass::from_label),
        year: movie.year.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::imdb_parser::ImageField;

    fn imdb_item(id: &str, image: ImageField, year: Option<u32>) -> ImdbSuggestItem {
        ImdbSuggestItem {
            id: id.into(),
            label: "Iron Man".into(),
            subline: String::new(),
            year,
            image,
        }
    }

    #[test]
    fn imdb_items_map_one_to_one() {
        let results = normalize_imdb(vec![
            imdb_item("tt0371746", ImageField::Text("http://x/y.jpg".into()), Some(2008)),
            imdb_item("tt1228705", ImageField::Other, None),
        ]);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.provider == ProviderKind::Imdb));
        assert_eq!(results[0].poster, "http://x/y.jpg");
        assert_eq!(results[0].year, 2008);
        assert_eq!(results[1].poster, "");
        assert_eq!(results[1].year, 0);
        assert_eq!(results[1].score, 0.0);
        assert_eq!(results[1].score_class, None);
    }

    #[test]
    fn imdb_items_without_id_are_dropped() {
        let results = normalize_imdb(vec![imdb_item("", ImageField::Absent, None)]);
        assert!(results.is_empty());
    }

    #[test]
    fn rotten_movies_carry_meter() {
        let results = normalize_rotten(vec![
            RottenMovie {
                url: "/m/iron_man".into(),
                name: "Iron Man".into(),
                image: "https://img/iron_man.jpg".into(),
                meter_class: Some("certified_fresh".into()),
                meter_score: Some(94),
                year: Some(2008),
                ..Default::default()
            },
            RottenMovie {
                url: "/m/iron_man_3".into(),
                name: "Iron Man 3".into(),
                meter_class: Some("N/A".into()),
                ..Default::default()
            },
        ]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "/m/iron_man");
        assert_eq!(results[0].score, 94.0);
        assert_eq!(results[0].score_class, Some(ScoreClass::CertifiedFresh));
        assert_eq!(results[1].score, 0.0);
        assert_eq!(results[1].score_class, None);
        assert_eq!(results[1].year, 0);
        assert!(results.iter().all(|r| r.provider == ProviderKind::RottenTomatoes));
    }
}

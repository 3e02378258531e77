//! 起動時に読み込む既定のカタログと管理者アカウント

use crate::application::auth::{self, AuthService};
use crate::application::store::{self, ServiceDependencies, StoreApplicationError};
use crate::domain::{MovieDetails, MovieId, commands::AddMovie};

/// (IMDB ID, 題名, 監督, スタジオ, 公開日, 概要, 価格)
const PREDEFINED_MOVIES: [(&str, &str, &str, &str, &str, &str, i64); 10] = [
    (
        "tt0111161",
        "The Shawshank Redemption",
        "Frank Darabont",
        "Castle Rock Entertainment",
        "1994-09-23",
        "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        15,
    ),
    (
        "tt0068646",
        "The Godfather",
        "Francis Ford Coppola",
        "Paramount Pictures",
        "1972-03-24",
        "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        20,
    ),
    (
        "tt0468569",
        "The Dark Knight",
        "Christopher Nolan",
        "Warner Bros.",
        "2008-07-18",
        "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        18,
    ),
    (
        "tt0109830",
        "Forrest Gump",
        "Robert Zemeckis",
        "Paramount Pictures",
        "1994-07-06",
        "The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold from the perspective of an Alabama man with an IQ of 75.",
        12,
    ),
    (
        "tt0133093",
        "The Matrix",
        "Lana Wachowski, Lilly Wachowski",
        "Warner Bros.",
        "1999-03-31",
        "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
        16,
    ),
    (
        "tt0167260",
        "The Lord of the Rings: The Return of the King",
        "Peter Jackson",
        "New Line Cinema",
        "2003-12-17",
        "Gandalf and Aragorn lead the World of Men against Sauron's army to draw his gaze from Frodo and Sam as they approach Mount Doom with the One Ring.",
        22,
    ),
    (
        "tt1375666",
        "Inception",
        "Christopher Nolan",
        "Warner Bros.",
        "2010-07-16",
        "A skilled thief is given a chance at redemption if he can successfully pull off an impossible task: inception.",
        19,
    ),
    (
        "tt0816692",
        "Interstellar",
        "Christopher Nolan",
        "Paramount Pictures",
        "2014-11-07",
        "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        21,
    ),
    (
        "tt0110912",
        "Pulp Fiction",
        "Quentin Tarantino",
        "Miramax Films",
        "1994-10-14",
        "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
        17,
    ),
    (
        "tt0120737",
        "The Lord of the Rings: The Fellowship of the Ring",
        "Peter Jackson",
        "New Line Cinema",
        "2001-12-19",
        "A meek Hobbit from the Shire and eight companions set out on a journey to destroy the powerful One Ring and save Middle-earth from the Dark Lord Sauron.",
        20,
    ),
];

/// (利用者名, パスワード)
const PREDEFINED_ADMINS: [(&str, &str); 3] = [
    ("admin", "Admin123!"),
    ("superadmin", "SuperAdmin456!"),
    ("manager", "Manager789!"),
];

/// 既定の映画の追加コマンド一覧
pub fn predefined_movies() -> Vec<AddMovie> {
    PREDEFINED_MOVIES
        .iter()
        .map(
            |&(id, title, director, studio, release_date, description, price)| AddMovie {
                movie_id: MovieId::new(id),
                details: MovieDetails {
                    title: title.to_string(),
                    director: director.to_string(),
                    studio: studio.to_string(),
                    release_date: release_date.to_string(),
                    description: description.to_string(),
                    price,
                },
            },
        )
        .collect()
}

/// 既定の映画をカタログに読み込み、読み込んだ本数を返す
///
/// 既に同じIDの映画がある場合は読み飛ばす。
pub async fn load_catalog(deps: &ServiceDependencies) -> store::Result<usize> {
    let mut loaded = 0;
    for cmd in predefined_movies() {
        match store::add_movie(deps, cmd).await {
            Ok(_) => loaded += 1,
            Err(StoreApplicationError::MovieAlreadyExists) => {}
            Err(e) => return Err(e),
        }
    }
    tracing::info!("Loaded {} movies from catalog.", loaded);
    Ok(loaded)
}

/// 既定の管理者アカウントを登録する
pub async fn load_admins(auth_service: &AuthService) -> auth::Result<usize> {
    let mut loaded = 0;
    for (username, password) in PREDEFINED_ADMINS {
        match auth_service.register_admin(username, password).await {
            Ok(_) => loaded += 1,
            Err(auth::AuthError::UsernameAlreadyTaken) => {}
            Err(e) => return Err(e),
        }
    }
    tracing::info!("Loaded {} administrator accounts.", loaded);
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Credential;

    #[test]
    fn test_predefined_movies_have_unique_ids() {
        let movies = predefined_movies();
        let mut ids: Vec<_> = movies.iter().map(|m| m.movie_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_predefined_prices_are_in_range() {
        assert!(
            predefined_movies()
                .iter()
                .all(|m| (12..=22).contains(&m.details.price))
        );
    }

    #[test]
    fn test_predefined_admin_passwords_are_valid_credentials() {
        for (_, password) in PREDEFINED_ADMINS {
            assert!(Credential::new(password).is_ok());
        }
    }
}

pub const MOVIE_ID_FOR_MOCK_REQUESTS: i64 = 1234;
pub const ROLE_FOR_MOCK_REQUESTS: &str = "Director";
pub const ACTOR_NAME_FOR_MOCK_REQUESTS: &str = "Greta Gerwig";
pub const TABLE_NAME_FOR_MOCK_REQUESTS: &str = "movie_crew";

mod news_for_app;
pub use news_for_app::*;

mod achievement_percentages;
pub use achievement_percentages::*;

mod player_summaries;
pub use player_summaries::*;

mod friend_list;
pub use friend_list::*;

mod player_achievements;
pub use player_achievements::*;

mod user_stats_for_game;
pub use user_stats_for_game::*;

mod owned_games;
pub use owned_games::*;

mod recently_played_games;
pub use recently_played_games::*;

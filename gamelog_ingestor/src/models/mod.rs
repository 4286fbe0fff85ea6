pub mod game_log;
pub mod request_params;
pub mod season;

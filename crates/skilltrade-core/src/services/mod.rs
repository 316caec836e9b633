pub mod access;
pub mod match_requests;
pub mod matching;
pub mod user_skills;
pub mod users;

pub mod contents;
pub mod profiles;
pub mod tracker_high_scores;
pub mod user_contents;

pub use contents::Entity as Contents;
pub use contents::Model as Content;
pub use profiles::Entity as Profiles;
pub use profiles::Model as Profile;
pub use tracker_high_scores::Entity as TrackerHighScores;
pub use tracker_high_scores::Model as TrackerHighScore;
pub use user_contents::Entity as UserContents;
pub use user_contents::Model as UserContent;

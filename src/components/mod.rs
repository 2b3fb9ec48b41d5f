// UI Components
// The random user widget and the pieces it is drawn from

pub mod appreciation_overlay;
pub mod icons;
pub mod loading_indicator;
pub mod profile_card;
pub mod random_user;

pub use random_user::RandomUser;

pub use super::course::Entity as Course;
pub use super::lecture::Entity as Lecture;
pub use super::payment::Entity as Payment;
pub use super::playlist_item::Entity as PlaylistItem;
pub use super::stats::Entity as Stats;
pub use super::user::Entity as User;

mod home;
pub use home::Home;

mod profiles;
pub use profiles::Profiles;

mod edit;
pub use edit::Edit;

mod public_profile;
pub use public_profile::PublicProfile;

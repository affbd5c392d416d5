pub mod about;
pub mod become_a_carer;
pub mod confirmation;
pub mod demo;
pub mod families;
pub mod feedback;
pub mod home;
pub mod onboarding;
pub mod profile_building;
pub mod waitlist;

// External APIs

pub mod random_user;

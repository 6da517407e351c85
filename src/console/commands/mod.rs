pub mod dashboard;
pub mod kantor;
pub mod logactivity;
pub mod roles;
pub mod users;

mod admin;
mod approvals;
mod contact;
mod dashboard;
mod home;
mod login;
mod register;

pub use admin::AdminHome;
pub use approvals::Approvals;
pub use contact::Contact;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use register::Register;
